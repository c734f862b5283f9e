use std::path::Path;

use crate::{error::Result, report::TestCase};

/// Collection hook for recognizing and expanding native test files.
///
/// Implementations decide whether a candidate path is theirs to handle and,
/// if so, produce the sequence of independently reportable test cases it
/// contains. A path for which `matches` returns false is declined and left
/// to other collection mechanisms.
pub trait Collector {
    /// Pure predicate: does this path name a test file this collector handles?
    fn matches(&self, path: &Path) -> bool;

    /// Expand one matching file into its contained test cases.
    fn collect(&self, path: &Path) -> Result<Vec<TestCase>>;
}
