use serde::{Deserialize, Serialize};

use super::condition::Condition;

/// Sentinel file name assigned until an `ERR:` line supplies the real one.
pub const UNKNOWN_FILE: &str = "unknown_file";

/// Sentinel error message assigned until an `ERR:` line supplies detail.
pub const NO_ERROR_DATA: &str = "(no error data found)";

/// One reconstructed test outcome scraped from CTest output.
///
/// Records are created when a `TEST` line is seen and may be refined in
/// place by a later `ERR:` or `[OK]` line, always the most recently
/// created record. Location and error fields hold explicit sentinel
/// defaults rather than options, so rendering never has to special-case
/// absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRecord {
    pub condition: Condition,
    pub suite_name: String,
    pub test_name: String,
    pub file_name: String,
    pub line_number: u32,
    pub error: String,
}

impl TestRecord {
    /// Create a record with sentinel location and error detail.
    pub fn new(suite_name: impl Into<String>, test_name: impl Into<String>, condition: Condition) -> Self {
        Self {
            condition,
            suite_name: suite_name.into(),
            test_name: test_name.into(),
            file_name: UNKNOWN_FILE.to_string(),
            line_number: 0,
            error: NO_ERROR_DATA.to_string(),
        }
    }

    /// Attach failure detail from an `ERR:` line, replacing the sentinels.
    pub fn attach_error(&mut self, file_name: impl Into<String>, line_number: u32, error: impl Into<String>) {
        self.file_name = file_name.into();
        self.line_number = line_number;
        self.error = error.into();
    }

    /// The composite `suite:test` identifier as printed by the binary.
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.suite_name, self.test_name)
    }
}
