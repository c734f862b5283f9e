use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;
use walkdir::WalkDir;

use ctest_runner_core::is_ctest_executable;

/// Resolve a CLI path argument to an absolute path, failing if it does not
/// exist.
pub fn resolve_path(path_arg: &str) -> Result<PathBuf> {
    let path = Path::new(path_arg);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    if !absolute.exists() {
        anyhow::bail!("Path not found: {}", absolute.display());
    }

    Ok(absolute)
}

/// Find every test executable at or under `root`, in sorted walk order.
///
/// A file argument is checked against the naming convention directly; a
/// directory is walked recursively. Non-matching files are simply left to
/// whatever else wants them.
pub fn find_test_executables(root: &Path) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(if is_ctest_executable(root) {
            vec![root.to_path_buf()]
        } else {
            Vec::new()
        });
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && is_ctest_executable(entry.path()) {
            found.push(entry.into_path());
        }
    }

    debug!("Discovered {} test executables under {:?}", found.len(), root);
    Ok(found)
}
