//! Execution of a native test binary and capture of its output

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::Result;

/// Run a test executable to completion and capture its standard output.
///
/// The binary is invoked with no arguments and the default environment, and
/// the call blocks until it exits. A nonzero exit status is not an error
/// here: CTest binaries exit nonzero whenever any contained test failed, and
/// their output is exactly what we want to parse in that case. Only a
/// failure to spawn or read the child propagates.
pub fn capture_output(path: &Path) -> Result<String> {
    debug!("Executing test binary: {:?}", path);

    let output = Command::new(path).output()?;

    if !output.status.success() {
        // Expected whenever the binary contains failing tests.
        debug!("Test binary {:?} exited with {}", path, output.status);
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
