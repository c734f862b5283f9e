use std::io;

/// Errors that can occur during ctest-runner operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Test failed : {suite_name}:{test_name}")]
    TestFailure {
        suite_name: String,
        test_name: String,
    },

    #[error("Test skipped: {reason}")]
    TestSkipped { reason: String },
}

/// Result type alias for ctest-runner operations
pub type Result<T> = std::result::Result<T, Error>;
