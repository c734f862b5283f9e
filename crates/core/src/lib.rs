//! ctest-runner - An adapter for reporting native CTest unit-test executables
//!
//! This crate provides functionality to:
//! - Recognize pre-built CTest binaries by filename convention
//! - Run each binary and capture the line protocol it prints
//! - Reconstruct discrete test outcomes (suite, case, condition, failure
//!   detail) and surface them as independently reportable cases
pub mod discovery;
pub mod error;
pub mod executor;
pub mod interfaces;
pub mod parser;
pub mod report;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use discovery::{CTestCollector, is_ctest_executable};
pub use interfaces::Collector;
pub use parser::parse_output;
pub use report::{Outcome, SKIP_REASON, TestCase};
