pub mod condition;
pub mod record;

// Re-export commonly used types
pub use condition::Condition;
pub use record::{NO_ERROR_DATA, TestRecord, UNKNOWN_FILE};
