pub mod scan;

pub use scan::{find_test_executables, resolve_path};
