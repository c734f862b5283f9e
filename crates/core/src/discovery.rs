//! Discovery of native CTest executables by filename convention

use std::path::Path;

use tracing::debug;

use crate::{
    error::Result,
    executor,
    interfaces::Collector,
    parser,
    report::TestCase,
};

/// Check whether a path names a CTest executable.
///
/// The convention is the one most C build trees use for their unit-test
/// binaries: the base name starts with "test" and there is no extension.
/// Pure predicate; the file's content and permissions are never inspected.
pub fn is_ctest_executable(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.starts_with("test") && path.extension().is_none()
}

/// Collector for CTest executables: recognizes them by name and expands one
/// binary into the cases it reports.
pub struct CTestCollector;

impl Collector for CTestCollector {
    fn matches(&self, path: &Path) -> bool {
        is_ctest_executable(path)
    }

    /// Run the binary once, parse everything it printed up front, and wrap
    /// each reconstructed record as an independent case.
    fn collect(&self, path: &Path) -> Result<Vec<TestCase>> {
        let output = executor::capture_output(path)?;
        let records = parser::parse_output(&output);
        debug!("Collected {} test cases from {:?}", records.len(), path);

        Ok(records
            .into_iter()
            .map(|record| TestCase::new(record, path.to_path_buf()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_names_are_accepted() {
        assert!(is_ctest_executable(Path::new("test_widgets")));
        assert!(is_ctest_executable(Path::new("build/tests/testsuite")));
        assert!(is_ctest_executable(Path::new("/abs/path/test")));
    }

    #[test]
    fn test_extension_is_declined() {
        assert!(!is_ctest_executable(Path::new("test_widgets.c")));
        assert!(!is_ctest_executable(Path::new("test_widgets.exe")));
        assert!(!is_ctest_executable(Path::new("build/test.out")));
    }

    #[test]
    fn test_other_prefixes_are_declined() {
        assert!(!is_ctest_executable(Path::new("widgets_test")));
        assert!(!is_ctest_executable(Path::new("Test_widgets")));
        assert!(!is_ctest_executable(Path::new(".test_hidden")));
        assert!(!is_ctest_executable(Path::new("bench_widgets")));
    }

    #[test]
    fn test_collector_matches_delegates_to_predicate() {
        let collector = CTestCollector;
        assert!(collector.matches(Path::new("test_widgets")));
        assert!(!collector.matches(Path::new("main.c")));
    }

    #[cfg(unix)]
    mod collect {
        use super::*;
        use crate::types::Condition;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        #[test]
        fn test_collect_yields_one_case_per_reported_test() {
            let dir = TempDir::new().unwrap();
            let exe = dir.path().join("test_widgets");
            fs::write(
                &exe,
                "#!/bin/sh\n\
                 echo 'TEST 1/2 widgets:create [OK]'\n\
                 echo 'TEST 2/2 widgets:resize [FAIL]'\n\
                 echo 'ERR: src/widgets.c:88 width mismatch'\n\
                 exit 1\n",
            )
            .unwrap();
            fs::set_permissions(&exe, fs::Permissions::from_mode(0o755)).unwrap();

            let cases = CTestCollector.collect(&exe).unwrap();

            assert_eq!(cases.len(), 2);
            assert_eq!(cases[0].name(), "create");
            assert_eq!(cases[0].record().condition, Condition::Ok);
            assert_eq!(cases[1].record().condition, Condition::Fail);
            assert_eq!(cases[1].record().file_name, "src/widgets.c");
            assert_eq!(cases[1].source(), exe.as_path());
        }

        #[test]
        fn test_collect_on_silent_binary_yields_nothing() {
            let dir = TempDir::new().unwrap();
            let exe = dir.path().join("test_silent");
            fs::write(&exe, "#!/bin/sh\nexit 0\n").unwrap();
            fs::set_permissions(&exe, fs::Permissions::from_mode(0o755)).unwrap();

            let cases = CTestCollector.collect(&exe).unwrap();
            assert!(cases.is_empty());
        }
    }
}
