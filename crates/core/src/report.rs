//! Reportable test cases and their evaluation
//!
//! A `TestCase` wraps one finalized record together with the executable it
//! came from. The tests themselves already ran inside the binary; evaluating
//! a case only translates its recorded condition into the signal the front
//! end expects.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{
    error::{Error, Result},
    types::{Condition, TestRecord},
};

/// Reason attached to every skipped case, matching the macro a C test uses
/// to skip itself.
pub const SKIP_REASON: &str = "CTEST_SKIP()";

/// Evaluation classification of a finalized case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Passed,
    Failed,
    Skipped,
}

/// One native test case outcome, independently reportable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCase {
    record: TestRecord,
    source: PathBuf,
}

impl TestCase {
    pub fn new(record: TestRecord, source: PathBuf) -> Self {
        Self { record, source }
    }

    /// Display label: the bare test name, without the suite.
    pub fn name(&self) -> &str {
        &self.record.test_name
    }

    pub fn record(&self) -> &TestRecord {
        &self.record
    }

    /// The executable this case was collected from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Evaluate the already-finalized result.
    ///
    /// A failed case raises the failure signal identifying it, a skipped
    /// case raises the skip signal with the fixed reason, and a passed case
    /// succeeds silently.
    pub fn run(&self) -> Result<()> {
        match self.record.condition {
            Condition::Fail => Err(Error::TestFailure {
                suite_name: self.record.suite_name.clone(),
                test_name: self.record.test_name.clone(),
            }),
            Condition::Skipped => Err(Error::TestSkipped {
                reason: SKIP_REASON.to_string(),
            }),
            Condition::Ok => Ok(()),
        }
    }

    /// Render failure detail for an error raised by [`run`](Self::run).
    ///
    /// Only the failure signal gets a rendering; any other error is not a
    /// test failure and yields nothing.
    pub fn repr_failure(&self, error: &Error) -> Option<String> {
        match error {
            Error::TestFailure { .. } => Some(format!(
                "Test failed : {}:{} at {}:{}\n       error: {}\n",
                self.record.suite_name,
                self.record.test_name,
                self.record.file_name,
                self.record.line_number,
                self.record.error,
            )),
            _ => None,
        }
    }

    /// Location metadata for the front end: source executable, zero-based
    /// line, display label. The sentinel line 0 stays 0 instead of going
    /// negative.
    pub fn report_info(&self) -> (&Path, u32, &str) {
        (
            &self.source,
            self.record.line_number.saturating_sub(1),
            self.name(),
        )
    }

    /// Total classification of the finalized condition, for front ends that
    /// tally without going through the signal path.
    pub fn outcome(&self) -> Outcome {
        match self.record.condition {
            Condition::Ok => Outcome::Passed,
            Condition::Fail => Outcome::Failed,
            Condition::Skipped => Outcome::Skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(condition: Condition) -> TestCase {
        TestCase::new(
            TestRecord::new("suite1", "caseA", condition),
            PathBuf::from("/build/test_widgets"),
        )
    }

    #[test]
    fn test_passed_case_runs_silently() {
        assert!(case(Condition::Ok).run().is_ok());
    }

    #[test]
    fn test_failed_case_raises_failure_signal() {
        let err = case(Condition::Fail).run().unwrap_err();
        assert!(matches!(
            err,
            Error::TestFailure { ref suite_name, ref test_name }
                if suite_name == "suite1" && test_name == "caseA"
        ));
    }

    #[test]
    fn test_skipped_case_raises_skip_signal_with_fixed_reason() {
        let err = case(Condition::Skipped).run().unwrap_err();
        assert!(matches!(
            err,
            Error::TestSkipped { ref reason } if reason == SKIP_REASON
        ));
    }

    #[test]
    fn test_failure_rendering_uses_fixed_template() {
        let mut record = TestRecord::new("suite1", "caseB", Condition::Fail);
        record.attach_error("src/a.c", 10, "assertion failed");
        let case = TestCase::new(record, PathBuf::from("/build/test_widgets"));

        let err = case.run().unwrap_err();
        let rendered = case.repr_failure(&err).unwrap();

        assert_eq!(
            rendered,
            "Test failed : suite1:caseB at src/a.c:10\n       error: assertion failed\n"
        );
    }

    #[test]
    fn test_failure_rendering_with_sentinels() {
        let case = case(Condition::Fail);
        let err = case.run().unwrap_err();

        assert_eq!(
            case.repr_failure(&err).unwrap(),
            "Test failed : suite1:caseA at unknown_file:0\n       error: (no error data found)\n"
        );
    }

    #[test]
    fn test_non_failure_errors_render_nothing() {
        let case = case(Condition::Fail);
        let err = Error::TestSkipped {
            reason: SKIP_REASON.to_string(),
        };
        assert!(case.repr_failure(&err).is_none());
    }

    #[test]
    fn test_report_info_is_zero_based() {
        let mut record = TestRecord::new("suite1", "caseB", Condition::Fail);
        record.attach_error("src/a.c", 10, "boom");
        let case = TestCase::new(record, PathBuf::from("/build/test_widgets"));

        let (path, line, label) = case.report_info();
        assert_eq!(path, Path::new("/build/test_widgets"));
        assert_eq!(line, 9);
        assert_eq!(label, "caseB");
    }

    #[test]
    fn test_report_info_sentinel_line_saturates() {
        let (_, line, _) = case(Condition::Ok).report_info();
        assert_eq!(line, 0);
    }

    #[test]
    fn test_outcome_classification() {
        assert_eq!(case(Condition::Ok).outcome(), Outcome::Passed);
        assert_eq!(case(Condition::Fail).outcome(), Outcome::Failed);
        assert_eq!(case(Condition::Skipped).outcome(), Outcome::Skipped);
    }
}
