use std::path::Path;

use serde::Serialize;

use ctest_runner_core::TestCase;

/// Tally of evaluated cases across one run.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }
}

pub fn print_executable_header(path: &Path, case_count: usize) {
    println!("🧪 {} ({} cases)", path.display(), case_count);
}

pub fn print_case_passed(case: &TestCase) {
    println!("   ✅ {}", case.record().qualified_name());
}

/// Print a failed case, followed by its rendered failure detail indented
/// underneath.
pub fn print_case_failed(case: &TestCase, detail: Option<&str>) {
    println!("   ❌ {}", case.record().qualified_name());
    if let Some(detail) = detail {
        for line in detail.lines() {
            println!("      {}", line);
        }
    }
}

pub fn print_case_skipped(case: &TestCase, reason: &str) {
    println!("   ⏭  {} ({})", case.record().qualified_name(), reason);
}

pub fn print_summary(summary: &RunSummary) {
    println!();
    println!(
        "Summary: {} cases ({} passed, {} failed, {} skipped)",
        summary.total(),
        summary.passed,
        summary.failed,
        summary.skipped
    );
}
