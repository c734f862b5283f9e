use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use ctest_runner_core::{CTestCollector, Collector, Error, TestRecord};

use crate::display::formatter::{self, RunSummary};
use crate::utils::{find_test_executables, resolve_path};

/// JSON shape emitted with `--json`: one entry per executable with its
/// parsed records.
#[derive(Serialize)]
struct ExecutableReport {
    executable: PathBuf,
    cases: Vec<TestRecord>,
}

pub fn run_command(path_arg: &str, json: bool) -> Result<()> {
    let root = resolve_path(path_arg)?;
    let executables = find_test_executables(&root)?;

    if executables.is_empty() {
        println!("No test executables found under {}", root.display());
        return Ok(());
    }

    let collector = CTestCollector;
    let mut summary = RunSummary::default();
    let mut reports = Vec::new();

    for exe in &executables {
        info!("Collecting test results from {}", exe.display());
        let cases = collector
            .collect(exe)
            .with_context(|| format!("Failed to execute {}", exe.display()))?;

        if json {
            reports.push(ExecutableReport {
                executable: exe.clone(),
                cases: cases.iter().map(|case| case.record().clone()).collect(),
            });
        } else {
            formatter::print_executable_header(exe, cases.len());
        }

        for case in &cases {
            match case.run() {
                Ok(()) => {
                    summary.passed += 1;
                    if !json {
                        formatter::print_case_passed(case);
                    }
                }
                Err(err @ Error::TestFailure { .. }) => {
                    summary.failed += 1;
                    if !json {
                        formatter::print_case_failed(case, case.repr_failure(&err).as_deref());
                    }
                }
                Err(Error::TestSkipped { reason }) => {
                    summary.skipped += 1;
                    if !json {
                        formatter::print_case_skipped(case, &reason);
                    }
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        formatter::print_summary(&summary);
    }

    if summary.failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}
