//! Line-oriented parsing of CTest executable output
//!
//! A CTest binary reports each case on a line shaped like
//! `TEST 2/5 suite:case [OK]`, optionally followed by an
//! `ERR: file:line message` detail line for failures. The success marker
//! occasionally ends up on its own `[OK]` line when the test itself printed
//! a trailing newline, so that marker retroactively applies to the last
//! opened record.

use tracing::trace;

use crate::types::{Condition, TestRecord};

/// Scan captured output and reconstruct the sequence of test outcomes.
///
/// Single forward pass: every line is trimmed, matched against the small
/// fixed vocabulary of prefixes, and anything unrecognized (test banners,
/// summary lines, output printed by the tests themselves) is ignored.
/// `ERR:` and `[OK]` lines refine the most recently opened record only.
pub fn parse_output(output: &str) -> Vec<TestRecord> {
    let mut records: Vec<TestRecord> = Vec::new();

    for line in output.lines().map(str::trim) {
        if line.starts_with("TEST") {
            if let Some(record) = parse_test_line(line) {
                records.push(record);
            } else {
                trace!("Ignoring malformed TEST line: {}", line);
            }
        } else if line.starts_with("ERR:") {
            if let Some(record) = records.last_mut() {
                apply_error_line(line, record);
            }
        } else if line.starts_with("[OK]") {
            // Success marker pushed onto its own line by an embedded newline.
            if let Some(record) = records.last_mut() {
                record.condition = Condition::Ok;
            }
        }
    }

    records
}

/// Parse a `TEST n/N suite:case [CONDITION]` line into a fresh record.
///
/// The third whitespace-delimited token is the composite `suite:case`
/// identifier and the last token carries the condition in brackets. Lines
/// that do not carry both are not protocol lines and yield nothing.
fn parse_test_line(line: &str) -> Option<TestRecord> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let composite = tokens.get(2)?;
    let last = tokens.last()?;

    let (suite_name, test_name) = composite.split_once(':')?;
    let condition = Condition::from_token(last.trim_matches(|c| c == '[' || c == ']'));

    Some(TestRecord::new(suite_name, test_name, condition))
}

/// Apply an `ERR: file:line message` detail line to the given record.
///
/// The location token must contain a colon separating file name and line
/// number; otherwise the line carries no usable location and the record is
/// left untouched, sentinels included. The condition is never changed here.
fn apply_error_line(line: &str, record: &mut TestRecord) {
    let mut parts = line.splitn(3, ' ');
    let _tag = parts.next();
    let (Some(location), Some(message)) = (parts.next(), parts.next()) else {
        return;
    };

    let Some((file_name, line_number)) = location.rsplit_once(':') else {
        return;
    };
    let Ok(line_number) = line_number.parse::<u32>() else {
        return;
    };

    record.attach_error(file_name, line_number, message.trim_start());
}
