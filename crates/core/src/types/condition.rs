use serde::{Deserialize, Serialize};

/// Three-valued outcome classification reported by a CTest executable.
///
/// Anything the binary prints that is not a recognized condition token is
/// coerced to `Fail` rather than preserved verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    Ok,
    Fail,
    Skipped,
}

impl Condition {
    /// Parse a condition token as it appears in CTest output, with the
    /// surrounding `[` `]` already stripped.
    pub fn from_token(token: &str) -> Self {
        match token {
            "OK" => Condition::Ok,
            "SKIPPED" => Condition::Skipped,
            // "FAIL" and any unrecognized token
            _ => Condition::Fail,
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::Ok => write!(f, "OK"),
            Condition::Fail => write!(f, "FAIL"),
            Condition::Skipped => write!(f, "SKIPPED"),
        }
    }
}
