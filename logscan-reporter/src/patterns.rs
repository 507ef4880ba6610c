//! Line matchers for access-log records.
//!
//! Three independent matchers, each a pure function over a single line.
//! A line may satisfy any subset of them; none of them ever rejects a
//! line as malformed.

use once_cell::sync::Lazy;
use regex::Regex;

// Dotted-quad source address anchored at the start of the line.
static ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+\.\d+\.\d+\.\d+)").expect("valid regex pattern"));

// HTTP method token inside a quoted request, followed by the path.
static ENDPOINT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""(?:GET|POST) (\S+)"#).expect("valid regex pattern"));

// Space-delimited 401 status or the explicit failure phrase.
static FAILURE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" 401 |Invalid credentials").expect("valid regex pattern"));

/// Extract the source address from a line, if it begins with one.
pub fn source_address(line: &str) -> Option<&str> {
    ADDRESS_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract the requested endpoint path from a line, if it contains a
/// quoted `GET` or `POST` request.
pub fn endpoint(line: &str) -> Option<&str> {
    ENDPOINT_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Whether a line signals a failed login attempt.
pub fn is_failed_login(line: &str) -> bool {
    FAILURE_RE.is_match(line)
}
