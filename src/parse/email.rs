//! Email address detection in free text.
//!
//! Two stages: a loose scan finds candidate substrings, then each candidate is
//! checked against a strict addr-spec grammar. The loose pattern is cheap and
//! over-inclusive; the strict one drops version strings, doubled dots and other
//! near-misses.

use regex::Regex;
use std::sync::LazyLock;

// Loose scan: local part, '@', domain labels, alphabetic TLD of 2+ letters.
// Word boundaries are ASCII-only so adjacent CJK or accented letters still delimit.
const EMAIL_SCAN_PATTERN: &str =
    r"(?-u:\b)[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}(?-u:\b)";

// Strict addr-spec: dot-atom local part, one '@', dot-atom domain with at least one dot
const EMAIL_ADDR_SPEC_PATTERN: &str = r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+$";

/// Helper function to safely compile a regex pattern, panicking with a detailed error message
/// if compilation fails. Used for static regex patterns that are compile-time constants.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static EMAIL_SCAN_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(EMAIL_SCAN_PATTERN, "EMAIL_SCAN_RE"));
static EMAIL_ADDR_SPEC_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(EMAIL_ADDR_SPEC_PATTERN, "EMAIL_ADDR_SPEC_RE"));

/// Compiles the email patterns now instead of on the first request.
pub fn init_email_patterns() {
    LazyLock::force(&EMAIL_SCAN_RE);
    LazyLock::force(&EMAIL_ADDR_SPEC_RE);
}

/// Returns true if `candidate` is a well-formed `local@domain` address.
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_ADDR_SPEC_RE.is_match(candidate)
}

/// Finds every email address in `text`, left to right.
///
/// Candidates come from the loose scan (leftmost, non-overlapping matches);
/// only those passing `is_valid_email` are returned. Duplicates are kept.
pub fn find_emails(text: &str) -> Vec<String> {
    EMAIL_SCAN_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|candidate| {
            let valid = is_valid_email(candidate);
            if !valid {
                log::trace!("Dropping malformed email candidate: {}", candidate);
            }
            valid
        })
        .map(str::to_string)
        .collect()
}
