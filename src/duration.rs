//! Parsing of compact `XmYs` duration strings
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([0-9]{1,2})m)?(?:([0-9]{1,2})s)?$").expect("duration pattern is valid")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("invalid duration: {0:?} (expected e.g. 5m, 45s, 2m30s)")]
    Invalid(String),
}

/// Converts a string such as `2m30s` to a total number of seconds.
///
/// Minutes and seconds are each one or two digits and either may be left
/// out, but not both. Values are not normalized, so `75s` is 75 seconds.
pub fn parse(input: &str) -> Result<u64, DurationError> {
    let invalid = || DurationError::Invalid(input.to_string());

    let caps = DURATION_RE.captures(input).ok_or_else(invalid)?;
    let (minutes, seconds) = (caps.get(1), caps.get(2));
    if minutes.is_none() && seconds.is_none() {
        return Err(invalid());
    }

    let value = |m: Option<regex::Match<'_>>| -> Result<u64, DurationError> {
        m.map_or(Ok(0), |m| m.as_str().parse().map_err(|_| invalid()))
    };

    Ok(value(minutes)? * 60 + value(seconds)?)
}
