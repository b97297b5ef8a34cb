//! Ordered pattern dispatch for classifying log lines.

use regex::{Captures, Regex};

use crate::error::ExtractError;

/// Something that can recognise one line shape and pull a value out of it.
pub trait LineMatcher {
    type Output;

    /// Returns the extracted value, or `None` when the line does not fit
    /// or its fields are invalid.
    fn try_match(&self, line: &str) -> Option<Self::Output>;
}

/// Tries each matcher in order and returns the first success.
pub fn first_match<M: LineMatcher>(matchers: &[M], line: &str) -> Option<M::Output> {
    matchers.iter().find_map(|matcher| matcher.try_match(line))
}

/// Runs `extract` on the captures of `regex`, demoting extraction errors
/// to a non-match.
pub(crate) fn capture_with<T>(
    regex: &Regex,
    line: &str,
    extract: impl FnOnce(&Captures<'_>) -> Result<T, ExtractError>,
) -> Option<T> {
    let captures = regex.captures(line)?;
    match extract(&captures) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::trace!(%err, line, "matching line rejected");
            None
        }
    }
}

/// Returns a named group that the grammar always captures.
pub(crate) fn required<'h>(
    captures: &Captures<'h>,
    group: &'static str,
) -> Result<&'h str, ExtractError> {
    captures
        .name(group)
        .map(|m| m.as_str())
        .ok_or(ExtractError::MissingGroup { group })
}

/// Returns a named group that the grammar may leave out.
pub(crate) fn optional<'h>(captures: &Captures<'h>, group: &str) -> Option<&'h str> {
    captures.name(group).map(|m| m.as_str())
}
