//! Reasons a line that fits a grammar still yields no record.

use thiserror::Error;

/// Failure to turn the captured text of a matching line into typed values.
///
/// These never escape the classifier: a line that fails extraction is
/// treated exactly like a line that matched nothing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// A capture group the grammar promises was absent.
    #[error("missing `{group}` group")]
    MissingGroup { group: &'static str },

    /// Captured text was not a number.
    #[error("`{text}` is not a number")]
    NotANumber { text: String },

    /// The numbers do not name a real calendar date.
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// The digits do not name a clock time.
    #[error("`{text}` is not a clock time")]
    InvalidTime { text: String },
}
