//! Error type for fixed-layout date parsing.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateParseError {
    /// Input ends before the last field of the layout.
    #[error("date string too short: layout needs {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },
    /// A field slice is not a non-negative decimal integer.
    #[error("invalid {field} field {value:?}")]
    InvalidField { field: &'static str, value: String },
    /// All fields are numeric but do not name a real UTC date-time.
    #[error("date out of calendar range: {0}")]
    OutOfRange(String),
}
