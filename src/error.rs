//! Error type shared by every fallible date operation.

/// Errors produced when decoding dates or converting timestamps.
#[derive(Debug, thiserror::Error)]
pub enum DateError {
    #[error("'{input}' does not match pattern {pattern}")]
    Layout { input: String, pattern: &'static str },

    #[error("'{input}' is not a valid value for pattern {pattern}: {reason}")]
    Calendar {
        input: String,
        pattern: &'static str,
        reason: String,
    },

    #[error("Timestamp out of range: {0} ms")]
    TimestampOutOfRange(i64),
}

impl DateError {
    /// Whether the input text or integer failed to decode against a pattern
    pub fn is_parse_error(&self) -> bool {
        matches!(self, DateError::Layout { .. } | DateError::Calendar { .. })
    }
}

pub type Result<T> = std::result::Result<T, DateError>;
