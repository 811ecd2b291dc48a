//! # Widget Error Types
//!
//! Every fallible operation in the toolkit reports one of these.

use thiserror::Error;

/// Errors raised by widgets, validators and backends.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// A required value was missing or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A numeric or geometric constraint was violated.
    #[error("value out of range: {0}")]
    Range(&'static str),

    /// The operation is not valid in the current state (e.g. a double press).
    #[error("invalid state: {0}")]
    State(&'static str),

    /// The backend does not provide a required capability.
    #[error("unsupported: {0}")]
    Unsupported(&'static str),

    /// A backend call failed.
    #[error("backend i/o failure: {0}")]
    Io(String),

    /// A style sheet could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Internal failure with no better classification.
    #[error("unknown failure: {0}")]
    Unknown(String),
}

/// Result type for widget operations.
pub type UiResult<T> = Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = UiError::Range("tab width is negative");
        assert_eq!(err.to_string(), "value out of range: tab width is negative");

        let err = UiError::Io("font atlas missing".to_string());
        assert!(err.to_string().contains("font atlas missing"));
    }
}
