//! Recoverable errors
//!
//! Malformed or unrecognized quantity text is routine input, so it is
//! reported as a value. Programming errors (null unit conversions, broken
//! unit tables) are not represented here: they panic at the call site.

use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
    pub const MISSING_NUMBER: &str = "MISSING_NUMBER";
    pub const MISSING_UNIT: &str = "MISSING_UNIT";
    pub const INVALID_NUMBER: &str = "INVALID_NUMBER";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
}

/// Why a piece of text could not be turned into a quantity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty input")]
    Empty,

    #[error("No numeric part in: {0}")]
    MissingNumber(String),

    #[error("No unit symbol in: {0}")]
    MissingUnit(String),

    #[error("Invalid number format: {0}")]
    InvalidNumber(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
}

impl ParseError {
    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::Empty => codes::EMPTY_INPUT,
            ParseError::MissingNumber(_) => codes::MISSING_NUMBER,
            ParseError::MissingUnit(_) => codes::MISSING_UNIT,
            ParseError::InvalidNumber(_) => codes::INVALID_NUMBER,
            ParseError::UnknownUnit(_) => codes::UNKNOWN_UNIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ParseError::Empty.code(), codes::EMPTY_INPUT);
        assert_eq!(ParseError::UnknownUnit("xyz".into()).code(), codes::UNKNOWN_UNIT);
        assert_eq!(ParseError::InvalidNumber("1..2".into()).code(), codes::INVALID_NUMBER);
    }

    #[test]
    fn test_error_display() {
        let err = ParseError::UnknownUnit("xyz".to_string());
        assert_eq!(format!("{}", err), "Unknown unit: xyz");

        let err = ParseError::MissingUnit("33.0".to_string());
        assert!(format!("{}", err).contains("33.0"));
    }
}
