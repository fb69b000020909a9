//! This module defines all error types used throughout the application.

use std::io;
use thiserror::Error;

use crate::state_machine::StateId;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (closed pipe, unreadable terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A token that does not parse as an integer
    #[error("Invalid number {token:?}: expected {expected}")]
    InvalidNumber { token: String, expected: String },

    /// A negative count of states or transitions
    #[error("Invalid {what}: {value} is negative")]
    NegativeCount { what: String, value: i64 },

    /// Input ended before the machine definition was complete
    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: String },

    /// State identifier outside `[0, n_states)` in strict mode
    #[error("State {state} is out of range: machine has {n_states} state(s)")]
    StateOutOfRange { state: StateId, n_states: usize },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a custom error with a message
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    /// Create an invalid number error
    pub fn invalid_number(token: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidNumber {
            token: token.into(),
            expected: expected.into(),
        }
    }

    /// Create an unexpected end-of-input error
    pub fn unexpected_eof(expected: impl Into<String>) -> Self {
        Self::UnexpectedEof {
            expected: expected.into(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

// Helper macros for creating errors

/// Create a custom error with formatting
#[macro_export]
macro_rules! custom_error {
    ($($arg:tt)*) => {
        $crate::error::Error::Custom(format!($($arg)*))
    };
}

/// Bail with a custom error message
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::custom_error!($($arg)*))
    };
}

/// Ensure a condition is true or return error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::custom("test error");
        assert_eq!(err.to_string(), "test error");

        let err = Error::invalid_number("abc", "number of states");
        assert_eq!(
            err.to_string(),
            "Invalid number \"abc\": expected number of states"
        );

        let err = Error::StateOutOfRange {
            state: 7,
            n_states: 3,
        };
        assert_eq!(
            err.to_string(),
            "State 7 is out of range: machine has 3 state(s)"
        );
    }

    #[test]
    fn test_unexpected_eof() {
        let err = Error::unexpected_eof("starting state");
        assert!(matches!(err, Error::UnexpectedEof { .. }));
        assert_eq!(
            err.to_string(),
            "Unexpected end of input: expected starting state"
        );
    }

    #[test]
    fn test_toml_error_converts_to_config() {
        let err: Error = toml::from_str::<toml::Value>("level = ").unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_ensure_and_bail() {
        fn positive(value: i64) -> Result<i64> {
            ensure!(value > 0, "value {} is not positive", value);
            Ok(value)
        }

        assert_eq!(positive(2).unwrap(), 2);
        let err = positive(0).unwrap_err();
        assert!(matches!(err, Error::Custom(_)));
        assert_eq!(err.to_string(), "value 0 is not positive");
    }
}
