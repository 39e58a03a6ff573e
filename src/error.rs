//! Error types for niuniu-rs operations.
//!
//! This module provides the error hierarchy using `thiserror`. Extraction
//! itself never fails (a message without dice yields `None`), so the errors
//! here describe contract violations: invalid dice values, sequences the
//! engine refuses to score, strategy construction problems and bad
//! configuration.

use thiserror::Error;

/// Result type alias for niuniu-rs operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A sequence handed to the engine is not exactly five values in 1..=6.
    #[error("invalid dice sequence (length {len}): {reason}")]
    InvalidSequence {
        /// Length of the rejected sequence.
        len: usize,
        /// Why the sequence was rejected.
        reason: String,
    },

    /// A single value could not become a die face.
    #[error("invalid dice value: {value} (expected 1..=6)")]
    InvalidDiceValue {
        /// The rejected value, as given.
        value: String,
    },

    /// Extraction strategy errors.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Errors raised while building extraction strategies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// Unknown extraction strategy.
    #[error("unknown extraction strategy: {name}")]
    UnknownStrategy {
        /// Name of the unknown strategy.
        name: String,
    },

    /// Regex compilation error.
    #[error("regex error: {0}")]
    Regex(String),

    /// The pipeline was configured without any strategy.
    #[error("extraction pipeline has no strategies")]
    EmptyPipeline,
}

impl Error {
    /// Builds an [`Error::InvalidSequence`] for a sequence of `len` values.
    pub(crate) fn invalid_sequence(len: usize, reason: impl Into<String>) -> Self {
        Self::InvalidSequence {
            len,
            reason: reason.into(),
        }
    }

    /// Builds an [`Error::InvalidDiceValue`] from anything printable.
    pub(crate) fn invalid_value(value: impl std::fmt::Display) -> Self {
        Self::InvalidDiceValue {
            value: value.to_string(),
        }
    }
}

impl From<regex::Error> for ExtractionError {
    fn from(err: regex::Error) -> Self {
        Self::Regex(err.to_string())
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Self::Extraction(err.into())
    }
}
