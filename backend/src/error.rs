//! Error types for the generator and its sampling helpers
//!
//! Construction and raw draws never fail. Errors only come from caller
//! input: bad bounds, empty sequences, or a malformed state being restored.

use thiserror::Error;

/// Errors returned by sampling, sequence and state-transfer operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RandomError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cannot choose from an empty sequence")]
    EmptySequence,

    #[error("Sample of {requested} requested from a population of {population}")]
    SampleTooLarge { requested: usize, population: usize },

    #[error("Invalid generator state: {0}")]
    InvalidState(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RandomError {
    fn from(err: serde_json::Error) -> Self {
        RandomError::Serialization(err.to_string())
    }
}
