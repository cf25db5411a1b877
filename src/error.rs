//! Error types for name generation.

use thiserror::Error;

/// Which of the two word lists an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordKind {
    Adjective,
    Noun,
}

impl std::fmt::Display for WordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WordKind::Adjective => write!(f, "adjective"),
            WordKind::Noun => write!(f, "noun"),
        }
    }
}

/// Errors produced while resolving configuration or generating names.
#[derive(Debug, Error)]
pub enum NameError {
    /// The merged configuration cannot produce a token.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A word list resolved to zero entries.
    #[error("{0} list is empty")]
    EmptyWordList(WordKind),

    /// A bulk request asked for more names than can exist.
    #[error("requested {requested} unique names but only {capacity} combinations exist")]
    CapacityExceeded { requested: usize, capacity: u128 },

    /// A bulk request kept colliding until its attempt budget ran out.
    #[error("produced {produced} of {requested} unique names after {attempts} attempts")]
    RetriesExhausted {
        requested: usize,
        produced: usize,
        attempts: usize,
    },

    /// No acceptable randomness source could be reached.
    #[error("randomness unavailable: {0}")]
    RandomnessUnavailable(String),

    /// The canonical seed material could not be serialized.
    #[error("failed to encode seed material")]
    Encoding(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NameError>;
