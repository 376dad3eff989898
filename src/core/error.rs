//! Error types for the core algorithms

use thiserror::Error;

/// Precondition failures raised by the pure core
///
/// Surfaced immediately to the caller; nothing in the core retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl CoreError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }
}

/// Error type for guesses typed at the prompt
///
/// These are recoverable: the shell re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("guess must be exactly {expected} hex digits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("'{0}' is not a hex digit (use 0-9, A-F)")]
    NotHex(char),
}
