//! Move rejection errors
//!
//! Both kinds are soft failures: they are returned to the proposing agent as
//! feedback, never propagated as panics, and neither one mutates the session.

use thiserror::Error;

/// Why a proposed move was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The string does not parse as a UCI coordinate move
    #[error("Invalid move syntax: {input}")]
    InvalidSyntax { input: String },

    /// The string parses but names no move in the current legal set
    #[error("Illegal move: {input}")]
    IllegalMove { input: String },
}

impl MoveError {
    pub fn invalid_syntax(input: impl Into<String>) -> Self {
        MoveError::InvalidSyntax {
            input: input.into(),
        }
    }

    pub fn illegal(input: impl Into<String>) -> Self {
        MoveError::IllegalMove {
            input: input.into(),
        }
    }
}
