//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid vote direction: {0} (expected 'up' or 'down')")]
    InvalidVoteDirection(String),

    #[error("Invalid output format: {0}")]
    InvalidOutputFormat(String),

    #[error("Invalid view: {0}")]
    InvalidView(String),

    #[error("Pet id must not be empty")]
    EmptyPetId,
}
