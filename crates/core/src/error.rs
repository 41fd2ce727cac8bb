//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Message carried by [`DomainError::InvalidId`] when an identifier is not a UUID.
pub const INVALID_UUID_MESSAGE: &str = "ID must be a valid UUID";

/// Domain-level error.
///
/// Every variant carries a single human-readable message; `Display` renders it
/// verbatim so callers can surface it without reformatting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field failed one of the validation rules.
    #[error("{0}")]
    Validation(String),

    /// An identifier was not a well-formed UUID.
    #[error("{0}")]
    InvalidId(String),

    /// A domain invariant was violated (e.g. props that cannot be flattened).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// The raw message, without any variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::InvalidId(msg) | Self::InvariantViolation(msg) => msg,
        }
    }
}
