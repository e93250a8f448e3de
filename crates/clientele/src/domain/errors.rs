//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Cannot find client with id: {id}")]
    NotFound { id: i64 },

    #[error("Client name already taken: {0}")]
    DuplicateName(String),

    #[error("Validation error on {field}: {reason}")]
    ValidationFailed { field: String, reason: String },

    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }

    pub fn validation<F: AsRef<str>, R: AsRef<str>>(field: F, reason: R) -> Self {
        Self::ValidationFailed {
            field: field.as_ref().to_string(),
            reason: reason.as_ref().to_string(),
        }
    }
}
