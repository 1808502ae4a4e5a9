//! Error types for auth domain validation.

use thiserror::Error;

/// Errors returned while constructing auth domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthDomainError {
    /// The email address is malformed.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}
