//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Deterministic business failures only (validation, conflicts, lookups).
/// Transport failures live in `paypack-client`; navigation failures live in
/// `paypack-routing`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An entity failed validation (e.g. malformed or missing field).
    #[error("invalid entity: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested entity does not exist.
    #[error("non-existent entity")]
    NotFound,

    /// Attempt to create an entity with an already existing id.
    #[error("entity already exists")]
    Conflict,

    /// Missing or invalid credentials for a protected operation.
    #[error("missing or invalid credentials provided")]
    Unauthorized,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
