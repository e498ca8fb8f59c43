//! Why a navigation was not allowed.

use paypack_auth::Role;
use thiserror::Error;

/// Failure taxonomy of the guard. None of these is fatal: each maps to a
/// deterministic redirect, and nothing is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The session token is missing or does not decode. Treated as
    /// unauthenticated.
    #[error("session token missing or malformed")]
    DecodeFailure,

    /// Authenticated, but the role does not satisfy the route's flags.
    #[error("role '{role}' may not enter '{path}'")]
    PermissionDenied { role: Role, path: String },

    /// The target matched no permission flags at all.
    #[error("no route flags matched '{0}'")]
    UnknownRoute(String),
}
