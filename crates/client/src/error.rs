//! Client-side error taxonomy.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered 401: the session is no longer valid there.
    /// Recovered by forced logout; nothing is retried.
    #[error("session expired remotely")]
    SessionExpired,

    /// Any other non-success status.
    #[error("request failed with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The transport could not complete the exchange at all.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not the shape we expected.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The request was invalid before it left the client.
    #[error(transparent)]
    Domain(#[from] paypack_core::DomainError),
}
