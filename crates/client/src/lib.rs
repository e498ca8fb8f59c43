//! `paypack-client` — the API client the dashboard talks through.
//!
//! Wraps a [`Transport`] (the actual HTTP stack, injected by the host) and
//! owns the cross-cutting session behavior: every request carries the
//! bearer token from the shared session store, and any 401 response forces
//! a logout so the route guard bounces the user back to the login page on
//! their next navigation.

pub mod api;
pub mod error;
pub mod transport;

pub use api::ApiClient;
pub use error::ClientError;
pub use transport::{Method, Request, Response, Transport};
