//! `paypack-auth` — session tokens, roles and the route-permission policy.
//!
//! This crate is intentionally decoupled from HTTP and storage: it decodes
//! token claims without verifying them (expiry enforcement is the server's
//! job, surfaced as 401 responses), maps roles to the route flags they
//! satisfy, and holds the per-tab session state.

pub mod claims;
pub mod policy;
pub mod role;
pub mod session;

pub use claims::{Claims, decode};
pub use policy::{RouteMeta, default_route, permits};
pub use role::{Role, UnknownRole};
pub use session::{InMemorySessionStorage, SessionStorage, SessionStore, TOKEN_KEY};
