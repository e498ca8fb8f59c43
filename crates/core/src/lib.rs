//! `paypack-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no transport or storage
//! concerns): typed identifiers, the domain error model, pagination, and the
//! administrative-location value objects shared by every other crate.

pub mod error;
pub mod id;
pub mod location;
pub mod page;

pub use error::{DomainError, DomainResult};
pub use id::{AccountId, OwnerId, PropertyId, TransactionId, UserId};
pub use location::{AccountPath, Address};
pub use page::{Page, PageMetadata};
