//! `paypack-properties` — the property (house) register.

pub mod property;
pub mod service;

pub use property::{Owner, Property};
pub use service::{PropertiesRepository, PropertiesService};
