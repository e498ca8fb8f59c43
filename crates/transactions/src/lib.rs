//! `paypack-transactions` — rent payments made against properties.

pub mod service;
pub mod transaction;

pub use service::{TransactionsRepository, TransactionsService};
pub use transaction::Transaction;
