//! Payment entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use paypack_core::{Address, DomainError, DomainResult, OwnerId, PropertyId, TransactionId};

/// A payment made for a property (house).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    /// The property the payment settles.
    pub made_for: PropertyId,
    /// Who paid.
    pub made_by: OwnerId,
    pub address: Address,
    /// Amount paid, in Rwandan francs.
    pub amount: f64,
    /// Payment channel, e.g. "cash" or "mtn-momo".
    pub method: String,
    /// Invoice number this payment settles.
    pub invoice: u64,
    pub date_recorded: DateTime<Utc>,
}

impl Transaction {
    /// Ensure all fields of a payment are of the valid format.
    pub fn validate(&self) -> DomainResult<()> {
        if self.amount == 0.0 {
            return Err(DomainError::validation("invalid transaction: no amount"));
        }
        if self.method.is_empty() {
            return Err(DomainError::validation("invalid transaction: no method"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction() -> Transaction {
        Transaction {
            id: TransactionId::new(),
            made_for: PropertyId::new(),
            made_by: OwnerId::new(),
            address: Address::new("remera", "rukiri I", "amajyambere"),
            amount: 5_000.0,
            method: "mtn-momo".to_string(),
            invoice: 1042,
            date_recorded: Utc::now(),
        }
    }

    #[test]
    fn valid_transaction_passes() {
        assert!(transaction().validate().is_ok());
    }

    #[test]
    fn zero_amount_is_rejected() {
        let mut tx = transaction();
        tx.amount = 0.0;
        assert!(tx.validate().is_err());
    }

    #[test]
    fn missing_method_is_rejected() {
        let mut tx = transaction();
        tx.method.clear();
        assert!(tx.validate().is_err());
    }
}
