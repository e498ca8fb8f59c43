//! Transactions service and repository contract.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use paypack_core::{DomainResult, Page, PropertyId, TransactionId};

use crate::transaction::Transaction;

/// Data-store contract for payments.
#[async_trait]
pub trait TransactionsRepository: Send + Sync {
    /// Persist a new payment; fails with `Conflict` on a duplicate id.
    async fn save(&self, tx: Transaction) -> DomainResult<()>;

    async fn retrieve_by_id(&self, id: TransactionId) -> DomainResult<Transaction>;

    async fn retrieve_all(&self, offset: u64, limit: u64) -> DomainResult<Page<Transaction>>;

    /// Payments filtered by the property they were made for.
    async fn retrieve_by_property(
        &self,
        property: PropertyId,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Page<Transaction>>;

    /// Payments filtered by channel ("cash", "mtn-momo", ...).
    async fn retrieve_by_method(
        &self,
        method: &str,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Page<Transaction>>;
}

/// The payments API.
pub struct TransactionsService {
    repo: Arc<dyn TransactionsRepository>,
}

impl TransactionsService {
    pub fn new(repo: Arc<dyn TransactionsRepository>) -> Self {
        Self { repo }
    }

    /// Record a new payment, stamping id and record time.
    pub async fn record(&self, mut tx: Transaction) -> DomainResult<Transaction> {
        tx.validate()?;
        tx.id = TransactionId::new();
        tx.date_recorded = Utc::now();
        self.repo.save(tx.clone()).await?;
        tracing::info!(id = %tx.id, amount = tx.amount, method = %tx.method, "payment recorded");
        Ok(tx)
    }

    pub async fn retrieve(&self, id: TransactionId) -> DomainResult<Transaction> {
        self.repo.retrieve_by_id(id).await
    }

    pub async fn list(&self, offset: u64, limit: u64) -> DomainResult<Page<Transaction>> {
        self.repo.retrieve_all(offset, limit).await
    }

    pub async fn list_by_property(
        &self,
        property: PropertyId,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Page<Transaction>> {
        self.repo.retrieve_by_property(property, offset, limit).await
    }

    pub async fn list_by_method(
        &self,
        method: &str,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Page<Transaction>> {
        self.repo.retrieve_by_method(method, offset, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paypack_core::{Address, DomainError, OwnerId, page};
    use std::sync::Mutex;

    struct InMemoryTransactions {
        items: Mutex<Vec<Transaction>>,
    }

    impl InMemoryTransactions {
        fn new() -> Self {
            Self {
                items: Mutex::new(Vec::new()),
            }
        }

        fn filtered(&self, pred: impl Fn(&Transaction) -> bool) -> Vec<Transaction> {
            self.items
                .lock()
                .unwrap()
                .iter()
                .filter(|t| pred(t))
                .cloned()
                .collect()
        }
    }

    #[async_trait]
    impl TransactionsRepository for InMemoryTransactions {
        async fn save(&self, tx: Transaction) -> DomainResult<()> {
            let mut items = self.items.lock().unwrap();
            if items.iter().any(|t| t.id == tx.id) {
                return Err(DomainError::Conflict);
            }
            items.push(tx);
            Ok(())
        }

        async fn retrieve_by_id(&self, id: TransactionId) -> DomainResult<Transaction> {
            self.items
                .lock()
                .unwrap()
                .iter()
                .find(|t| t.id == id)
                .cloned()
                .ok_or(DomainError::NotFound)
        }

        async fn retrieve_all(&self, offset: u64, limit: u64) -> DomainResult<Page<Transaction>> {
            Ok(page::paginate(
                &self.items.lock().unwrap().clone(),
                offset,
                limit,
            ))
        }

        async fn retrieve_by_property(
            &self,
            property: PropertyId,
            offset: u64,
            limit: u64,
        ) -> DomainResult<Page<Transaction>> {
            Ok(page::paginate(
                &self.filtered(|t| t.made_for == property),
                offset,
                limit,
            ))
        }

        async fn retrieve_by_method(
            &self,
            method: &str,
            offset: u64,
            limit: u64,
        ) -> DomainResult<Page<Transaction>> {
            Ok(page::paginate(
                &self.filtered(|t| t.method == method),
                offset,
                limit,
            ))
        }
    }

    fn transaction(property: PropertyId, method: &str) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            made_for: property,
            made_by: OwnerId::new(),
            address: Address::new("remera", "rukiri I", "amajyambere"),
            amount: 5_000.0,
            method: method.to_string(),
            invoice: 7,
            date_recorded: Utc::now(),
        }
    }

    fn service() -> TransactionsService {
        TransactionsService::new(Arc::new(InMemoryTransactions::new()))
    }

    #[tokio::test]
    async fn record_assigns_id_and_timestamp() {
        let svc = service();
        let input = transaction(PropertyId::new(), "cash");
        let input_id = input.id;

        let saved = svc.record(input).await.unwrap();
        assert_ne!(saved.id, input_id);
        assert_eq!(svc.retrieve(saved.id).await.unwrap(), saved);
    }

    #[tokio::test]
    async fn record_rejects_invalid_payment() {
        let svc = service();
        let mut tx = transaction(PropertyId::new(), "cash");
        tx.amount = 0.0;
        assert!(svc.record(tx).await.is_err());
    }

    #[tokio::test]
    async fn list_by_property_filters() {
        let svc = service();
        let house = PropertyId::new();
        svc.record(transaction(house, "cash")).await.unwrap();
        svc.record(transaction(house, "mtn-momo")).await.unwrap();
        svc.record(transaction(PropertyId::new(), "cash")).await.unwrap();

        let page = svc.list_by_property(house, 0, 10).await.unwrap();
        assert_eq!(page.metadata.total, 2);

        let all = svc.list(0, 10).await.unwrap();
        assert_eq!(all.metadata.total, 3);
    }

    #[tokio::test]
    async fn list_by_method_filters() {
        let svc = service();
        svc.record(transaction(PropertyId::new(), "cash")).await.unwrap();
        svc.record(transaction(PropertyId::new(), "mtn-momo")).await.unwrap();

        let momo = svc.list_by_method("mtn-momo", 0, 10).await.unwrap();
        assert_eq!(momo.metadata.total, 1);
    }
}
