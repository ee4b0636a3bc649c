//! Core transaction processing and business logic
//!
//! - models: the `Transaction` record
//! - time: ISO-8601 timestamp parsing
//! - validation: checks applied to submitted transactions
//! - store: JSON file persistence
//! - query: sorting, per-person filtering and balances
//!
//! `Ledger` ties these together for the API layer.

pub mod error;
pub mod models;
pub mod query;
pub mod store;
pub mod time;
pub mod validation;

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

pub use error::{CoreError, CoreResult, ErrorCode, ErrorSeverity, ValidationError};
pub use models::Transaction;
pub use store::{JsonFileStore, StoreRef, TransactionStore};
pub use time::parse_timestamp;
pub use validation::validate_transaction;

/// Entry point for every read and write of the transaction collection
///
/// Each call reloads the collection from the store; nothing is cached.
/// Writers hold the lock across the whole load-append-sort-save cycle, so
/// concurrent submissions in this process never overwrite one another.
pub struct Ledger {
    store: StoreRef,
    lock: RwLock<()>,
}

impl Ledger {
    /// Create a ledger over any store
    pub fn new(store: StoreRef) -> Self {
        Self {
            store,
            lock: RwLock::new(()),
        }
    }

    /// Create a ledger over a JSON file
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(JsonFileStore::new(path)))
    }

    /// Append a validated transaction and persist the re-sorted collection
    pub async fn record(&self, transaction: Transaction) -> CoreResult<Transaction> {
        let _guard = self.lock.write().await;

        let mut transactions = self.store.load().await?;
        transactions.push(transaction.clone());
        let transactions = query::sort_transactions(transactions)?;
        self.store.save(&transactions).await?;

        log::info!(
            "Recorded {} -> {}: {} at {} ({} total)",
            transaction.p1,
            transaction.p2,
            transaction.a,
            transaction.t,
            transactions.len()
        );
        Ok(transaction)
    }

    /// Every transaction, oldest first
    pub async fn transactions(&self) -> CoreResult<Vec<Transaction>> {
        let _guard = self.lock.read().await;
        query::sort_transactions(self.store.load().await?)
    }

    /// Transactions sent or received by `person`, oldest first
    pub async fn transactions_for(&self, person: &str) -> CoreResult<Vec<Transaction>> {
        let _guard = self.lock.read().await;
        let transactions = self.store.load().await?;
        query::sort_transactions(query::filter_by_person(&transactions, person))
    }

    /// Net amount received by `person`
    pub async fn balance(&self, person: &str) -> CoreResult<f64> {
        let _guard = self.lock.read().await;
        let transactions = self.store.load().await?;
        Ok(query::balance(&transactions, person))
    }
}

// ==================== Tests ====================
