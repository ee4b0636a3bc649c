//! Persistence of the transaction collection
//!
//! The whole collection lives in one JSON file. Every load reads the full
//! file and every save rewrites it.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::models::Transaction;

/// Store reference type
pub type StoreRef = Arc<dyn TransactionStore>;

/// Trait for transaction stores
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Load every stored transaction, in stored order
    async fn load(&self) -> CoreResult<Vec<Transaction>>;

    /// Replace the stored collection
    async fn save(&self, transactions: &[Transaction]) -> CoreResult<()>;
}

/// Store backed by a pretty-printed JSON array on disk
///
/// Writes go straight to the target file: no temp file, no rename, no
/// file lock. Callers in this process are serialised by `Ledger`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

#[async_trait]
impl TransactionStore for JsonFileStore {
    async fn load(&self) -> CoreResult<Vec<Transaction>> {
        let content = match tokio::fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("{} does not exist yet, starting empty", self.display_path());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(CoreError::Io {
                    path: self.display_path(),
                    source: e,
                })
            }
        };

        let transactions: Vec<Transaction> =
            serde_json::from_slice(&content).map_err(|e| CoreError::CorruptStore {
                path: self.display_path(),
                message: e.to_string(),
            })?;

        log::debug!("Loaded {} transactions from {}", transactions.len(), self.display_path());
        Ok(transactions)
    }

    async fn save(&self, transactions: &[Transaction]) -> CoreResult<()> {
        let content = serde_json::to_vec_pretty(transactions)
            .map_err(|e| CoreError::Encode { message: e.to_string() })?;

        tokio::fs::write(&self.path, content)
            .await
            .map_err(|e| CoreError::Io {
                path: self.display_path(),
                source: e,
            })?;

        log::debug!("Saved {} transactions to {}", transactions.len(), self.display_path());
        Ok(())
    }
}
