//! Storage port for wallets.
//!
//! `Storer` is the only way request handlers touch persisted wallets. Each call is atomic
//! on its own; there is no grouping across calls. Two adapters ship with the crate:
//! [`InMemoryStore`] and [`PgStore`].

use async_trait::async_trait;
use std::sync::Arc;

use crate::models::Wallet;

pub mod memory;
pub mod postgres;

pub use memory::InMemoryStore;
pub use postgres::PgStore;

pub type SharedStore = Arc<dyn Storer>;

/// Failure of a single store operation. Callers only see the message; the variant is
/// kept for logging and for adapters' own tests.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("wallet with id '{0}' not found")]
    NotFound(String),
    #[error("wallet with id '{0}' already exists")]
    AlreadyExists(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait Storer: Send + Sync {
    /// Every wallet, ordered by id.
    async fn list_all(&self) -> Result<Vec<Wallet>, StoreError>;

    /// Wallets whose `wallet_type` equals `wallet_type` exactly. An empty filter only
    /// matches wallets with an empty type.
    async fn list_by_type(&self, wallet_type: &str) -> Result<Vec<Wallet>, StoreError>;

    /// Wallets owned by `user_id`; empty when the user owns none.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Wallet>, StoreError>;

    /// Persist a new wallet. An empty `id` is replaced with a generated one.
    async fn create(&self, wallet: Wallet) -> Result<Wallet, StoreError>;

    /// Replace every field of the wallet identified by `wallet.id`.
    async fn update_by_id(&self, wallet: Wallet) -> Result<Wallet, StoreError>;

    /// Remove the wallet and return its id.
    async fn delete_by_id(&self, id: &str) -> Result<String, StoreError>;
}

pub(crate) fn new_wallet_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
