use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::{new_wallet_id, StoreError, Storer};
use crate::models::Wallet;

/// Map-backed store keyed by wallet id. Iteration order of the map gives the id ordering
/// the port promises.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    wallets: RwLock<BTreeMap<String, Wallet>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store. Wallets without an id get a generated one.
    pub fn with_wallets(wallets: impl IntoIterator<Item = Wallet>) -> Self {
        let map = wallets
            .into_iter()
            .map(|mut wallet| {
                if wallet.id.is_empty() {
                    wallet.id = new_wallet_id();
                }
                (wallet.id.clone(), wallet)
            })
            .collect();
        Self {
            wallets: RwLock::new(map),
        }
    }

    async fn filter<F>(&self, predicate: F) -> Vec<Wallet>
    where
        F: Fn(&Wallet) -> bool,
    {
        self.wallets
            .read()
            .await
            .values()
            .filter(|&w| predicate(w))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl Storer for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Wallet>, StoreError> {
        Ok(self.filter(|_| true).await)
    }

    async fn list_by_type(&self, wallet_type: &str) -> Result<Vec<Wallet>, StoreError> {
        Ok(self.filter(|w| w.wallet_type == wallet_type).await)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Wallet>, StoreError> {
        Ok(self.filter(|w| w.user_id == user_id).await)
    }

    async fn create(&self, mut wallet: Wallet) -> Result<Wallet, StoreError> {
        if wallet.id.is_empty() {
            wallet.id = new_wallet_id();
        }

        let mut wallets = self.wallets.write().await;
        if wallets.contains_key(&wallet.id) {
            return Err(StoreError::AlreadyExists(wallet.id));
        }
        wallets.insert(wallet.id.clone(), wallet.clone());
        Ok(wallet)
    }

    async fn update_by_id(&self, wallet: Wallet) -> Result<Wallet, StoreError> {
        let mut wallets = self.wallets.write().await;
        match wallets.get_mut(&wallet.id) {
            Some(existing) => {
                *existing = wallet.clone();
                Ok(wallet)
            }
            None => Err(StoreError::NotFound(wallet.id)),
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<String, StoreError> {
        self.wallets
            .write()
            .await
            .remove(id)
            .map(|wallet| wallet.id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
