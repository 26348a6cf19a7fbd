use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use super::{new_wallet_id, StoreError, Storer};
use crate::database::DatabasePool;
use crate::models::Wallet;

/// Postgres adapter. Expects the `wallets` table from `sql/wallets.sql`.
#[derive(Clone)]
pub struct PgStore {
    pool: DatabasePool,
}

#[derive(FromRow)]
struct WalletRow {
    id: String,
    user_id: String,
    wallet_type: String,
    balance: Decimal,
}

impl From<WalletRow> for Wallet {
    fn from(row: WalletRow) -> Self {
        Wallet {
            id: row.id,
            user_id: row.user_id,
            wallet_type: row.wallet_type,
            balance: row.balance,
        }
    }
}

impl PgStore {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Storer for PgStore {
    async fn list_all(&self) -> Result<Vec<Wallet>, StoreError> {
        let rows = sqlx::query_as::<_, WalletRow>(
            r#"
            SELECT id, user_id, wallet_type, balance
            FROM wallets
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool())
        .await?;

        Ok(rows.into_iter().map(Wallet::from).collect())
    }

    async fn list_by_type(&self, wallet_type: &str) -> Result<Vec<Wallet>, StoreError> {
        let rows = sqlx::query_as::<_, WalletRow>(
            r#"
            SELECT id, user_id, wallet_type, balance
            FROM wallets
            WHERE wallet_type = $1
            ORDER BY id
            "#,
        )
        .bind(wallet_type)
        .fetch_all(self.pool())
        .await?;

        Ok(rows.into_iter().map(Wallet::from).collect())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Wallet>, StoreError> {
        let rows = sqlx::query_as::<_, WalletRow>(
            r#"
            SELECT id, user_id, wallet_type, balance
            FROM wallets
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;

        Ok(rows.into_iter().map(Wallet::from).collect())
    }

    async fn create(&self, wallet: Wallet) -> Result<Wallet, StoreError> {
        let id = if wallet.id.is_empty() {
            new_wallet_id()
        } else {
            wallet.id
        };

        // ON CONFLICT DO NOTHING yields no row for a taken id.
        let row = sqlx::query_as::<_, WalletRow>(
            r#"
            INSERT INTO wallets (id, user_id, wallet_type, balance)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            RETURNING id, user_id, wallet_type, balance
            "#,
        )
        .bind(&id)
        .bind(&wallet.user_id)
        .bind(&wallet.wallet_type)
        .bind(wallet.balance)
        .fetch_optional(self.pool())
        .await?;

        row.map(Wallet::from).ok_or(StoreError::AlreadyExists(id))
    }

    async fn update_by_id(&self, wallet: Wallet) -> Result<Wallet, StoreError> {
        let row = sqlx::query_as::<_, WalletRow>(
            r#"
            UPDATE wallets
            SET user_id = $2, wallet_type = $3, balance = $4
            WHERE id = $1
            RETURNING id, user_id, wallet_type, balance
            "#,
        )
        .bind(&wallet.id)
        .bind(&wallet.user_id)
        .bind(&wallet.wallet_type)
        .bind(wallet.balance)
        .fetch_optional(self.pool())
        .await?;

        row.map(Wallet::from).ok_or(StoreError::NotFound(wallet.id))
    }

    async fn delete_by_id(&self, id: &str) -> Result<String, StoreError> {
        sqlx::query_scalar::<_, String>("DELETE FROM wallets WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(self.pool())
            .await?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
