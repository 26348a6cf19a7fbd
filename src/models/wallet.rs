use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user's named balance of a given type.
///
/// `id` may be left out of a create request; the store assigns one. `wallet_type` is an
/// open string domain ("Savings", "Credit Card", "Crypto Wallet", ...). `balance` travels
/// as a JSON number carrying every digit of the decimal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Wallet {
    #[serde(default)]
    #[schema(example = "0b7c3c5e-8a9f-4d5e-b3f1-6a3c2f0d9e11")]
    pub id: String,
    #[schema(example = "u1")]
    pub user_id: String,
    #[schema(example = "Savings")]
    pub wallet_type: String,
    #[schema(value_type = f64, example = 100.5)]
    pub balance: Decimal,
}

impl Wallet {
    pub fn new(
        user_id: impl Into<String>,
        wallet_type: impl Into<String>,
        balance: Decimal,
    ) -> Self {
        Self {
            id: String::new(),
            user_id: user_id.into(),
            wallet_type: wallet_type.into(),
            balance,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
