pub mod health;
pub mod wallets;

pub use health::health_check;
pub use wallets::{
    create_wallet, delete_wallet, list_user_wallets, list_wallets, list_wallets_by_type,
    update_wallet, WalletTypeQuery,
};
