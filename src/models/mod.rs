//! Wire types: the wallet record and the failure body.

pub mod wallet;

pub use wallet::{ErrorMessage, Wallet};
