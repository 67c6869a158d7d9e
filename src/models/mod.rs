//! Domain types: money, identifiers, the wallet entity.

pub mod ids;
pub mod money;
pub mod wallet;

pub use ids::{OwnerId, WalletId};
pub use money::{Money, MoneyError};
pub use wallet::Wallet;
