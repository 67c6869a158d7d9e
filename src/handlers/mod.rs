pub mod health;
pub mod wallets;

pub use health::live;
pub use wallets::{
    create_wallet,
    get_wallet,
    deposit_to_wallet,
    withdraw_from_wallet,
    CreateWalletRequest,
    DepositRequest,
    WithdrawRequest,
};
