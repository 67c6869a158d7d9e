//! Identifier types. Wallet ids are UUIDs; owners are opaque strings taken from the
//! trusted `X-Auth-UserId` header.

use uuid::Uuid;

use crate::error::WalletError;

pub type WalletId = Uuid;
pub type OwnerId = String;

/// Parse a path segment into a wallet id. Use at API boundaries.
pub fn parse_wallet_id(id: &str) -> Result<WalletId, WalletError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(WalletError::Validation("missing wallet id".to_string()));
    }
    Uuid::parse_str(id).map_err(|e| WalletError::Validation(format!("invalid wallet id: {}", e)))
}
