use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};

use crate::error::WalletError;
use crate::models::OwnerId;

/// Header carrying the caller's user id. Trusted as-is: whatever sits in front of
/// this service is expected to have authenticated the caller already.
pub const AUTH_USER_HEADER: &str = "X-Auth-UserId";

#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: OwnerId,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = WalletError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(AUTH_USER_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                WalletError::Validation(format!("missing {} header", AUTH_USER_HEADER))
            })?;

        Ok(AuthUser {
            user_id: user_id.to_string(),
        })
    }
}
