use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

use crate::error::WalletError;
use crate::middleware::auth::AuthUser;
use crate::models::{ids::parse_wallet_id, Money, Wallet, WalletId};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateWalletRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    #[serde(rename = "depositValue")]
    pub deposit_value: f64,
}

#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    #[serde(rename = "withDrawValue")]
    pub withdraw_value: f64,
}

/// Create a wallet owned by the calling user.
pub async fn create_wallet(
    State(state): State<AppState>,
    auth_user: AuthUser,
    payload: Result<Json<CreateWalletRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Wallet>), WalletError> {
    let Json(payload) = payload?;

    let name = payload.name.trim();
    if name.is_empty() {
        return Err(WalletError::Validation("missing required field name".to_string()));
    }

    let wallet = state
        .store
        .save(Wallet::create(auth_user.user_id, name))
        .await?;

    tracing::info!(wallet_id = %wallet.id(), owner = %wallet.owner(), "Wallet created");

    Ok((StatusCode::CREATED, Json(wallet)))
}

/// Get a wallet the caller owns.
pub async fn get_wallet(
    State(state): State<AppState>,
    auth_user: AuthUser,
    wallet_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Wallet>, WalletError> {
    let wallet_id = wallet_id_from_path(wallet_id)?;

    let wallet = state.store.get(wallet_id, &auth_user.user_id).await?;

    Ok(Json(wallet))
}

pub async fn deposit_to_wallet(
    State(state): State<AppState>,
    auth_user: AuthUser,
    wallet_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<DepositRequest>, JsonRejection>,
) -> Result<Json<Wallet>, WalletError> {
    let wallet_id = wallet_id_from_path(wallet_id)?;
    let Json(payload) = payload?;
    let amount = positive_amount(payload.deposit_value, "depositValue")?;

    let wallet = state
        .store
        .update(wallet_id, &auth_user.user_id, |w| w.deposit(amount).map(|_| ()))
        .await?;

    tracing::info!(
        wallet_id = %wallet_id,
        amount = %amount,
        balance = %wallet.balance(),
        "Deposit applied"
    );

    Ok(Json(wallet))
}

pub async fn withdraw_from_wallet(
    State(state): State<AppState>,
    auth_user: AuthUser,
    wallet_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<WithdrawRequest>, JsonRejection>,
) -> Result<Json<Wallet>, WalletError> {
    let wallet_id = wallet_id_from_path(wallet_id)?;
    let Json(payload) = payload?;
    let amount = positive_amount(payload.withdraw_value, "withDrawValue")?;

    let wallet = state
        .store
        .update(wallet_id, &auth_user.user_id, |w| w.withdraw(amount).map(|_| ()))
        .await?;

    tracing::info!(
        wallet_id = %wallet_id,
        amount = %amount,
        balance = %wallet.balance(),
        "Withdrawal applied"
    );

    Ok(Json(wallet))
}

fn wallet_id_from_path(path: Result<Path<String>, PathRejection>) -> Result<WalletId, WalletError> {
    let Path(raw) = path.map_err(|e| {
        WalletError::Validation(format!("invalid wallet id: {}", e.body_text()))
    })?;
    parse_wallet_id(&raw)
}

/// Amounts arrive as decimal major units; anything non-positive or finer than
/// a cent is rejected before the store is touched.
fn positive_amount(value: f64, field: &str) -> Result<Money, WalletError> {
    let amount = Money::from_major_units(value)?;
    if !amount.is_positive() {
        return Err(WalletError::Validation(format!(
            "{} must be greater than zero",
            field
        )));
    }
    Ok(amount)
}
