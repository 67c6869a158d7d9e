use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{Money, MoneyError, WalletId};

#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// Missing, empty or non-positive input.
    #[error("{0}")]
    Validation(String),

    /// No wallet matches the id and owner pair.
    #[error("wallet {0} not found")]
    NotFound(WalletId),

    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Money, requested: Money },

    #[error("storage failure: {0}")]
    Storage(String),
}

impl WalletError {
    pub fn status(&self) -> StatusCode {
        match self {
            WalletError::Validation(_) => StatusCode::BAD_REQUEST,
            WalletError::NotFound(_) => StatusCode::NOT_FOUND,
            WalletError::InsufficientFunds { .. } => StatusCode::BAD_REQUEST,
            WalletError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code returned in every error body.
    pub fn code(&self) -> &'static str {
        match self {
            WalletError::Validation(_) => "VALIDATION_FAILED",
            WalletError::NotFound(_) => "WALLET_NOT_FOUND",
            WalletError::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            WalletError::Storage(_) => "STORAGE_FAILURE",
        }
    }
}

impl From<MoneyError> for WalletError {
    fn from(e: MoneyError) -> Self {
        WalletError::Validation(format!("invalid amount: {}", e))
    }
}

impl From<JsonRejection> for WalletError {
    fn from(rejection: JsonRejection) -> Self {
        WalletError::Validation(format!("malformed request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for WalletError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = self.code(), "Request failed: {}", self);
        } else {
            tracing::warn!(code = self.code(), "Request rejected: {}", self);
        }

        // Internal details stay in the log.
        let message = match &self {
            WalletError::Storage(_) => "Internal storage error".to_string(),
            other => other.to_string(),
        };
        let body = serde_json::json!({
            "code": self.code(),
            "message": message,
        });
        (status, Json(body)).into_response()
    }
}
