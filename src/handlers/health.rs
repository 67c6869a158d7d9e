use axum::http::StatusCode;

/// Liveness probe. Succeeds as long as the process can serve requests.
pub async fn live() -> StatusCode {
    StatusCode::OK
}
