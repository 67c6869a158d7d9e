use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::middleware::security_headers_middleware;
use crate::AppState;

pub fn router(state: AppState) -> Router {
    let v1 = Router::new()
        .route("/wallet", post(handlers::create_wallet))
        .route("/wallet/:wallet_id", get(handlers::get_wallet))
        .route("/wallet/:wallet_id/deposit", post(handlers::deposit_to_wallet))
        .route("/wallet/:wallet_id/withdraw", post(handlers::withdraw_from_wallet));

    Router::new()
        .route("/live", get(handlers::live))
        .nest("/v1", v1)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}
