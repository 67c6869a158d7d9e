// Library root - exports for the binary and integration tests

pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;

pub use config::Config;
pub use error::WalletError;
pub use routes::router;

use database::SharedStore;

/// Shared request state. The store is created once by the entry point and
/// handed to every handler through axum's `State`.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}
