// Library root - router and state shared by the binary and the tests

pub mod config;
pub mod database;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod models;
pub mod store;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::Config;
pub use error::ApiError;
pub use models::{ErrorMessage, Wallet};
pub use store::{InMemoryStore, PgStore, SharedStore, StoreError, Storer};

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

impl AppState {
    pub fn new(store: impl Storer + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Wallet routes, relative to the `/api/v1` prefix.
fn wallet_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/wallets",
            get(handlers::list_wallets)
                .post(handlers::create_wallet)
                .put(handlers::update_wallet),
        )
        .route("/wallets/query", get(handlers::list_wallets_by_type))
        .route(
            "/users/:id/wallets",
            get(handlers::list_user_wallets).delete(handlers::delete_wallet),
        )
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .nest("/api/v1", wallet_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
