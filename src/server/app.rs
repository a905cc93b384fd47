//! Axum application setup
//!
//! Creates and configures the Axum application with routes and middleware.

use crate::{config::Settings, store::ConfigStore};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Store owning the persisted college configuration
    pub store: Arc<ConfigStore>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

/// Create the main Axum application with routes and middleware
pub fn create_app(settings: Settings) -> Router {
    let store = Arc::new(ConfigStore::new(&settings.storage.path));

    let state = AppState {
        store,
        start_time: std::time::Instant::now(),
    };

    Router::new()
        .route("/api/config", get(super::handlers::get_config))
        .route("/api/config", post(super::handlers::save_config))
        .route("/ping", get(super::handlers::ping))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
