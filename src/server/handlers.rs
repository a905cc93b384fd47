//! HTTP request handlers
//!
//! Implementation of the HTTP endpoints for the configuration service.
//! Storage errors are logged with their cause and translated to a generic
//! 500 payload; filesystem paths and internals never reach the client.

use crate::{
    server::app::AppState,
    types::{ErrorResponse, MessageResponse, PingResponse},
    utils::version,
};
use axum::{Json as RequestJson, extract::State, http::StatusCode, response::Json};
use serde_json::Value;

/// Fetch the stored configuration
///
/// GET /api/config
///
/// Returns the last-written configuration document, or `{}` if nothing has
/// ever been written.
pub async fn get_config(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.read() {
        Ok(config) => Ok(Json(config)),
        Err(e) => {
            tracing::error!("Error reading config: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to read config")),
            ))
        }
    }
}

/// Persist a new configuration
///
/// POST /api/config
///
/// Accepts any JSON body and replaces the stored document with it. No schema
/// is enforced; an empty object is a valid configuration.
pub async fn save_config(
    State(state): State<AppState>,
    RequestJson(config): RequestJson<Value>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    tracing::debug!("Received config save request");

    match state.store.write(&config) {
        Ok(()) => {
            tracing::info!("Config saved to {:?}", state.store.path());
            Ok(Json(MessageResponse::new("Config saved successfully")))
        }
        Err(e) => {
            tracing::error!("Error saving config: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to save config")),
            ))
        }
    }
}

/// Ping endpoint for health checks
///
/// GET /ping
///
/// Returns server status and uptime information.
pub async fn ping(State(state): State<AppState>) -> Json<PingResponse> {
    let uptime = state.start_time.elapsed().as_secs();
    let response = PingResponse::new(uptime, version::get_version());

    tracing::debug!(
        "Ping response: uptime={}s, version={}",
        uptime,
        version::get_version()
    );
    Json(response)
}
