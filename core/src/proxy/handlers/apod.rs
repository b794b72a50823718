//! Astronomy Picture of the Day passthrough
//! Handles /apod

use axum::{extract::State, response::Json};
use serde_json::Value;

use crate::error::ProxyError;
use crate::proxy::server::AppState;

/// Handle GET /apod
pub async fn handle_apod(State(state): State<AppState>) -> Result<Json<Value>, ProxyError> {
    let body = state.apod.fetch().await?;
    tracing::info!("APOD fetched: {}", body.get("title").and_then(|v| v.as_str()).unwrap_or("<untitled>"));
    Ok(Json(body))
}
