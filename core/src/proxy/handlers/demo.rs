//! Demo handlers
//! Handles /hello, /echo, /async

use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    http::{header, HeaderMap, StatusCode},
    response::Json,
};
use serde_json::{json, Value};
use tokio::time::{sleep, Duration};

use crate::error::ProxyError;

pub const HELLO_MESSAGE: &str = "Hello from Express on Lambda!";
pub const ASYNC_MESSAGE: &str = "Async operation completed";
pub const ASYNC_DELAY: Duration = Duration::from_millis(1000);

/// Handle GET /hello
pub async fn handle_hello() -> Json<Value> {
    Json(json!({ "message": HELLO_MESSAGE }))
}

/// Handle POST /echo
///
/// Like express.json(): a non-JSON content type or an empty body echoes `{}`,
/// only a JSON body that fails to parse is rejected.
pub async fn handle_echo(
    headers: HeaderMap,
    payload: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, ProxyError> {
    let bytes = payload.map_err(|e| ProxyError::InvalidBody {
        status: e.status().as_u16(),
        message: e.body_text(),
    })?;
    let body = parse_json_body(&headers, &bytes)?;
    Ok(Json(json!({ "youSent": body })))
}

fn parse_json_body(headers: &HeaderMap, bytes: &[u8]) -> Result<Value, ProxyError> {
    if !is_json_content_type(headers) || bytes.is_empty() {
        return Ok(json!({}));
    }

    serde_json::from_slice(bytes).map_err(|e| ProxyError::InvalidBody {
        status: StatusCode::BAD_REQUEST.as_u16(),
        message: e.to_string(),
    })
}

/// `application/json` or any `application/*+json`, parameters ignored
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    match essence.strip_prefix("application/") {
        Some(subtype) => subtype == "json" || subtype.ends_with("+json"),
        None => false,
    }
}

/// Handle GET /async
///
/// Sleeps on the timer wheel, so other requests keep being served.
pub async fn handle_async() -> Json<Value> {
    sleep(ASYNC_DELAY).await;
    Json(json!({ "message": ASYNC_MESSAGE }))
}
