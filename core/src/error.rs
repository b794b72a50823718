//! Error type shared by handlers and upstream clients

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// `status` is the one the body rejection carries (400, 413, ...)
    #[error("Invalid JSON body: {message}")]
    InvalidBody { status: u16, message: String },

    #[error("Invalid query parameters: {0}")]
    InvalidQuery(String),

    #[error("Upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Invalid upstream response: {0}")]
    InvalidUpstreamBody(String),

    #[error("Translation rejected ({status}): {message}")]
    TranslationRejected { status: u16, message: String },

    #[error("Translation failed: {0}")]
    Translation(String),
}

impl ProxyError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidBody { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_REQUEST)
            }
            Self::InvalidQuery(_) | Self::TranslationRejected { .. } => StatusCode::BAD_REQUEST,
            Self::Request(_)
            | Self::UpstreamStatus { .. }
            | Self::InvalidUpstreamBody(_)
            | Self::Translation(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        let syntax = ProxyError::InvalidBody { status: 400, message: "eof".into() };
        assert_eq!(syntax.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ProxyError::InvalidQuery("text".into()).status_code(), StatusCode::BAD_REQUEST);
        let rejected = ProxyError::TranslationRejected { status: 400, message: "bad code".into() };
        assert_eq!(rejected.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_body_rejection_keeps_its_status() {
        let too_large = ProxyError::InvalidBody { status: 413, message: "length limit exceeded".into() };
        assert_eq!(too_large.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_upstream_errors_map_to_502() {
        let err = ProxyError::UpstreamStatus { status: 503, body: String::new() };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(ProxyError::Translation("boom".into()).status_code(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_error_body_is_json() {
        let response = ProxyError::InvalidUpstreamBody("not json".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Invalid upstream response: not json");
    }
}
