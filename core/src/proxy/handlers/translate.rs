//! Translation proxy
//! Handles /translate?text=&sourcelanguage=&targetlanguage=

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ProxyError;
use crate::proxy::server::AppState;
use crate::proxy::upstream::TranslateRequest;

#[derive(Debug, Deserialize)]
pub struct TranslateParams {
    pub text: String,
    pub sourcelanguage: String,
    pub targetlanguage: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranslateResponse {
    pub source_text: String,
    pub source_language_code: String,
    pub target_language_code: String,
    pub translated_text: String,
}

/// Handle GET /translate
///
/// Missing parameters are rejected here; values the service doesn't accept
/// are forwarded and come back as its own rejection.
pub async fn handle_translate(
    State(state): State<AppState>,
    params: Result<Query<TranslateParams>, QueryRejection>,
) -> Result<Json<TranslateResponse>, ProxyError> {
    let Query(params) = params.map_err(|e| ProxyError::InvalidQuery(e.body_text()))?;

    let request = TranslateRequest {
        text: params.text,
        source_language_code: params.sourcelanguage,
        target_language_code: params.targetlanguage,
        settings: (*state.translation_settings).clone(),
    };
    let source_text = request.text.clone();

    let translation = state.translator.translate(request).await?;

    tracing::info!(
        "Translated {} -> {}",
        translation.source_language_code,
        translation.target_language_code
    );

    Ok(Json(TranslateResponse {
        source_text,
        source_language_code: translation.source_language_code,
        target_language_code: translation.target_language_code,
        translated_text: translation.translated_text,
    }))
}
