//! Translation service capability
//!
//! Handlers only see the [`Translator`] trait; [`HttpTranslator`] is the
//! production implementation speaking the Amazon Translate JSON 1.1 protocol.
//! Requests are not SigV4-signed, so `endpoint` is expected to be a signing
//! gateway or a compatible service.

use futures::future::{BoxFuture, FutureExt};
use reqwest::header;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::TranslateConfig;
use crate::error::ProxyError;
use crate::proxy::upstream::UpstreamClient;

const TRANSLATE_TEXT_TARGET: &str = "AWSShineFrontendService_20170701.TranslateText";
const AMZ_JSON: &str = "application/x-amz-json-1.1";

/// Fixed style options applied to every translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranslationSettings {
    pub formality: String,
    pub profanity: String,
    pub brevity: String,
}

impl From<&TranslateConfig> for TranslationSettings {
    fn from(config: &TranslateConfig) -> Self {
        Self {
            formality: config.formality.clone(),
            profanity: config.profanity.clone(),
            brevity: config.brevity.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranslateRequest {
    pub text: String,
    pub source_language_code: String,
    pub target_language_code: String,
    pub settings: TranslationSettings,
}

/// Result as reported by the service; language codes are the resolved ones
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Translation {
    pub translated_text: String,
    pub source_language_code: String,
    pub target_language_code: String,
}

pub trait Translator: Send + Sync {
    fn translate(&self, request: TranslateRequest) -> BoxFuture<'_, Result<Translation, ProxyError>>;
}

pub struct HttpTranslator {
    upstream: UpstreamClient,
    endpoint: String,
    credential: Option<String>,
}

impl HttpTranslator {
    pub fn new(upstream: UpstreamClient, config: &TranslateConfig) -> Self {
        Self {
            upstream,
            endpoint: config.resolved_endpoint(),
            credential: config.credential.clone().filter(|c| !c.is_empty()),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn translate_text(&self, request: TranslateRequest) -> Result<Translation, ProxyError> {
        tracing::debug!(
            "TranslateText {} -> {} ({} chars)",
            request.source_language_code,
            request.target_language_code,
            request.text.chars().count()
        );

        let mut builder = self
            .upstream
            .http()
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, AMZ_JSON)
            .header("X-Amz-Target", TRANSLATE_TEXT_TARGET)
            .json(&request);

        if let Some(credential) = &self.credential {
            builder = builder.bearer_auth(credential);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_client_error() {
            return Err(ProxyError::TranslationRejected {
                status: status.as_u16(),
                message: rejection_message(&body),
            });
        }
        if !status.is_success() {
            return Err(ProxyError::Translation(format!("service returned {}: {}", status, body)));
        }

        serde_json::from_str(&body).map_err(|e| ProxyError::InvalidUpstreamBody(e.to_string()))
    }
}

impl Translator for HttpTranslator {
    fn translate(&self, request: TranslateRequest) -> BoxFuture<'_, Result<Translation, ProxyError>> {
        self.translate_text(request).boxed()
    }
}

/// Pull `message`/`Message` and `__type` out of an AWS-style JSON error.
fn rejection_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return body.to_string();
    };

    let message = value
        .get("message")
        .or_else(|| value.get("Message"))
        .and_then(|v| v.as_str());
    let kind = value
        .get("__type")
        .and_then(|v| v.as_str())
        .map(|t| t.rsplit('#').next().unwrap_or(t));

    match (kind, message) {
        (Some(kind), Some(message)) => format!("{}: {}", kind, message),
        (None, Some(message)) => message.to_string(),
        (Some(kind), None) => kind.to_string(),
        (None, None) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_format() {
        let request = TranslateRequest {
            text: "Hello".into(),
            source_language_code: "en".into(),
            target_language_code: "es".into(),
            settings: TranslationSettings::from(&TranslateConfig::default()),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "Text": "Hello",
                "SourceLanguageCode": "en",
                "TargetLanguageCode": "es",
                "Settings": {"Formality": "INFORMAL", "Profanity": "MASK", "Brevity": "ON"}
            })
        );
    }

    #[test]
    fn test_response_ignores_extra_fields() {
        let translation: Translation = serde_json::from_value(json!({
            "TranslatedText": "Hola",
            "SourceLanguageCode": "en",
            "TargetLanguageCode": "es",
            "AppliedSettings": {"Formality": "INFORMAL"}
        }))
        .unwrap();
        assert_eq!(translation.translated_text, "Hola");
    }

    #[test]
    fn test_rejection_message() {
        let body = r#"{"__type":"com.amazonaws.translate#UnsupportedLanguagePairException","message":"xx is not supported"}"#;
        assert_eq!(
            rejection_message(body),
            "UnsupportedLanguagePairException: xx is not supported"
        );
        assert_eq!(rejection_message(r#"{"Message":"denied"}"#), "denied");
        assert_eq!(rejection_message("plain text"), "plain text");
    }

    #[test]
    fn test_endpoint_from_region() {
        let upstream = UpstreamClient::new(&Default::default()).unwrap();
        let config = TranslateConfig {
            region: "eu-central-1".into(),
            ..Default::default()
        };
        let translator = HttpTranslator::new(upstream, &config);
        assert_eq!(translator.endpoint(), "https://translate.eu-central-1.amazonaws.com");
    }
}
