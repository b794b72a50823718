#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::Router;
use futures::future::{BoxFuture, FutureExt};
use tokio::net::TcpListener;

use hello_proxy_core::config::{ApodConfig, TimeoutsConfig, TranslateConfig};
use hello_proxy_core::proxy::upstream::{TranslateRequest, Translation, TranslationSettings};
use hello_proxy_core::proxy::{build_router, AppState, ApodClient, HttpTranslator, Translator, UpstreamClient};
use hello_proxy_core::ProxyError;

/// Serve `router` on an ephemeral loopback port
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// A loopback address nothing is listening on
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

pub fn upstream() -> UpstreamClient {
    UpstreamClient::new(&TimeoutsConfig::default()).unwrap()
}

pub fn apod_client(base: SocketAddr) -> ApodClient {
    ApodClient::new(
        upstream(),
        &ApodConfig {
            url: format!("http://{}/planetary/apod", base),
            api_key: "test-key".to_string(),
        },
    )
}

pub fn http_translator(base: SocketAddr) -> HttpTranslator {
    let config = TranslateConfig {
        endpoint: Some(format!("http://{}/", base)),
        ..Default::default()
    };
    HttpTranslator::new(upstream(), &config)
}

pub fn default_settings() -> TranslationSettings {
    TranslationSettings::from(&TranslateConfig::default())
}

/// Translator substitute: echoes the request back with a canned translation
pub struct StubTranslator {
    pub calls: AtomicUsize,
    pub last_request: std::sync::Mutex<Option<TranslateRequest>>,
    pub resolved_source: Option<String>,
    pub fail: bool,
}

impl StubTranslator {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_request: std::sync::Mutex::new(None),
            resolved_source: None,
            fail: false,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Translator for StubTranslator {
    fn translate(&self, request: TranslateRequest) -> BoxFuture<'_, Result<Translation, ProxyError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        let result = if self.fail {
            Err(ProxyError::Translation("service unavailable".to_string()))
        } else {
            Ok(Translation {
                translated_text: format!("[{}] {}", request.target_language_code, request.text),
                source_language_code: self
                    .resolved_source
                    .clone()
                    .unwrap_or(request.source_language_code),
                target_language_code: request.target_language_code,
            })
        };
        async move { result }.boxed()
    }
}

/// App wired to a stub translator and an APOD upstream at `apod_base`
pub async fn spawn_app(apod_base: SocketAddr, translator: Arc<dyn Translator>) -> SocketAddr {
    let state = AppState::new(apod_client(apod_base), translator, default_settings());
    spawn(build_router(state)).await
}
