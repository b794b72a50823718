//! Proxy Server - Axum HTTP server

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::ProxyError;
use crate::proxy::handlers::{apod, demo, translate};
use crate::proxy::upstream::{ApodClient, HttpTranslator, TranslationSettings, Translator, UpstreamClient};

/// Matches express.json()'s default limit
const JSON_BODY_LIMIT: usize = 100 * 1024;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub apod: Arc<ApodClient>,
    pub translator: Arc<dyn Translator>,
    pub translation_settings: Arc<TranslationSettings>,
}

impl AppState {
    pub fn new(
        apod: ApodClient,
        translator: Arc<dyn Translator>,
        translation_settings: TranslationSettings,
    ) -> Self {
        Self {
            apod: Arc::new(apod),
            translator,
            translation_settings: Arc::new(translation_settings),
        }
    }

    /// Build the production clients once; handlers share them through the state.
    pub fn from_config(config: &Config) -> Result<Self, ProxyError> {
        let upstream = UpstreamClient::new(&config.timeouts)?;
        let translator = HttpTranslator::new(upstream.clone(), &config.translate);
        tracing::debug!("Translation endpoint: {}", translator.endpoint());

        Ok(Self::new(
            ApodClient::new(upstream, &config.apod),
            Arc::new(translator),
            TranslationSettings::from(&config.translate),
        ))
    }
}

/// Proxy server instance
pub struct ProxyServer {
    host: String,
    port: u16,
    state: AppState,
}

impl ProxyServer {
    pub fn new(host: String, port: u16, state: AppState) -> Self {
        Self { host, port, state }
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Bind host:port and run until a shutdown signal arrives
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = format!("{}:{}", self.host, self.port);
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Local server running on http://{}", listener.local_addr()?);
        tracing::info!("Press Ctrl+C to stop");

        self.serve(listener).await
    }

    /// Serve on an already-bound listener
    pub async fn serve(self, listener: TcpListener) -> anyhow::Result<()> {
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/healthz", get(health_check_handler))
        .route("/health", get(health_check_handler))

        // Demo routes
        .route("/hello", get(demo::handle_hello))
        .route("/echo", post(demo::handle_echo))
        .route("/async", get(demo::handle_async))

        // Upstream proxies
        .route("/apod", get(apod::handle_apod))
        .route("/translate", get(translate::handle_translate))

        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(JSON_BODY_LIMIT)),
        )
        .with_state(state)
}

/// Health check handler
async fn health_check_handler() -> Response {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"}))).into_response()
}

/// Shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
