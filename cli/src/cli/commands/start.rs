use hello_proxy_core::config::Config;
use hello_proxy_core::proxy::{AppState, ProxyServer};

pub async fn run(mut config: Config, port_override: Option<u16>, host_override: Option<String>) -> anyhow::Result<()> {
    // Apply CLI overrides if provided
    if let Some(port) = port_override {
        config.server.port = port;
    }
    if let Some(host) = host_override {
        config.server.host = host;
    }

    tracing::info!("Starting hello-proxy...");
    tracing::info!("  Port: {}", config.server.port);
    tracing::info!("  Host: {}", config.server.bind_address());
    tracing::info!("  APOD upstream: {}", config.apod.url);
    tracing::info!("  Translate endpoint: {}", config.translate.resolved_endpoint());

    if config.apod.api_key == "DEMO_KEY" {
        tracing::warn!("Using NASA DEMO_KEY; /apod is heavily rate limited upstream. Set APOD_API_KEY to use your own key.");
    }

    let state = AppState::from_config(&config)?;
    let server = ProxyServer::new(config.server.bind_address().to_string(), config.server.port, state);

    // Run server (blocks until shutdown); it logs the bound address once listening
    server.run().await?;

    Ok(())
}
