use hello_proxy_core::config::{default_config_path, Config};

pub async fn run(config: &Config) -> anyhow::Result<()> {
    println!("hello-proxy Status");
    println!("==================");
    println!();
    println!("Configuration:");
    println!("  Config file: {:?}", default_config_path());
    println!();
    println!("Server settings:");
    println!("  Host: {}", config.server.bind_address());
    println!("  Port: {}", config.server.port);
    println!();
    println!("Upstreams:");
    println!("  APOD: {}", config.apod.url);
    println!("  Translate: {} ({})", config.translate.resolved_endpoint(), config.translate.region);
    println!(
        "  Translate settings: formality={} profanity={} brevity={}",
        config.translate.formality, config.translate.profanity, config.translate.brevity
    );

    // A wildcard bind is probed over loopback
    let probe_host = if config.server.allow_lan_access { "127.0.0.1" } else { config.server.host.as_str() };

    println!();
    let url = format!("http://{}:{}/healthz", probe_host, config.server.port);
    match reqwest::get(&url).await {
        Ok(resp) if resp.status().is_success() => {
            println!("Server: RUNNING ✓");
        }
        _ => {
            println!("Server: NOT RUNNING");
        }
    }

    Ok(())
}
