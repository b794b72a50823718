use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter};

mod cli;

use cli::{Cli, Commands};
use hello_proxy_core::config::load_config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Start at info so config loading is visible, then switch to the configured level
    let (filter, log_handle) = reload::Layer::new(log_filter("info")?);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = load_config(cli.config)?;
    log_handle.reload(log_filter(&config.logging.level)?)?;

    match cli.command {
        Commands::Start { port, host } => {
            cli::commands::start::run(config, port, host).await?;
        }
        Commands::Status => {
            cli::commands::status::run(&config).await?;
        }
        Commands::Config => {
            cli::commands::config::run(&config)?;
        }
    }

    Ok(())
}

fn log_filter(level: &str) -> anyhow::Result<EnvFilter> {
    Ok(EnvFilter::from_default_env()
        .add_directive(format!("hello_proxy={}", level).parse()?)
        .add_directive(format!("hello_proxy_core={}", level).parse()?)
        .add_directive("tower_http=debug".parse()?))
}
