pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hello-proxy")]
#[command(author, version, about = "Demo HTTP server with APOD and translation proxy routes")]
pub struct Cli {
    /// Path to config file (checked in order: local config.toml, ~/.config/hello-proxy/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the server
    Start {
        /// Port to listen on (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind (overrides config and HOST)
        #[arg(long)]
        host: Option<String>,
    },

    /// Show effective settings and whether the server is reachable
    Status,

    /// Print the effective configuration as TOML
    Config,
}
