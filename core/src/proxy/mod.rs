//! Proxy module - HTTP server, route handlers and upstream clients

pub mod handlers;
pub mod server;
pub mod upstream;

pub use server::{build_router, AppState, ProxyServer};
pub use upstream::{ApodClient, HttpTranslator, Translator, UpstreamClient};
