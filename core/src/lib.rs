//! hello-proxy core library
//! Demo routes, upstream proxy handlers and configuration

pub mod config;
pub mod error;
pub mod proxy;

pub use error::ProxyError;
