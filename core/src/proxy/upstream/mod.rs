//! Outbound clients: shared HTTP client, APOD data API, translation service

pub mod apod;
pub mod client;
pub mod translate;

pub use apod::ApodClient;
pub use client::UpstreamClient;
pub use translate::{HttpTranslator, TranslateRequest, TranslationSettings, Translation, Translator};
