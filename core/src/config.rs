use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub apod: ApodConfig,

    #[serde(default)]
    pub translate: TranslateConfig,

    #[serde(default)]
    pub timeouts: TimeoutsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default)]
    pub allow_lan_access: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            allow_lan_access: false,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> &str {
        if self.allow_lan_access {
            "0.0.0.0"
        } else {
            &self.host
        }
    }
}

/// Astronomy Picture of the Day upstream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApodConfig {
    #[serde(default = "default_apod_url")]
    pub url: String,

    #[serde(default = "default_apod_api_key")]
    pub api_key: String,
}

impl Default for ApodConfig {
    fn default() -> Self {
        Self {
            url: default_apod_url(),
            api_key: default_apod_api_key(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    #[serde(default = "default_region")]
    pub region: String,

    /// Overrides the endpoint derived from `region`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Sent as a bearer token when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,

    #[serde(default = "default_formality")]
    pub formality: String,

    #[serde(default = "default_profanity")]
    pub profanity: String,

    #[serde(default = "default_brevity")]
    pub brevity: String,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            endpoint: None,
            credential: None,
            formality: default_formality(),
            profanity: default_profanity(),
            brevity: default_brevity(),
        }
    }
}

impl TranslateConfig {
    pub fn resolved_endpoint(&self) -> String {
        match &self.endpoint {
            Some(endpoint) if !endpoint.is_empty() => endpoint.clone(),
            _ => format!("https://translate.{}.amazonaws.com", self.region),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutsConfig {
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// Whole-request timeout for outbound calls; unset leaves the transport default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,
}

impl Default for TimeoutsConfig {
    fn default() -> Self {
        Self {
            connect_timeout: default_connect_timeout(),
            request_timeout: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_port() -> u16 { 3000 }
fn default_host() -> String { "127.0.0.1".to_string() }
fn default_apod_url() -> String { "https://api.nasa.gov/planetary/apod".to_string() }
fn default_apod_api_key() -> String { "DEMO_KEY".to_string() }
fn default_region() -> String { "us-east-1".to_string() }
fn default_formality() -> String { "INFORMAL".to_string() }
fn default_profanity() -> String { "MASK".to_string() }
fn default_brevity() -> String { "ON".to_string() }
fn default_connect_timeout() -> u64 { 20 }
fn default_log_level() -> String { "info".to_string() }

/// Get default config file path
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("hello-proxy")
        .join("config.toml")
}

/// Load config from file, or return defaults if not found.
///
/// Loading order:
/// 1. Specified path (if provided)
/// 2. ./config.toml (if exists)
/// 3. default_config_path() (usually ~/.config/hello-proxy/config.toml)
///
/// Environment overrides are applied on top of whichever source won.
pub fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    let mut config = load_from_files(path)?;
    config.apply_env_overrides(|key| std::env::var(key).ok());
    Ok(config)
}

fn load_from_files(path: Option<PathBuf>) -> anyhow::Result<Config> {
    if let Some(config_path) = path {
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;
            tracing::info!("Loaded config from specified path {:?}", config_path);
            return Ok(config);
        } else {
            anyhow::bail!("Specified config file not found: {:?}", config_path);
        }
    }

    let local_config = PathBuf::from("config.toml");
    if local_config.exists() {
        match std::fs::read_to_string(&local_config) {
            Ok(content) => match toml::from_str::<Config>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from current directory {:?}", local_config);
                    return Ok(config);
                }
                Err(e) => {
                    tracing::error!("Failed to parse ./config.toml: {}. Falling back to default path.", e);
                }
            },
            Err(e) => {
                tracing::error!("Failed to read ./config.toml: {}. Falling back to default path.", e);
            }
        }
    }

    let default_path = default_config_path();
    if default_path.exists() {
        let content = std::fs::read_to_string(&default_path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::info!("Loaded config from default path {:?}", default_path);
        Ok(config)
    } else {
        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }
}

impl Config {
    /// Apply `PORT`, `HOST`, `APOD_API_KEY` and the `TRANSLATE_*` variables.
    /// `lookup` is injected so tests don't touch the process environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("Ignoring invalid PORT value: {}", port),
            }
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(key) = lookup("APOD_API_KEY") {
            self.apod.api_key = key;
        }
        if let Some(region) = lookup("TRANSLATE_REGION").or_else(|| lookup("AWS_REGION")) {
            self.translate.region = region;
        }
        if let Some(endpoint) = lookup("TRANSLATE_ENDPOINT") {
            self.translate.endpoint = Some(endpoint);
        }
        if let Some(credential) = lookup("TRANSLATE_CREDENTIAL") {
            self.translate.credential = Some(credential);
        }
    }
}
