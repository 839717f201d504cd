use crate::connectors::BackendConfig;
use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_port: u16,
    pub app_host: String,
    pub backend: BackendConfig,
    #[serde(default)]
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct AuthSettings {
    /// How long a resolved bearer token stays in the in-process cache
    pub cache_ttl_secs: u64,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self { cache_ttl_secs: 60 }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),
    #[error("{0} is not set")]
    MissingEnv(&'static str),
}

pub fn get_configuration() -> Result<Settings, ConfigurationError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration"))
        .add_source(
            config::Environment::with_prefix("CINEMA")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    let mut config: Settings = settings.try_deserialize()?;

    // The project key never lives in the configuration file
    if config.backend.api_key.is_none() {
        config.backend.api_key = std::env::var("BACKEND_API_KEY").ok();
    }
    if config.backend.enabled && config.backend.api_key.is_none() {
        return Err(ConfigurationError::MissingEnv("BACKEND_API_KEY"));
    }

    Ok(config)
}
