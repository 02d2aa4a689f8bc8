//! Main settings module
//!
//! Runtime configuration layered from `config/default.yaml`, an optional
//! environment-specific file and `AGRI_ADVISOR__*` environment variables.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    #[default]
    Development,
    Staging,
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub market: MarketConfig,

    #[serde(default)]
    pub weather: WeatherConfig,

    /// Directory holding optional domain table overrides (domain.yaml)
    #[serde(default = "default_domain_dir")]
    pub domain_dir: String,
}

fn default_domain_dir() -> String {
    "config".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            environment: RuntimeEnvironment::default(),
            server: ServerConfig::default(),
            chat: ChatConfig::default(),
            market: MarketConfig::default(),
            weather: WeatherConfig::default(),
            domain_dir: default_domain_dir(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
    #[serde(default)]
    pub cors_origins: Vec<String>,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: default_true(),
            cors_origins: Vec::new(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Chat assistant configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Image detections above this confidence get an assertive diagnosis;
    /// anything at or below gets a tentative hedge.
    #[serde(default = "default_image_confidence")]
    pub image_confidence_threshold: f64,
}

fn default_image_confidence() -> f64 {
    0.8
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            image_confidence_threshold: default_image_confidence(),
        }
    }
}

/// Market data configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Quote cache lifetime in hours
    #[serde(default = "default_cache_ttl_hours")]
    pub cache_ttl_hours: u64,
    /// Base URL for the live quote API (used by the HTTP provider)
    #[serde(default = "default_market_api_url")]
    pub api_url: String,
    /// API key, usually injected via AGRI_ADVISOR__MARKET__API_KEY
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_cache_ttl_hours() -> u64 {
    6
}

fn default_market_api_url() -> String {
    "https://api.agmarknet.gov.in".to_string()
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            cache_ttl_hours: default_cache_ttl_hours(),
            api_url: default_market_api_url(),
            api_key: None,
        }
    }
}

/// Weather data configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_weather_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_weather_api_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_url: default_weather_api_url(),
            api_key: None,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "port must be non-zero".to_string(),
            });
        }

        if self.server.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.request_timeout_secs".to_string(),
                message: "timeout must be at least 1 second".to_string(),
            });
        }

        if self.market.cache_ttl_hours == 0 {
            return Err(ConfigError::InvalidValue {
                field: "market.cache_ttl_hours".to_string(),
                message: "cache TTL must be at least 1 hour".to_string(),
            });
        }

        let threshold = self.chat.image_confidence_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::InvalidValue {
                field: "chat.image_confidence_threshold".to_string(),
                message: format!("{threshold} is outside [0, 1]"),
            });
        }

        Ok(())
    }
}

/// Load settings from files and environment
///
/// Priority: env vars > config/{env}.yaml > config/default.yaml > defaults.
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("AGRI_ADVISOR")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.market.cache_ttl_hours, 6);
        assert_eq!(settings.chat.image_confidence_threshold, 0.8);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.market.cache_ttl_hours = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.chat.image_confidence_threshold = 1.5;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }
}
