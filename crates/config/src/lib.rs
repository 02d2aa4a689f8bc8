//! Configuration for the agri advisory backend
//!
//! Two kinds of configuration live here:
//! - [`Settings`]: runtime knobs (server, cache TTLs, thresholds) layered
//!   from files and `AGRI_ADVISOR__*` environment variables.
//! - [`DomainTables`]: the immutable lookup tables the advisory logic runs
//!   on (chat lexicon, crop and region profiles, treatment book, cropping
//!   calendar). Built once at startup, read-only afterwards, optionally
//!   overridden from YAML.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod calendar;
pub mod crops;
pub mod lexicon;
pub mod regions;
pub mod settings;
pub mod treatments;

pub use calendar::CropCalendar;
pub use crops::{CropDatabase, CropProfile, NutrientLevel, NutrientNeeds, WaterNeed};
pub use lexicon::Lexicon;
pub use regions::{Climate, RegionDatabase, RegionProfile};
pub use settings::{
    load_settings, ChatConfig, MarketConfig, RuntimeEnvironment, ServerConfig, Settings,
    WeatherConfig,
};
pub use treatments::TreatmentBook;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}: {1}")]
    FileNotFound(String, String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// All immutable domain tables, bundled for injection
///
/// Everything in here is loaded once at process start and shared read-only
/// across request handlers. Per-request state (intent, entities, scores)
/// never lands in these tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainTables {
    #[serde(default)]
    pub lexicon: Lexicon,
    #[serde(default)]
    pub crops: CropDatabase,
    #[serde(default)]
    pub regions: RegionDatabase,
    #[serde(default)]
    pub treatments: TreatmentBook,
    #[serde(default)]
    pub calendar: CropCalendar,
}

impl DomainTables {
    /// Built-in tables, no files required
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Load overrides from `<dir>/domain.yaml`, falling back to the
    /// built-in tables when the file is absent.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self, ConfigError> {
        let path = dir.as_ref().join("domain.yaml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No domain override file, using built-in tables");
            return Ok(Self::builtin());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::FileNotFound(path.display().to_string(), e.to_string()))?;
        let tables: DomainTables =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        tracing::info!(path = %path.display(), "Loaded domain table overrides");
        Ok(tables)
    }

    /// Wrap in an `Arc` for sharing across handlers
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_populated() {
        let tables = DomainTables::builtin();
        assert!(tables.crops.get("rice").is_some());
        assert!(tables.regions.get("punjab").is_some());
    }

    #[test]
    fn test_missing_override_dir_falls_back_to_builtin() {
        let tables = DomainTables::load_dir("/nonexistent/config/dir").unwrap();
        assert!(tables.crops.get("wheat").is_some());
    }
}
