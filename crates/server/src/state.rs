//! Application state
//!
//! One shared, cheaply-clonable bundle of the domain tables, the chat
//! engine, and the provider-backed services. Configuration sits behind an
//! RwLock so it can be reloaded without restarting.

use std::sync::Arc;

use parking_lot::RwLock;

use agri_advisor_advisory::AdvisoryService;
use agri_advisor_config::{load_settings, DomainTables, Settings};
use agri_advisor_core::{ImageAnalyzer, WeatherProvider};
use agri_advisor_market::{
    MarketService, SimulatedQuoteProvider, StubValueChainDirectory, ValueChainProvider,
};
use agri_advisor_nlp::ChatEngine;

use crate::providers::SimulatedWeatherProvider;
use crate::vision::StubImageAnalyzer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RwLock<Settings>>,
    /// Environment name the config was loaded for, kept for reloads
    env: Option<String>,
    pub tables: Arc<DomainTables>,
    pub chat: Arc<ChatEngine>,
    pub advisory: Arc<AdvisoryService>,
    pub market: Arc<MarketService>,
    pub value_chain: Arc<dyn ValueChainProvider>,
    pub weather: Arc<dyn WeatherProvider>,
    pub analyzer: Arc<dyn ImageAnalyzer>,
}

impl AppState {
    /// Build state with the simulated providers
    pub fn new(config: Settings, tables: Arc<DomainTables>) -> Self {
        let chat = ChatEngine::new(tables.clone(), config.chat.image_confidence_threshold);
        let market = MarketService::new(
            Arc::new(SimulatedQuoteProvider),
            config.market.cache_ttl_hours,
        );

        Self {
            config: Arc::new(RwLock::new(config)),
            env: None,
            tables: tables.clone(),
            chat: Arc::new(chat),
            advisory: Arc::new(AdvisoryService::new(tables)),
            market: Arc::new(market),
            value_chain: Arc::new(StubValueChainDirectory),
            weather: Arc::new(SimulatedWeatherProvider),
            analyzer: Arc::new(StubImageAnalyzer),
        }
    }

    pub fn with_env(mut self, env: Option<String>) -> Self {
        self.env = env;
        self
    }

    /// Re-read settings from disk and swap them in
    pub fn reload_config(&self) -> Result<(), String> {
        let new_config = load_settings(self.env.as_deref())
            .map_err(|e| format!("Failed to reload config: {e}"))?;
        *self.config.write() = new_config;
        tracing::info!("Configuration reloaded");
        Ok(())
    }

    pub fn get_config(&self) -> parking_lot::RwLockReadGuard<'_, Settings> {
        self.config.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_builds_from_defaults() {
        let state = AppState::new(Settings::default(), DomainTables::builtin().into_shared());
        assert!(state.get_config().chat.image_confidence_threshold > 0.0);
        assert_eq!(state.tables.crops.len(), 4);
    }
}
