//! External data providers
//!
//! Simulated weather backend used until a real meteorological API
//! integration lands. Shapes match what the real provider would return.

use async_trait::async_trait;
use chrono::Utc;

use agri_advisor_core::{Language, Result, WeatherProvider, WeatherSnapshot};

/// Fixed fair-weather provider
#[derive(Debug, Clone, Default)]
pub struct SimulatedWeatherProvider;

#[async_trait]
impl WeatherProvider for SimulatedWeatherProvider {
    async fn current(&self, location: &str, _language: Language) -> Result<WeatherSnapshot> {
        tracing::debug!(location, "Serving simulated weather");
        Ok(WeatherSnapshot {
            condition: "sunny".to_string(),
            temperature_c: 32.0,
            humidity: Some(45.0),
            wind_speed: Some(8.0),
            precipitation: Some(0.0),
            timestamp: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulated_weather_is_fixed() {
        let provider = SimulatedWeatherProvider;
        let snapshot = provider.current("punjab", Language::English).await.unwrap();
        assert_eq!(snapshot.condition, "sunny");
        assert_eq!(snapshot.temperature_c, 32.0);
    }
}
