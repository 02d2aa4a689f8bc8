//! Current market prices
//!
//! Quotes come from a [`MarketQuoteProvider`]; processed prices are held in
//! an in-process cache for a configurable number of hours so repeat lookups
//! for the same crop/state/district do not hit the upstream again.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::{round2, MarketError};

/// Raw quote payload from an upstream price API
///
/// Every field defaults so a sparse upstream response still processes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawQuote {
    #[serde(default = "default_crop")]
    pub crop: String,
    #[serde(default = "default_state")]
    pub state: String,
    #[serde(default = "default_district")]
    pub district: String,
    #[serde(default = "default_current_price")]
    pub current_price: f64,
    #[serde(default = "default_previous_price")]
    pub previous_price: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default = "default_market")]
    pub market: String,
}

fn default_crop() -> String {
    "wheat".to_string()
}
fn default_state() -> String {
    "Delhi".to_string()
}
fn default_district() -> String {
    "All Districts".to_string()
}
fn default_current_price() -> f64 {
    2100.0
}
fn default_previous_price() -> f64 {
    2050.0
}
fn default_unit() -> String {
    "quintal".to_string()
}
fn default_market() -> String {
    "Delhi Mandi".to_string()
}

impl Default for RawQuote {
    fn default() -> Self {
        Self {
            crop: default_crop(),
            state: default_state(),
            district: default_district(),
            current_price: default_current_price(),
            previous_price: default_previous_price(),
            unit: default_unit(),
            market: default_market(),
        }
    }
}

/// Processed market price for one crop/state/district
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketData {
    pub crop: String,
    pub state: String,
    pub district: String,
    pub current_price: f64,
    pub previous_price: f64,
    /// "up" or "down"
    pub trend: String,
    /// Absolute percentage change, two decimals
    pub change_percent: f64,
    pub unit: String,
    pub market: String,
    pub timestamp: DateTime<Utc>,
}

/// Upstream source of raw quotes
#[async_trait]
pub trait MarketQuoteProvider: Send + Sync {
    async fn fetch(
        &self,
        crop: &str,
        state: &str,
        district: Option<&str>,
    ) -> Result<RawQuote, MarketError>;
}

/// Provider returning plausible fixed quotes, used until a real price API
/// integration lands
#[derive(Debug, Clone, Default)]
pub struct SimulatedQuoteProvider;

#[async_trait]
impl MarketQuoteProvider for SimulatedQuoteProvider {
    async fn fetch(
        &self,
        crop: &str,
        state: &str,
        district: Option<&str>,
    ) -> Result<RawQuote, MarketError> {
        Ok(RawQuote {
            crop: crop.to_string(),
            state: state.to_string(),
            district: district.unwrap_or("All Districts").to_string(),
            ..RawQuote::default()
        })
    }
}

/// Provider backed by an HTTP price API
pub struct HttpQuoteProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpQuoteProvider {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl MarketQuoteProvider for HttpQuoteProvider {
    async fn fetch(
        &self,
        crop: &str,
        state: &str,
        district: Option<&str>,
    ) -> Result<RawQuote, MarketError> {
        let mut params = vec![
            ("crop", crop.to_string()),
            ("state", state.to_string()),
            ("api_key", self.api_key.clone()),
        ];
        if let Some(district) = district {
            params.push(("district", district.to_string()));
        }

        let response = self
            .client
            .get(format!("{}/prices", self.base_url))
            .query(&params)
            .send()
            .await?;

        let quote = response
            .json::<RawQuote>()
            .await
            .map_err(|e| MarketError::Payload(e.to_string()))?;
        Ok(quote)
    }
}

struct CachedPrice {
    data: MarketData,
    expires_at: DateTime<Utc>,
}

/// Price lookups with a time-boxed cache in front of the provider
pub struct MarketService {
    provider: Arc<dyn MarketQuoteProvider>,
    cache: DashMap<String, CachedPrice>,
    cache_ttl: Duration,
}

impl MarketService {
    pub fn new(provider: Arc<dyn MarketQuoteProvider>, cache_ttl_hours: u64) -> Self {
        Self {
            provider,
            cache: DashMap::new(),
            cache_ttl: Duration::hours(cache_ttl_hours as i64),
        }
    }

    /// Current price for a crop, served from cache when fresh
    pub async fn prices(
        &self,
        crop: &str,
        state: &str,
        district: Option<&str>,
    ) -> Result<MarketData, MarketError> {
        let key = cache_key(crop, state, district);

        if let Some(entry) = self.cache.get(&key) {
            if entry.expires_at > Utc::now() {
                tracing::debug!(key = %key, "Market price cache hit");
                return Ok(entry.data.clone());
            }
        }

        let quote = self.provider.fetch(crop, state, district).await?;
        let data = process_quote(quote);

        self.cache.insert(
            key,
            CachedPrice {
                data: data.clone(),
                expires_at: Utc::now() + self.cache_ttl,
            },
        );

        Ok(data)
    }
}

fn cache_key(crop: &str, state: &str, district: Option<&str>) -> String {
    format!("{}_{}_{}", crop, state, district.unwrap_or("all"))
}

/// Derive trend and percentage change from a raw quote
fn process_quote(quote: RawQuote) -> MarketData {
    let (trend, change) = if quote.current_price > quote.previous_price {
        (
            "up",
            (quote.current_price - quote.previous_price) / quote.previous_price * 100.0,
        )
    } else {
        (
            "down",
            (quote.previous_price - quote.current_price) / quote.previous_price * 100.0,
        )
    };

    MarketData {
        crop: quote.crop,
        state: quote.state,
        district: quote.district,
        current_price: quote.current_price,
        previous_price: quote.previous_price,
        trend: trend.to_string(),
        change_percent: round2(change),
        unit: quote.unit,
        market: quote.market,
        timestamp: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl MarketQuoteProvider for CountingProvider {
        async fn fetch(
            &self,
            crop: &str,
            _state: &str,
            _district: Option<&str>,
        ) -> Result<RawQuote, MarketError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(RawQuote {
                crop: crop.to_string(),
                ..RawQuote::default()
            })
        }
    }

    #[test]
    fn test_process_quote_upward_trend() {
        let data = process_quote(RawQuote::default());
        assert_eq!(data.trend, "up");
        // (2100 - 2050) / 2050 * 100 = 2.44 to two decimals
        assert_eq!(data.change_percent, 2.44);
        assert_eq!(data.unit, "quintal");
    }

    #[test]
    fn test_process_quote_downward_trend_is_absolute() {
        let quote = RawQuote {
            current_price: 2000.0,
            previous_price: 2100.0,
            ..RawQuote::default()
        };
        let data = process_quote(quote);
        assert_eq!(data.trend, "down");
        assert!(data.change_percent > 0.0);
    }

    #[test]
    fn test_cache_key_defaults_district() {
        assert_eq!(cache_key("wheat", "Delhi", None), "wheat_Delhi_all");
        assert_eq!(
            cache_key("rice", "Punjab", Some("Amritsar")),
            "rice_Punjab_Amritsar"
        );
    }

    #[tokio::test]
    async fn test_fresh_cache_skips_provider() {
        let provider = Arc::new(CountingProvider {
            calls: AtomicUsize::new(0),
        });
        let service = MarketService::new(provider.clone(), 6);

        let first = service.prices("wheat", "Delhi", None).await.unwrap();
        let second = service.prices("wheat", "Delhi", None).await.unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert_eq!(first.crop, second.crop);

        // A different district is a different cache row.
        service.prices("wheat", "Delhi", Some("South")).await.unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }
}
