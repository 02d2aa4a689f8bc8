//! Price forecasting
//!
//! Synthetic price model: a seasonal sine factor over the calendar year with
//! bounded random noise, projected forward with a linear trend fitted over
//! the history window. Stands in for a real forecasting backend; the output
//! shapes are what the real one would produce.

use chrono::{DateTime, Datelike, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::round2;

const BASE_PRICE: f64 = 2000.0;
const HISTORY_MONTHS: usize = 24;
const SEASONAL_AMPLITUDE: f64 = 0.1;
const HISTORY_NOISE: f64 = 0.05;
const FORECAST_NOISE: f64 = 0.03;
/// Forecast bands are a flat ±10% around the point estimate
const BOUND_SPREAD: f64 = 0.1;
const MIN_CONFIDENCE: f64 = 0.3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalPrice {
    /// "YYYY-MM"
    pub date: String,
    pub price: f64,
    pub month: u32,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPrice {
    /// "YYYY-MM"
    pub date: String,
    pub price: f64,
    pub month: u32,
    pub year: i32,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceForecast {
    pub crop: String,
    pub state: String,
    pub historical_data: Vec<HistoricalPrice>,
    pub forecast: Vec<ForecastPrice>,
    /// In [0.3, 1.0]; 0.5 when the history window is too short
    pub confidence: f64,
}

/// Build a forecast for a crop anchored at the current time
pub fn price_forecast(crop: &str, state: &str, months: usize) -> PriceForecast {
    let now = Utc::now();
    let historical_data = historical_prices(now);
    let forecast = project(&historical_data, now, months);
    let confidence = forecast_confidence(&historical_data);

    PriceForecast {
        crop: crop.to_string(),
        state: state.to_string(),
        historical_data,
        forecast,
        confidence,
    }
}

/// Seasonal multiplier for a calendar month, peaking around April
fn seasonal_factor(month: u32) -> f64 {
    1.0 + SEASONAL_AMPLITUDE * (TAU * (month as f64 - 1.0) / 12.0).sin()
}

/// Synthetic history: oldest first, 24 monthly points ending now
fn historical_prices(now: DateTime<Utc>) -> Vec<HistoricalPrice> {
    let mut rng = rand::thread_rng();
    let mut prices: Vec<HistoricalPrice> = (0..HISTORY_MONTHS)
        .map(|i| {
            let point = now - Duration::days(30 * i as i64);
            let noise = 1.0 + HISTORY_NOISE * rng.gen_range(-1.0..=1.0);
            let price = BASE_PRICE * seasonal_factor(point.month()) * noise;
            HistoricalPrice {
                date: point.format("%Y-%m").to_string(),
                price: round2(price),
                month: point.month(),
                year: point.year(),
            }
        })
        .collect();
    prices.reverse();
    prices
}

/// Project the linear trend forward with seasonal adjustment and noise
fn project(
    historical: &[HistoricalPrice],
    last_date: DateTime<Utc>,
    months: usize,
) -> Vec<ForecastPrice> {
    let trend = match historical.len() {
        0 | 1 => 0.0,
        n => {
            (historical[n - 1].price - historical[0].price) / n as f64
        }
    };
    let last_price = historical.last().map(|p| p.price).unwrap_or(BASE_PRICE);

    let mut rng = rand::thread_rng();
    (1..=months)
        .map(|i| {
            let point = last_date + Duration::days(30 * i as i64);
            let noise = 1.0 + FORECAST_NOISE * rng.gen_range(-1.0..=1.0);
            let price = (last_price + trend * i as f64) * seasonal_factor(point.month()) * noise;
            ForecastPrice {
                date: point.format("%Y-%m").to_string(),
                price: round2(price),
                month: point.month(),
                year: point.year(),
                lower_bound: round2(price * (1.0 - BOUND_SPREAD)),
                upper_bound: round2(price * (1.0 + BOUND_SPREAD)),
            }
        })
        .collect()
}

/// Confidence from the coefficient of variation of the history window
fn forecast_confidence(historical: &[HistoricalPrice]) -> f64 {
    if historical.len() < 6 {
        return 0.5;
    }

    let prices: Vec<f64> = historical.iter().map(|p| p.price).collect();
    let mean = prices.iter().sum::<f64>() / prices.len() as f64;
    if mean <= 0.0 {
        return MIN_CONFIDENCE;
    }
    let variance = prices.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / prices.len() as f64;
    let cv = variance.sqrt() / mean;

    round2((1.0 - cv).max(MIN_CONFIDENCE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_window_size_and_order() {
        let history = historical_prices(Utc::now());
        assert_eq!(history.len(), HISTORY_MONTHS);
        // Oldest first.
        let first = &history[0];
        let last = &history[HISTORY_MONTHS - 1];
        assert!((first.year, first.month) < (last.year, last.month));
        for point in &history {
            assert!(point.price > 0.0);
            assert_eq!(point.date, format!("{:04}-{:02}", point.year, point.month));
        }
    }

    #[test]
    fn test_forecast_length_and_bounds() {
        let forecast = price_forecast("wheat", "Punjab", 12);
        assert_eq!(forecast.forecast.len(), 12);
        for point in &forecast.forecast {
            assert!(point.lower_bound <= point.price);
            assert!(point.upper_bound >= point.price);
        }
    }

    #[test]
    fn test_confidence_bounds() {
        let forecast = price_forecast("rice", "Bihar", 6);
        assert!(forecast.confidence >= MIN_CONFIDENCE);
        assert!(forecast.confidence <= 1.0);
    }

    #[test]
    fn test_short_history_gets_neutral_confidence() {
        let history = vec![HistoricalPrice {
            date: "2026-01".to_string(),
            price: 2000.0,
            month: 1,
            year: 2026,
        }];
        assert_eq!(forecast_confidence(&history), 0.5);
    }

    #[test]
    fn test_seasonal_factor_range() {
        for month in 1..=12 {
            let f = seasonal_factor(month);
            assert!((0.9..=1.1).contains(&f));
        }
        // Flat at the January anchor.
        assert!((seasonal_factor(1) - 1.0).abs() < 1e-12);
    }
}
