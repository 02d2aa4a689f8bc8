//! Collaborator snapshots
//!
//! Plain, already-resolved data fetched by external services (weather,
//! market, soil sensors) and handed to the response composer as context.
//! The advisory core performs no I/O of its own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current weather for a location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Short description, e.g. "sunny"
    pub condition: String,
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Relative humidity percent
    #[serde(default)]
    pub humidity: Option<f64>,
    /// Wind speed in km/h
    #[serde(default)]
    pub wind_speed: Option<f64>,
    /// Precipitation in mm
    #[serde(default)]
    pub precipitation: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

/// Current mandi price for a crop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub crop: String,
    /// Market (mandi) the quote comes from
    pub mandi: String,
    /// Price per unit in rupees
    pub price: f64,
    /// Pricing unit, e.g. "quintal"
    pub unit: String,
}

/// Soil nutrient readout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilSnapshot {
    /// Nitrogen level, e.g. "medium"
    pub nitrogen: String,
    /// Phosphorus level
    pub phosphorus: String,
    /// Potassium level
    pub potassium: String,
    /// Soil pH
    pub ph: f64,
}
