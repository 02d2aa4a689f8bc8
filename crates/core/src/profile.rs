//! User profile
//!
//! Caller-supplied, read-only context. The advisory core never persists or
//! mutates this; the HTTP layer attaches it to each request.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Farmer profile passed in as composer/scoring context
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stored location, e.g. "punjab". Empty means unknown.
    #[serde(default)]
    pub location: Option<String>,
    /// Preferred language for responses
    #[serde(default)]
    pub language: Language,
    /// Farm size in acres, if known
    #[serde(default)]
    pub farm_size: Option<f64>,
    /// Crops the farmer usually grows
    #[serde(default)]
    pub preferred_crops: Vec<String>,
}

impl UserProfile {
    pub fn new(location: impl Into<String>, language: Language) -> Self {
        Self {
            location: Some(location.into()),
            language,
            farm_size: None,
            preferred_crops: Vec::new(),
        }
    }

    /// Location for template filling, falling back to a generic phrase
    pub fn location_or_default(&self) -> &str {
        self.location.as_deref().unwrap_or("your area")
    }
}
