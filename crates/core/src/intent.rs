//! Chat intent enumeration
//!
//! Intents are a closed set so the response composer can match exhaustively
//! instead of branching on strings. "No intent" is `Option<Intent>::None`.

use serde::{Deserialize, Serialize};

/// Kind of entity an intent can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Crop,
    Pest,
}

impl EntityKind {
    /// Key used in the per-request entity map
    pub fn key(&self) -> &'static str {
        match self {
            Self::Crop => "crop",
            Self::Pest => "pest",
        }
    }
}

/// Coarse category of a farmer's chat request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Fertilizer,
    Pest,
    Weather,
    Market,
    Soil,
}

impl Intent {
    /// Fixed classification order. Keyword counting can tie, and the
    /// classifier resolves ties by taking the first intent in this order,
    /// so reordering this array changes observable behavior.
    pub const ALL: [Intent; 5] = [
        Intent::Fertilizer,
        Intent::Pest,
        Intent::Weather,
        Intent::Market,
        Intent::Soil,
    ];

    /// Stable identifier used in logs and API payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fertilizer => "fertilizer",
            Self::Pest => "pest",
            Self::Weather => "weather",
            Self::Market => "market",
            Self::Soil => "soil",
        }
    }

    /// Entity vocabulary carried by this intent, if any.
    /// Only fertilizer/market (crop) and pest (pest) extract entities.
    pub fn entity_kind(&self) -> Option<EntityKind> {
        match self {
            Self::Fertilizer | Self::Market => Some(EntityKind::Crop),
            Self::Pest => Some(EntityKind::Pest),
            Self::Weather | Self::Soil => None,
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_order_is_fixed() {
        // Tie-breaking depends on this exact order.
        let names: Vec<&str> = Intent::ALL.iter().map(|i| i.as_str()).collect();
        assert_eq!(names, ["fertilizer", "pest", "weather", "market", "soil"]);
    }

    #[test]
    fn test_entity_kinds() {
        assert_eq!(Intent::Fertilizer.entity_kind(), Some(EntityKind::Crop));
        assert_eq!(Intent::Market.entity_kind(), Some(EntityKind::Crop));
        assert_eq!(Intent::Pest.entity_kind(), Some(EntityKind::Pest));
        assert_eq!(Intent::Weather.entity_kind(), None);
        assert_eq!(Intent::Soil.entity_kind(), None);
    }
}
