//! Region profiles
//!
//! Static agricultural records per region. Location strings from callers are
//! normalized ("Uttar Pradesh" -> "uttar_pradesh") before lookup; unknown
//! locations resolve to a fixed default region.

use serde::{Deserialize, Serialize};

use agri_advisor_core::Season;

/// Region key used as the default when a location is unrecognized
pub const DEFAULT_REGION: &str = "bihar";

/// Climate class of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Climate {
    TropicalWet,
    TropicalWetDry,
    Subtropical,
}

impl Climate {
    /// Climates that earn the suitability-score climate weight
    pub fn is_favorable(&self) -> bool {
        matches!(self, Self::TropicalWet | Self::Subtropical)
    }
}

/// Static agricultural record for one region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionProfile {
    /// Lookup key, e.g. "west_bengal"
    pub key: String,
    /// Display name, e.g. "West Bengal"
    pub name: String,
    pub climate: Climate,
    /// Crops predominantly grown here (lowercase names)
    pub predominant_crops: Vec<String>,
    pub soil_types: Vec<String>,
    /// Average annual rainfall in mm
    pub avg_rainfall_mm: u32,
    pub growing_seasons: Vec<Season>,
}

impl RegionProfile {
    /// Whether a crop is predominant in this region, case-insensitive
    pub fn grows_predominantly(&self, crop_name: &str) -> bool {
        self.predominant_crops
            .iter()
            .any(|c| c.eq_ignore_ascii_case(crop_name))
    }
}

/// All region profiles, loaded once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionDatabase {
    regions: Vec<RegionProfile>,
}

/// Normalize a caller-supplied location to a region key
pub fn normalize_location(location: &str) -> String {
    location.trim().to_lowercase().replace(' ', "_")
}

impl RegionDatabase {
    /// Look up a region by key or display name
    pub fn get(&self, location: &str) -> Option<&RegionProfile> {
        let key = normalize_location(location);
        self.regions.iter().find(|r| r.key == key)
    }

    /// Resolve a location, falling back to [`DEFAULT_REGION`]
    pub fn resolve(&self, location: &str) -> &RegionProfile {
        self.get(location).unwrap_or_else(|| {
            self.regions
                .iter()
                .find(|r| r.key == DEFAULT_REGION)
                .unwrap_or(&self.regions[0])
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionProfile> {
        self.regions.iter()
    }
}

impl Default for RegionDatabase {
    fn default() -> Self {
        let strs = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Self {
            regions: vec![
                RegionProfile {
                    key: "west_bengal".to_string(),
                    name: "West Bengal".to_string(),
                    climate: Climate::TropicalWet,
                    predominant_crops: strs(&["rice", "jute", "tea"]),
                    soil_types: strs(&["alluvial", "red_loamy"]),
                    avg_rainfall_mm: 1500,
                    growing_seasons: vec![Season::Kharif, Season::Rabi],
                },
                RegionProfile {
                    key: "uttar_pradesh".to_string(),
                    name: "Uttar Pradesh".to_string(),
                    climate: Climate::Subtropical,
                    predominant_crops: strs(&["rice", "wheat", "sugarcane"]),
                    soil_types: strs(&["alluvial", "red_loamy"]),
                    avg_rainfall_mm: 900,
                    growing_seasons: vec![Season::Kharif, Season::Rabi, Season::Zaid],
                },
                RegionProfile {
                    key: "punjab".to_string(),
                    name: "Punjab".to_string(),
                    climate: Climate::Subtropical,
                    predominant_crops: strs(&["wheat", "rice", "cotton"]),
                    soil_types: strs(&["alluvial", "sandy_loam"]),
                    avg_rainfall_mm: 600,
                    growing_seasons: vec![Season::Kharif, Season::Rabi],
                },
                RegionProfile {
                    key: "bihar".to_string(),
                    name: "Bihar".to_string(),
                    climate: Climate::Subtropical,
                    predominant_crops: strs(&["rice", "wheat", "maize"]),
                    soil_types: strs(&["alluvial", "clay_loam"]),
                    avg_rainfall_mm: 1200,
                    growing_seasons: vec![Season::Kharif, Season::Rabi],
                },
                RegionProfile {
                    key: "gujarat".to_string(),
                    name: "Gujarat".to_string(),
                    climate: Climate::TropicalWetDry,
                    predominant_crops: strs(&["cotton", "groundnut", "sugarcane"]),
                    soil_types: strs(&["black_cotton", "alluvial"]),
                    avg_rainfall_mm: 800,
                    growing_seasons: vec![Season::Kharif, Season::Rabi],
                },
                RegionProfile {
                    key: "maharashtra".to_string(),
                    name: "Maharashtra".to_string(),
                    climate: Climate::TropicalWetDry,
                    predominant_crops: strs(&["cotton", "sugarcane", "jowar"]),
                    soil_types: strs(&["black_cotton", "red_loamy"]),
                    avg_rainfall_mm: 800,
                    growing_seasons: vec![Season::Kharif, Season::Rabi],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_normalization() {
        let db = RegionDatabase::default();
        assert_eq!(db.get("Uttar Pradesh").unwrap().key, "uttar_pradesh");
        assert_eq!(db.get("  PUNJAB ").unwrap().name, "Punjab");
    }

    #[test]
    fn test_unknown_location_resolves_to_default() {
        let db = RegionDatabase::default();
        assert_eq!(db.resolve("atlantis").key, DEFAULT_REGION);
        assert_eq!(db.resolve("punjab").key, "punjab");
    }

    #[test]
    fn test_favorable_climates() {
        assert!(Climate::TropicalWet.is_favorable());
        assert!(Climate::Subtropical.is_favorable());
        assert!(!Climate::TropicalWetDry.is_favorable());
    }
}
