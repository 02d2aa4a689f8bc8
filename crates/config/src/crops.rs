//! Crop profiles
//!
//! Static agronomic records per crop. Stored as a vector rather than a map
//! so enumeration order is fixed: recommendation sorting is stable and ties
//! keep this order.

use serde::{Deserialize, Serialize};

use agri_advisor_core::Season;

/// Water requirement tiers, drive the irrigation schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterNeed {
    High,
    Medium,
    Low,
}

/// Qualitative nutrient requirement level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientLevel {
    High,
    Medium,
    Low,
}

impl NutrientLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// N/P/K requirements for a crop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientNeeds {
    pub nitrogen: NutrientLevel,
    pub phosphorus: NutrientLevel,
    pub potassium: NutrientLevel,
}

/// Static agronomic record for one crop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropProfile {
    /// Canonical display name, e.g. "Rice"
    pub name: String,
    pub scientific_name: String,
    /// Seasons this crop can be sown in
    pub seasons: Vec<Season>,
    pub water_need: WaterNeed,
    /// Viable temperature range in Celsius
    pub temperature_range: (f64, f64),
    /// Viable soil pH range
    pub soil_ph_range: (f64, f64),
    pub nutrients: NutrientNeeds,
    /// Major pest keys into the treatment book
    pub major_pests: Vec<String>,
    /// Major disease keys into the treatment book
    pub major_diseases: Vec<String>,
    /// Region keys where this crop is commonly grown
    pub suitable_regions: Vec<String>,
}

impl CropProfile {
    /// Whether this crop can be sown in the given season
    pub fn grows_in(&self, season: Season) -> bool {
        self.seasons.contains(&season)
    }

    /// Whether a region key is listed as suitable (case-insensitive)
    pub fn suits_region(&self, region_key: &str) -> bool {
        self.suitable_regions
            .iter()
            .any(|r| r.eq_ignore_ascii_case(region_key))
    }
}

/// All crop profiles, loaded once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CropDatabase {
    crops: Vec<CropProfile>,
}

impl CropDatabase {
    /// Look up a crop by name, case-insensitive
    pub fn get(&self, name: &str) -> Option<&CropProfile> {
        let name = name.trim();
        self.crops.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// All crops in fixed enumeration order
    pub fn iter(&self) -> impl Iterator<Item = &CropProfile> {
        self.crops.iter()
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

impl Default for CropDatabase {
    fn default() -> Self {
        let strs = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Self {
            crops: vec![
                CropProfile {
                    name: "Rice".to_string(),
                    scientific_name: "Oryza sativa".to_string(),
                    seasons: vec![Season::Kharif],
                    water_need: WaterNeed::High,
                    temperature_range: (20.0, 35.0),
                    soil_ph_range: (5.5, 7.0),
                    nutrients: NutrientNeeds {
                        nitrogen: NutrientLevel::High,
                        phosphorus: NutrientLevel::Medium,
                        potassium: NutrientLevel::High,
                    },
                    major_pests: strs(&["stem_borer", "leaf_folder", "brown_plant_hopper"]),
                    major_diseases: strs(&["blast", "bacterial_leaf_blight", "sheath_blight"]),
                    suitable_regions: strs(&[
                        "west_bengal",
                        "uttar_pradesh",
                        "punjab",
                        "odisha",
                        "bihar",
                    ]),
                },
                CropProfile {
                    name: "Wheat".to_string(),
                    scientific_name: "Triticum aestivum".to_string(),
                    seasons: vec![Season::Rabi],
                    water_need: WaterNeed::Medium,
                    temperature_range: (10.0, 25.0),
                    soil_ph_range: (6.0, 7.5),
                    nutrients: NutrientNeeds {
                        nitrogen: NutrientLevel::High,
                        phosphorus: NutrientLevel::Medium,
                        potassium: NutrientLevel::Medium,
                    },
                    major_pests: strs(&["aphids", "termites", "armyworm"]),
                    major_diseases: strs(&["rust", "loose_smut", "karnal_bunt"]),
                    suitable_regions: strs(&[
                        "uttar_pradesh",
                        "punjab",
                        "haryana",
                        "madhya_pradesh",
                    ]),
                },
                CropProfile {
                    name: "Maize".to_string(),
                    scientific_name: "Zea mays".to_string(),
                    seasons: vec![Season::Kharif, Season::Rabi],
                    water_need: WaterNeed::Medium,
                    temperature_range: (15.0, 30.0),
                    soil_ph_range: (5.5, 7.5),
                    nutrients: NutrientNeeds {
                        nitrogen: NutrientLevel::High,
                        phosphorus: NutrientLevel::High,
                        potassium: NutrientLevel::Medium,
                    },
                    major_pests: strs(&["fall_armyworm", "stem_borer", "aphids"]),
                    major_diseases: strs(&["turcicum_leaf_blight", "maize_streak", "common_rust"]),
                    suitable_regions: strs(&[
                        "karnataka",
                        "andhra_pradesh",
                        "maharashtra",
                        "bihar",
                    ]),
                },
                CropProfile {
                    name: "Cotton".to_string(),
                    scientific_name: "Gossypium hirsutum".to_string(),
                    seasons: vec![Season::Kharif],
                    water_need: WaterNeed::Medium,
                    temperature_range: (20.0, 35.0),
                    soil_ph_range: (5.5, 7.5),
                    nutrients: NutrientNeeds {
                        nitrogen: NutrientLevel::Medium,
                        phosphorus: NutrientLevel::High,
                        potassium: NutrientLevel::High,
                    },
                    major_pests: strs(&["bollworm", "aphids", "whitefly"]),
                    major_diseases: strs(&["boll_rot", "alternaria_leaf_spot", "bacterial_blight"]),
                    suitable_regions: strs(&[
                        "gujarat",
                        "maharashtra",
                        "telangana",
                        "andhra_pradesh",
                    ]),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let db = CropDatabase::default();
        assert!(db.get("rice").is_some());
        assert!(db.get("RICE").is_some());
        assert!(db.get(" Wheat ").is_some());
        assert!(db.get("quinoa").is_none());
    }

    #[test]
    fn test_seasons() {
        let db = CropDatabase::default();
        let wheat = db.get("wheat").unwrap();
        assert!(wheat.grows_in(Season::Rabi));
        assert!(!wheat.grows_in(Season::Kharif));

        let maize = db.get("maize").unwrap();
        assert!(maize.grows_in(Season::Kharif));
        assert!(maize.grows_in(Season::Rabi));
    }

    #[test]
    fn test_enumeration_order_is_fixed() {
        let db = CropDatabase::default();
        let names: Vec<&str> = db.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Rice", "Wheat", "Maize", "Cotton"]);
    }
}
