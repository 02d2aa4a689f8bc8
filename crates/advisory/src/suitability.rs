//! Crop suitability scoring
//!
//! Three independent checks with fixed weights, summing to at most 1.0.
//! There is no partial credit: each check either contributes its full
//! weight or nothing.

use serde::Serialize;

use agri_advisor_config::{regions::normalize_location, CropDatabase, CropProfile, RegionDatabase, RegionProfile};
use agri_advisor_core::Season;

/// Soil types that earn the soil weight
pub const KNOWN_SOIL_TYPES: [&str; 5] = [
    "alluvial",
    "red_loamy",
    "clay_loam",
    "sandy_loam",
    "black_cotton",
];

const SOIL_WEIGHT: f64 = 0.3;
const CLIMATE_WEIGHT: f64 = 0.3;
const PREDOMINANCE_WEIGHT: f64 = 0.4;

/// Maximum entries in a recommendation list
const TOP_N: usize = 5;

/// Score a crop for a soil/region combination, in [0.0, 1.0]
pub fn score(crop: &CropProfile, soil_type: &str, region: &RegionProfile) -> f64 {
    let mut score = 0.0;

    if KNOWN_SOIL_TYPES.contains(&soil_type) {
        score += SOIL_WEIGHT;
    }
    if region.climate.is_favorable() {
        score += CLIMATE_WEIGHT;
    }
    if region.grows_predominantly(&crop.name) {
        score += PREDOMINANCE_WEIGHT;
    }

    score
}

/// One scored crop in a recommendation list
#[derive(Debug, Clone, Serialize)]
pub struct CropRecommendation {
    pub name: String,
    pub scientific_name: String,
    pub seasons: Vec<Season>,
    pub suitability_score: f64,
}

/// Recommendation listing for a location
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationReport {
    /// Display name of the resolved region
    pub region: String,
    pub soil_type: String,
    /// At most five crops, best first; ties keep crop enumeration order
    pub recommended_crops: Vec<CropRecommendation>,
    pub predominant_crops: Vec<String>,
}

/// Score and rank the crops suitable for a location
///
/// The region profile falls back to the default region when the location is
/// unrecognized, but the crop filter runs against the location key itself,
/// so an unknown location yields an empty list rather than the default
/// region's crops.
pub fn recommend(
    crops: &CropDatabase,
    regions: &RegionDatabase,
    location: &str,
    soil_type: &str,
) -> RecommendationReport {
    let region = regions.resolve(location);
    let location_key = normalize_location(location);

    let mut recommended: Vec<CropRecommendation> = crops
        .iter()
        .filter(|crop| crop.suits_region(&location_key))
        .map(|crop| CropRecommendation {
            name: crop.name.clone(),
            scientific_name: crop.scientific_name.clone(),
            seasons: crop.seasons.clone(),
            suitability_score: score(crop, soil_type, region),
        })
        .collect();

    // sort_by is stable, so equal scores keep enumeration order
    recommended.sort_by(|a, b| {
        b.suitability_score
            .partial_cmp(&a.suitability_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    recommended.truncate(TOP_N);

    tracing::debug!(
        location = %location_key,
        region = %region.name,
        candidates = recommended.len(),
        "Scored crop recommendations"
    );

    RecommendationReport {
        region: region.name.clone(),
        soil_type: soil_type.to_string(),
        recommended_crops: recommended,
        predominant_crops: region.predominant_crops.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agri_advisor_config::DomainTables;

    fn tables() -> DomainTables {
        DomainTables::builtin()
    }

    #[test]
    fn test_full_score_for_predominant_crop_in_favorable_region() {
        let t = tables();
        let wheat = t.crops.get("wheat").unwrap();
        let punjab = t.regions.get("punjab").unwrap();
        assert_eq!(score(wheat, "alluvial", punjab), 1.0);
    }

    #[test]
    fn test_score_is_sum_of_matched_weights_only() {
        let t = tables();
        let wheat = t.crops.get("wheat").unwrap();
        let punjab = t.regions.get("punjab").unwrap();

        // Unknown soil drops only the soil weight.
        assert!((score(wheat, "laterite", punjab) - 0.7).abs() < 1e-9);

        // Maize is not predominant in Punjab.
        let maize = t.crops.get("maize").unwrap();
        assert!((score(maize, "alluvial", punjab) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_score_bounded() {
        let t = tables();
        for crop in t.crops.iter() {
            for region in t.regions.iter() {
                for soil in ["alluvial", "laterite", ""] {
                    let s = score(crop, soil, region);
                    assert!((0.0..=1.0).contains(&s), "score {s} out of bounds");
                }
            }
        }
    }

    #[test]
    fn test_recommend_filters_by_location_and_sorts_descending() {
        let t = tables();
        let report = recommend(&t.crops, &t.regions, "punjab", "alluvial");

        assert_eq!(report.region, "Punjab");
        let names: Vec<&str> = report
            .recommended_crops
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        // Rice and wheat both list punjab; wheat is predominant-first but
        // both score 1.0, so enumeration order (Rice before Wheat) holds.
        assert_eq!(names, ["Rice", "Wheat"]);
        for pair in report.recommended_crops.windows(2) {
            assert!(pair[0].suitability_score >= pair[1].suitability_score);
        }
    }

    #[test]
    fn test_recommend_accepts_display_style_locations() {
        let t = tables();
        let report = recommend(&t.crops, &t.regions, "Uttar Pradesh", "alluvial");
        assert_eq!(report.region, "Uttar Pradesh");
        assert!(report.recommended_crops.iter().any(|c| c.name == "Rice"));
    }

    #[test]
    fn test_unknown_location_gets_default_region_but_no_crops() {
        let t = tables();
        let report = recommend(&t.crops, &t.regions, "atlantis", "alluvial");
        assert_eq!(report.region, "Bihar");
        assert!(report.recommended_crops.is_empty());
    }

    #[test]
    fn test_recommend_never_exceeds_five() {
        let t = tables();
        for region in ["punjab", "bihar", "maharashtra", "gujarat"] {
            let report = recommend(&t.crops, &t.regions, region, "alluvial");
            assert!(report.recommended_crops.len() <= 5);
        }
    }
}
