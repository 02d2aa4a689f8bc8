//! Agronomic advisory
//!
//! Crop recommendations from suitability scoring, and per-crop seasonal
//! advisories assembled from the static domain tables. Pure lookup and
//! arithmetic over the read-only tables; no I/O.

pub mod seasonal;
pub mod suitability;

use std::sync::Arc;

use chrono::{Datelike, Utc};

use agri_advisor_config::DomainTables;
use agri_advisor_core::Season;

pub use seasonal::{AdvisoryOutcome, CropAdvisoryReport, DiseaseWarning, PestWarning};
pub use suitability::{score, CropRecommendation, RecommendationReport, KNOWN_SOIL_TYPES};

/// Soil type assumed when the caller has no farm profile
pub const DEFAULT_SOIL_TYPE: &str = "alluvial";

/// Advisory service over the shared domain tables
#[derive(Clone)]
pub struct AdvisoryService {
    tables: Arc<DomainTables>,
}

impl AdvisoryService {
    pub fn new(tables: Arc<DomainTables>) -> Self {
        Self { tables }
    }

    /// Top crop recommendations for a location and soil type
    pub fn recommendations(
        &self,
        location: Option<&str>,
        soil_type: Option<&str>,
    ) -> RecommendationReport {
        let location = location.unwrap_or(agri_advisor_config::regions::DEFAULT_REGION);
        let soil_type = soil_type.unwrap_or(DEFAULT_SOIL_TYPE);
        suitability::recommend(&self.tables.crops, &self.tables.regions, location, soil_type)
    }

    /// Seasonal advisory for a named crop, using the current calendar month
    pub fn crop_advisory(&self, crop_name: &str) -> AdvisoryOutcome {
        self.crop_advisory_for_month(crop_name, Utc::now().month())
    }

    /// Seasonal advisory pinned to a specific month, for deterministic callers
    pub fn crop_advisory_for_month(&self, crop_name: &str, month: u32) -> AdvisoryOutcome {
        seasonal::advise(
            &self.tables.crops,
            &self.tables.treatments,
            &self.tables.calendar,
            crop_name,
            Season::from_month(month),
        )
    }

    /// Fertilizer guidance for an optionally-known crop
    ///
    /// Placeholder agronomy: a real recommendation would come from soil test
    /// results. The no-crop text doubles as the composer fallback.
    pub fn fertilizer_recommendation(&self, crop: Option<&str>) -> String {
        match crop {
            Some(crop) => format!(
                "For {crop}, a balanced NPK fertilizer is generally recommended. \
                 Specific recommendations depend on soil test results."
            ),
            None => "Please specify the crop for a fertilizer recommendation.".to_string(),
        }
    }

    /// Treatment text for an extracted pest name
    pub fn pest_treatment(&self, pest: &str) -> String {
        self.tables.treatments.pest_treatment(pest).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AdvisoryService {
        AdvisoryService::new(DomainTables::builtin().into_shared())
    }

    #[test]
    fn test_defaults_apply_when_profile_is_missing() {
        let report = service().recommendations(None, None);
        assert_eq!(report.region, "Bihar");
        assert_eq!(report.soil_type, "alluvial");
        assert!(!report.recommended_crops.is_empty());
    }

    #[test]
    fn test_fertilizer_recommendation_names_the_crop() {
        let s = service();
        assert!(s.fertilizer_recommendation(Some("wheat")).contains("wheat"));
        assert!(s
            .fertilizer_recommendation(None)
            .contains("specify the crop"));
    }
}
