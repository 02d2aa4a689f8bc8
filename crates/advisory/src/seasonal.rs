//! Seasonal crop advisory
//!
//! Assembles the full per-crop advisory for the current season, or
//! short-circuits when the crop is out of season. All text comes from the
//! static calendar and treatment tables with generic fallbacks, so assembly
//! never fails.

use serde::Serialize;

use agri_advisor_config::treatments::display_name;
use agri_advisor_config::{CropCalendar, CropDatabase, CropProfile, NutrientNeeds, TreatmentBook, WaterNeed};
use agri_advisor_core::Season;

/// Pest warning entry in an advisory
#[derive(Debug, Clone, Serialize)]
pub struct PestWarning {
    /// Display name, e.g. "Stem Borer"
    pub pest: String,
    pub symptoms: String,
    pub treatment: String,
}

/// Disease warning entry in an advisory
#[derive(Debug, Clone, Serialize)]
pub struct DiseaseWarning {
    pub disease: String,
    pub symptoms: String,
    pub treatment: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WaterRequirements {
    pub level: WaterNeed,
    pub irrigation_schedule: String,
}

/// Full advisory for a crop that is in season
#[derive(Debug, Clone, Serialize)]
pub struct CropAdvisoryReport {
    pub crop: String,
    pub scientific_name: String,
    pub current_season: Season,
    pub sowing_time: String,
    pub nutrient_requirements: NutrientNeeds,
    pub water_requirements: WaterRequirements,
    pub pest_warnings: Vec<PestWarning>,
    pub disease_warnings: Vec<DiseaseWarning>,
    pub harvest_time: String,
}

/// Result of an advisory request, always data, never an error
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AdvisoryOutcome {
    /// The requested crop is not in the database
    CropNotFound { error: String },
    /// The crop cannot be sown in the current season
    OffSeason {
        crop: String,
        advisory: String,
        suitable_seasons: Vec<Season>,
    },
    Full(CropAdvisoryReport),
}

/// Irrigation guidance per water-need tier
fn irrigation_schedule(water_need: WaterNeed) -> &'static str {
    match water_need {
        WaterNeed::High => "Irrigate every 3-4 days during dry spells",
        WaterNeed::Medium => "Irrigate every 7-10 days during dry spells",
        WaterNeed::Low => "Irrigate only when necessary",
    }
}

fn pest_warnings(crop: &CropProfile, treatments: &TreatmentBook) -> Vec<PestWarning> {
    crop.major_pests
        .iter()
        .map(|key| PestWarning {
            pest: display_name(key),
            symptoms: treatments.pest_symptoms(key).to_string(),
            treatment: treatments.pest_treatment(key).to_string(),
        })
        .collect()
}

fn disease_warnings(crop: &CropProfile, treatments: &TreatmentBook) -> Vec<DiseaseWarning> {
    crop.major_diseases
        .iter()
        .map(|key| DiseaseWarning {
            disease: display_name(key),
            symptoms: treatments.disease_symptoms(key).to_string(),
            treatment: treatments.disease_treatment(key).to_string(),
        })
        .collect()
}

/// Build the advisory for a crop in the given season
pub fn advise(
    crops: &CropDatabase,
    treatments: &TreatmentBook,
    calendar: &CropCalendar,
    crop_name: &str,
    season: Season,
) -> AdvisoryOutcome {
    let Some(crop) = crops.get(crop_name) else {
        tracing::debug!(crop = crop_name, "Advisory requested for unknown crop");
        return AdvisoryOutcome::CropNotFound {
            error: "Crop not found".to_string(),
        };
    };

    if !crop.grows_in(season) {
        return AdvisoryOutcome::OffSeason {
            crop: crop.name.clone(),
            advisory: format!("{} is not suitable for {} season.", crop.name, season),
            suitable_seasons: crop.seasons.clone(),
        };
    }

    AdvisoryOutcome::Full(CropAdvisoryReport {
        crop: crop.name.clone(),
        scientific_name: crop.scientific_name.clone(),
        current_season: season,
        sowing_time: calendar.sowing_time(&crop.name, season).to_string(),
        nutrient_requirements: crop.nutrients.clone(),
        water_requirements: WaterRequirements {
            level: crop.water_need,
            irrigation_schedule: irrigation_schedule(crop.water_need).to_string(),
        },
        pest_warnings: pest_warnings(crop, treatments),
        disease_warnings: disease_warnings(crop, treatments),
        harvest_time: calendar.harvest_time(&crop.name, season).to_string(),
    })
}
