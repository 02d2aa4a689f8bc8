//! Response composition
//!
//! Fills the (intent, language) template with extracted entities and
//! caller-supplied context. Placeholder resolution is total: every `{name}`
//! either resolves to a value or to a documented literal fallback, so
//! composition can never fail on missing data. An attached image analysis
//! bypasses the intent path entirely.

use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

use agri_advisor_config::{treatments, Lexicon, TreatmentBook};
use agri_advisor_core::{
    DetectionKind, Entities, ImageAnalysis, Intent, Language, MarketSnapshot, SoilSnapshot,
    UserProfile, WeatherSnapshot,
};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([a-z_]+)\}").unwrap());

/// Caller-supplied context for one chat turn
///
/// Everything here is already-resolved data from external collaborators;
/// the composer performs no I/O.
#[derive(Debug, Clone, Default)]
pub struct ChatContext {
    pub profile: UserProfile,
    /// Fertilizer recommendation text from the agronomic service
    pub fertilizer_recommendation: Option<String>,
    /// Treatment text for the extracted pest
    pub pest_treatment: Option<String>,
    pub weather: Option<WeatherSnapshot>,
    pub market: Option<MarketSnapshot>,
    pub soil: Option<SoilSnapshot>,
    /// When present, overrides the text-derived response entirely
    pub image_analysis: Option<ImageAnalysis>,
}

/// Template-filling response composer
#[derive(Clone)]
pub struct ResponseComposer {
    lexicon: Arc<Lexicon>,
    treatments: Arc<TreatmentBook>,
    /// Confidence gate for assertive image diagnoses
    confidence_threshold: f64,
}

impl ResponseComposer {
    pub fn new(
        lexicon: Arc<Lexicon>,
        treatments: Arc<TreatmentBook>,
        confidence_threshold: f64,
    ) -> Self {
        Self {
            lexicon,
            treatments,
            confidence_threshold,
        }
    }

    /// Compose the response for one chat turn
    pub fn compose(
        &self,
        intent: Option<Intent>,
        entities: &Entities,
        language: Language,
        context: &ChatContext,
    ) -> String {
        // Image analysis overrides the text path.
        if let Some(analysis) = &context.image_analysis {
            return self.compose_image_response(analysis, language);
        }

        let Some(intent) = intent else {
            return self.lexicon.help(language).to_string();
        };

        let Some(template) = self.lexicon.template(intent, language) else {
            // Misconfigured override without an English row; degrade to help.
            tracing::warn!(%intent, "No template configured, falling back to help text");
            return self.lexicon.help(language).to_string();
        };

        fill(template, |name| self.resolve(intent, name, entities, context))
    }

    /// Resolve one placeholder for an intent; `None` means use the fallback
    fn resolve(
        &self,
        intent: Intent,
        name: &str,
        entities: &Entities,
        context: &ChatContext,
    ) -> Option<String> {
        match intent {
            Intent::Fertilizer => match name {
                "recommendation" => context.fertilizer_recommendation.clone(),
                _ => None,
            },
            Intent::Pest => match name {
                "pest_name" => entities.pest().map(str::to_string),
                "treatment" => context.pest_treatment.clone().or_else(|| {
                    entities
                        .pest()
                        .map(|pest| self.treatments.pest_treatment(pest).to_string())
                }),
                _ => None,
            },
            Intent::Weather => match name {
                "location" => context.profile.location.clone(),
                "condition" => context.weather.as_ref().map(|w| w.condition.clone()),
                "temp" => context
                    .weather
                    .as_ref()
                    .map(|w| format_number(w.temperature_c)),
                _ => None,
            },
            Intent::Market => match name {
                "crop" => entities.crop().map(str::to_string),
                "price" => context.market.as_ref().map(|m| format_number(m.price)),
                "mandi" => context.market.as_ref().map(|m| m.mandi.clone()),
                _ => None,
            },
            Intent::Soil => {
                let soil = context.soil.as_ref()?;
                match name {
                    "nitrogen_level" => Some(soil.nitrogen.clone()),
                    "phosphorus_level" => Some(soil.phosphorus.clone()),
                    "potassium_level" => Some(soil.potassium.clone()),
                    "ph_level" => Some(format_number(soil.ph)),
                    _ => None,
                }
            }
        }
    }

    /// Compose the confidence-gated image response
    fn compose_image_response(&self, analysis: &ImageAnalysis, language: Language) -> String {
        if analysis.kind == DetectionKind::Healthy {
            return self.lexicon.image_healthy(language).to_string();
        }

        let label = if analysis.label.is_empty() {
            match analysis.kind {
                DetectionKind::Pest => "a pest".to_string(),
                _ => "a disease".to_string(),
            }
        } else {
            analysis.label.clone()
        };

        if analysis.confidence > self.confidence_threshold {
            let treatment = self.treatments.treatment_for_label(&label).to_string();
            fill(self.lexicon.image_confident(language), |name| match name {
                "label" => Some(label.clone()),
                "treatment" => Some(treatment.clone()),
                _ => None,
            })
        } else {
            fill(self.lexicon.image_uncertain(language), |name| match name {
                "label" => Some(label.clone()),
                _ => None,
            })
        }
    }
}

/// Substitute `{name}` placeholders, applying fallbacks for unresolved ones
fn fill(template: &str, resolve: impl Fn(&str) -> Option<String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let name = &caps[1];
            resolve(name).unwrap_or_else(|| fallback_value(name).to_string())
        })
        .into_owned()
}

/// Documented literal fallbacks for unresolved placeholders
fn fallback_value(name: &str) -> &'static str {
    match name {
        "crop" => "crop",
        "pest_name" | "label" => "unknown pest",
        "location" => "your area",
        "mandi" => "the local mandi",
        "condition" => "clear",
        "temp" => "30",
        "price" => "2100",
        "recommendation" => "Please specify the crop for a fertilizer recommendation.",
        "treatment" => treatments::GENERIC_TREATMENT,
        "nitrogen_level" | "phosphorus_level" | "potassium_level" | "ph_level" => "unknown",
        _ => "unknown",
    }
}

/// Render a number without a trailing ".0" for whole values
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agri_advisor_config::DomainTables;
    use agri_advisor_core::intent::EntityKind;
    use chrono::Utc;

    fn composer() -> ResponseComposer {
        let tables = DomainTables::builtin();
        ResponseComposer::new(Arc::new(tables.lexicon), Arc::new(tables.treatments), 0.8)
    }

    fn wheat_entities() -> Entities {
        let mut entities = Entities::new();
        entities.insert(EntityKind::Crop, "wheat");
        entities
    }

    #[test]
    fn test_fertilizer_response_contains_recommendation() {
        let c = composer();
        let context = ChatContext {
            fertilizer_recommendation: Some(
                "For wheat, a balanced NPK fertilizer is generally recommended.".to_string(),
            ),
            ..Default::default()
        };
        let response = c.compose(
            Some(Intent::Fertilizer),
            &wheat_entities(),
            Language::English,
            &context,
        );
        assert!(response.contains("wheat"));
        assert!(response.starts_with("Based on your crop and soil"));
    }

    #[test]
    fn test_no_intent_yields_help_text() {
        let c = composer();
        let response = c.compose(None, &Entities::new(), Language::English, &ChatContext::default());
        assert!(response.contains("crop selection"));

        let hindi = c.compose(None, &Entities::new(), Language::Hindi, &ChatContext::default());
        assert!(hindi.contains("फसल"));
    }

    #[test]
    fn test_missing_entities_use_fallback_strings_never_fail() {
        let c = composer();
        let empty = Entities::new();
        let context = ChatContext::default();

        for intent in Intent::ALL {
            for language in Language::ALL {
                let response = c.compose(Some(intent), &empty, language, &context);
                assert!(!response.is_empty(), "empty response for {intent}/{language}");
                assert!(
                    !response.contains('{'),
                    "unfilled placeholder for {intent}/{language}: {response}"
                );
            }
        }

        // Pest with nothing extracted names the documented fallback.
        let response = c.compose(Some(Intent::Pest), &empty, Language::English, &context);
        assert!(response.contains("unknown pest"));
    }

    #[test]
    fn test_weather_response_uses_snapshot_and_profile() {
        let c = composer();
        let context = ChatContext {
            profile: UserProfile::new("punjab", Language::English),
            weather: Some(WeatherSnapshot {
                condition: "sunny".to_string(),
                temperature_c: 32.0,
                humidity: None,
                wind_speed: None,
                precipitation: None,
                timestamp: Utc::now(),
            }),
            ..Default::default()
        };
        let response = c.compose(Some(Intent::Weather), &Entities::new(), Language::English, &context);
        assert_eq!(response, "The weather in punjab is sunny with a temperature of 32°C.");
    }

    #[test]
    fn test_market_response() {
        let c = composer();
        let context = ChatContext {
            market: Some(MarketSnapshot {
                crop: "wheat".to_string(),
                mandi: "Delhi Mandi".to_string(),
                price: 2100.0,
                unit: "quintal".to_string(),
            }),
            ..Default::default()
        };
        let response = c.compose(Some(Intent::Market), &wheat_entities(), Language::English, &context);
        assert!(response.contains("wheat"));
        assert!(response.contains("2100"));
        assert!(response.contains("Delhi Mandi"));
    }

    #[test]
    fn test_confident_image_detection_gets_assertive_diagnosis() {
        let c = composer();
        let context = ChatContext {
            image_analysis: Some(ImageAnalysis::pest("bollworm", 0.92)),
            ..Default::default()
        };
        // Intent and entities are bypassed entirely.
        let response = c.compose(Some(Intent::Weather), &wheat_entities(), Language::English, &context);
        assert!(response.contains("bollworm"));
        assert!(response.contains("high confidence"));
        assert!(response.contains("spinosad"));
    }

    #[test]
    fn test_low_confidence_image_detection_hedges() {
        let c = composer();
        let context = ChatContext {
            image_analysis: Some(ImageAnalysis::disease("blast", 0.55)),
            ..Default::default()
        };
        let response = c.compose(None, &Entities::new(), Language::English, &context);
        assert!(response.contains("blast"));
        assert!(response.contains("clearer image"));
    }

    #[test]
    fn test_threshold_is_strictly_greater_than() {
        let c = composer();
        let context = ChatContext {
            image_analysis: Some(ImageAnalysis::pest("aphids", 0.8)),
            ..Default::default()
        };
        // Exactly at the threshold is not confident.
        let response = c.compose(None, &Entities::new(), Language::English, &context);
        assert!(response.contains("clearer image"));
    }

    #[test]
    fn test_healthy_image_reassures() {
        let c = composer();
        let context = ChatContext {
            image_analysis: Some(ImageAnalysis::healthy(0.9)),
            ..Default::default()
        };
        let response = c.compose(None, &Entities::new(), Language::English, &context);
        assert!(response.contains("healthy"));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(32.0), "32");
        assert_eq!(format_number(6.8), "6.8");
        assert_eq!(format_number(2100.0), "2100");
    }
}
