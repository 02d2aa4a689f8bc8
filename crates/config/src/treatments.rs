//! Pest and disease treatment book
//!
//! Fixed symptom and treatment text keyed by pest/disease identifier.
//! Unknown keys fall back to generic consult-your-extension-office advice
//! instead of erroring.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fallback treatment for keys not in the book
pub const GENERIC_TREATMENT: &str = "Consult local agricultural extension office";
/// Fallback symptom text for unknown pests
pub const GENERIC_PEST_SYMPTOMS: &str = "Visible damage to plants";
/// Fallback symptom text for unknown diseases
pub const GENERIC_DISEASE_SYMPTOMS: &str = "Visible disease symptoms";

/// Symptom and treatment lookup tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentBook {
    #[serde(default)]
    pub pest_symptoms: HashMap<String, String>,
    #[serde(default)]
    pub pest_treatments: HashMap<String, String>,
    #[serde(default)]
    pub disease_symptoms: HashMap<String, String>,
    #[serde(default)]
    pub disease_treatments: HashMap<String, String>,
}

impl TreatmentBook {
    pub fn pest_symptoms(&self, pest: &str) -> &str {
        lookup(&self.pest_symptoms, pest, GENERIC_PEST_SYMPTOMS)
    }

    pub fn pest_treatment(&self, pest: &str) -> &str {
        lookup(&self.pest_treatments, pest, GENERIC_TREATMENT)
    }

    pub fn disease_symptoms(&self, disease: &str) -> &str {
        lookup(&self.disease_symptoms, disease, GENERIC_DISEASE_SYMPTOMS)
    }

    pub fn disease_treatment(&self, disease: &str) -> &str {
        lookup(&self.disease_treatments, disease, GENERIC_TREATMENT)
    }

    /// Treatment for a label of unknown kind (image path reports pests and
    /// diseases through the same channel). Pests are checked first.
    pub fn treatment_for_label(&self, label: &str) -> &str {
        let key = normalize_key(label);
        self.pest_treatments
            .get(&key)
            .or_else(|| self.disease_treatments.get(&key))
            .map(String::as_str)
            .unwrap_or(GENERIC_TREATMENT)
    }
}

/// Turn a display label into a table key: "Stem Borer" -> "stem_borer"
pub fn normalize_key(label: &str) -> String {
    label.trim().to_lowercase().replace(' ', "_")
}

/// Turn a table key into a display label: "stem_borer" -> "Stem Borer"
pub fn display_name(key: &str) -> String {
    key.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn lookup<'a>(table: &'a HashMap<String, String>, key: &str, fallback: &'a str) -> &'a str {
    table
        .get(&normalize_key(key))
        .map(String::as_str)
        .unwrap_or(fallback)
}

fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl Default for TreatmentBook {
    fn default() -> Self {
        Self {
            pest_symptoms: table(&[
                ("stem_borer", "Dead hearts in young plants, white ears in older plants"),
                ("leaf_folder", "Leaves folded and whitish patches"),
                ("brown_plant_hopper", "Yellowing and drying of plants"),
                ("aphids", "Yellowing and curling of leaves"),
                ("termites", "Dead seedlings and damaged roots"),
                ("armyworm", "Irregular holes in leaves and stems"),
                ("fall_armyworm", "Greasy appearance and skeletonized leaves"),
                ("bollworm", "Flower buds and bolls damaged"),
                ("whitefly", "Yellowing of leaves and sooty mold"),
            ]),
            pest_treatments: table(&[
                ("stem_borer", "Apply cartap hydrochloride or fipronil granules"),
                ("leaf_folder", "Spray cartap hydrochloride or chlorpyriphos"),
                ("brown_plant_hopper", "Spray buprofezin or acephate"),
                ("aphids", "Spray dimethoate or imidacloprid"),
                ("termites", "Apply chlorpyriphos in soil"),
                ("armyworm", "Spray spinosad or emamectin benzoate"),
                ("fall_armyworm", "Spray spinosad or indoxacarb"),
                ("bollworm", "Spray spinosad or emamectin benzoate"),
                ("whitefly", "Spray imidacloprid or thiamethoxam"),
            ]),
            disease_symptoms: table(&[
                ("blast", "Diamond-shaped lesions on leaves, neck rot"),
                ("bacterial_leaf_blight", "Water-soaked lesions turning yellow"),
                ("sheath_blight", "Oval lesions on sheaths, rotting"),
                ("rust", "Reddish-brown pustules on leaves"),
                ("loose_smut", "Black powdery mass in grains"),
                ("karnal_bunt", "Black powdery mass with fishy odor"),
                ("turcicum_leaf_blight", "Elliptical grayish-green lesions"),
                ("maize_streak", "Chlorotic streaks on leaves"),
                ("common_rust", "Reddish-brown pustules on leaves"),
                ("boll_rot", "Water-soaked lesions on bolls"),
                ("alternaria_leaf_spot", "Brown spots with concentric rings"),
                ("bacterial_blight", "Water-soaked lesions with yellow halo"),
            ]),
            disease_treatments: table(&[
                ("blast", "Spray tricyclazole or carbendazim"),
                ("bacterial_leaf_blight", "Spray streptocycline or validamycin"),
                ("sheath_blight", "Spray validamycin or kasugamycin"),
                ("rust", "Spray propiconazole or tebuconazole"),
                ("loose_smut", "Treat seeds with carboxin or thiram"),
                ("karnal_bunt", "Treat seeds with carboxin or thiram"),
                ("turcicum_leaf_blight", "Spray mancozeb or azoxystrobin"),
                ("maize_streak", "Remove infected plants, control leafhoppers"),
                ("common_rust", "Spray mancozeb or propiconazole"),
                ("boll_rot", "Spray carbendazim or thiophanate-methyl"),
                ("alternaria_leaf_spot", "Spray mancozeb or copper oxychloride"),
                ("bacterial_blight", "Spray streptocycline or validamycin"),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_pest_lookup() {
        let book = TreatmentBook::default();
        assert!(book.pest_treatment("aphids").contains("imidacloprid"));
        assert!(book.pest_symptoms("bollworm").contains("bolls"));
    }

    #[test]
    fn test_unknown_keys_fall_back_to_generic_advice() {
        let book = TreatmentBook::default();
        assert_eq!(book.pest_treatment("locust"), GENERIC_TREATMENT);
        assert_eq!(book.pest_symptoms("locust"), GENERIC_PEST_SYMPTOMS);
        assert_eq!(book.disease_treatment("wilt"), GENERIC_TREATMENT);
    }

    #[test]
    fn test_label_lookup_normalizes_display_names() {
        let book = TreatmentBook::default();
        assert!(book.treatment_for_label("Stem Borer").contains("cartap"));
        assert!(book.treatment_for_label("blast").contains("tricyclazole"));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("brown_plant_hopper"), "Brown Plant Hopper");
        assert_eq!(display_name("rust"), "Rust");
    }
}
