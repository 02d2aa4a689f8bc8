//! Entity extraction
//!
//! Vocabulary scan in fixed order: for the matched intent's entity kind the
//! per-language vocabulary is walked front to back and the first term found
//! as a substring of the lowercased message wins. No match leaves the map
//! empty; the composer substitutes fallback text instead.

use std::sync::Arc;

use agri_advisor_config::Lexicon;
use agri_advisor_core::{Entities, Intent, Language};

/// Vocabulary-based entity extractor
#[derive(Clone)]
pub struct EntityExtractor {
    lexicon: Arc<Lexicon>,
}

impl EntityExtractor {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Extract entities for a detected intent
    pub fn extract(&self, intent: Intent, message: &str, language: Language) -> Entities {
        let mut entities = Entities::new();

        let Some(kind) = intent.entity_kind() else {
            return entities;
        };

        let message = message.to_lowercase();
        for term in self.lexicon.vocabulary(kind, language) {
            if message.contains(term.as_str()) {
                entities.insert(kind, term.clone());
                break;
            }
        }

        entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agri_advisor_config::DomainTables;

    fn extractor() -> EntityExtractor {
        EntityExtractor::new(Arc::new(DomainTables::builtin().lexicon))
    }

    #[test]
    fn test_crop_extraction_for_fertilizer() {
        let e = extractor();
        let entities = e.extract(
            Intent::Fertilizer,
            "What fertilizer should I use for wheat?",
            Language::English,
        );
        assert_eq!(entities.crop(), Some("wheat"));
    }

    #[test]
    fn test_crop_extraction_for_market() {
        let e = extractor();
        let entities = e.extract(Intent::Market, "price of COTTON today", Language::English);
        assert_eq!(entities.crop(), Some("cotton"));
    }

    #[test]
    fn test_pest_extraction() {
        let e = extractor();
        let entities = e.extract(
            Intent::Pest,
            "my field has a bollworm infestation",
            Language::English,
        );
        assert_eq!(entities.pest(), Some("bollworm"));
    }

    #[test]
    fn test_first_vocabulary_match_wins() {
        let e = extractor();
        // Both wheat and rice appear; wheat comes first in the vocabulary.
        let entities = e.extract(
            Intent::Fertilizer,
            "should I grow rice or wheat",
            Language::English,
        );
        assert_eq!(entities.crop(), Some("wheat"));
    }

    #[test]
    fn test_hindi_vocabulary() {
        let e = extractor();
        let entities = e.extract(Intent::Market, "गेहूं की कीमत बताओ", Language::Hindi);
        assert_eq!(entities.crop(), Some("गेहूं"));
    }

    #[test]
    fn test_no_match_leaves_map_empty() {
        let e = extractor();
        let entities = e.extract(Intent::Pest, "something is eating my field", Language::English);
        assert!(entities.is_empty());
    }

    #[test]
    fn test_weather_and_soil_carry_no_entities() {
        let e = extractor();
        assert!(e
            .extract(Intent::Weather, "rain on wheat fields", Language::English)
            .is_empty());
        assert!(e
            .extract(Intent::Soil, "wheat soil health", Language::English)
            .is_empty());
    }
}
