//! Chat processing pipeline
//!
//! Ties classification, extraction, and composition into a single engine.
//! `process` is the analysis half (intent + entities, no I/O); `respond`
//! closes the loop once the caller has gathered collaborator data into a
//! [`ChatContext`].

use std::sync::Arc;

use agri_advisor_config::DomainTables;
use agri_advisor_core::{Entities, Intent, Language};

use crate::composer::{ChatContext, ResponseComposer};
use crate::{EntityExtractor, IntentClassifier};

/// Analysis result for one message
#[derive(Debug, Clone)]
pub struct ProcessedMessage {
    pub intent: Option<Intent>,
    pub entities: Entities,
    pub language: Language,
}

/// Rule-based chat engine over the domain tables
#[derive(Clone)]
pub struct ChatEngine {
    classifier: IntentClassifier,
    extractor: EntityExtractor,
    composer: ResponseComposer,
}

impl ChatEngine {
    pub fn new(tables: Arc<DomainTables>, confidence_threshold: f64) -> Self {
        let lexicon = Arc::new(tables.lexicon.clone());
        let treatments = Arc::new(tables.treatments.clone());
        Self {
            classifier: IntentClassifier::new(lexicon.clone()),
            extractor: EntityExtractor::new(lexicon.clone()),
            composer: ResponseComposer::new(lexicon, treatments, confidence_threshold),
        }
    }

    /// Classify the message and extract its entities
    pub fn process(&self, message: &str, language: Language) -> ProcessedMessage {
        let intent = self.classifier.classify(message, language);
        let entities = match intent {
            Some(intent) => self.extractor.extract(intent, message, language),
            None => Entities::new(),
        };
        tracing::debug!(
            intent = intent.map(|i| i.as_str()).unwrap_or("none"),
            entities = entities.len(),
            %language,
            "Processed chat message"
        );
        ProcessedMessage {
            intent,
            entities,
            language,
        }
    }

    /// Compose a response for an already-processed message
    pub fn respond(&self, processed: &ProcessedMessage, context: &ChatContext) -> String {
        self.composer.compose(
            processed.intent,
            &processed.entities,
            processed.language,
            context,
        )
    }

    /// Process and respond in one step
    pub fn reply(&self, message: &str, language: Language, context: &ChatContext) -> String {
        let processed = self.process(message, language);
        self.respond(&processed, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ChatEngine {
        ChatEngine::new(DomainTables::builtin().into_shared(), 0.8)
    }

    #[test]
    fn test_process_detects_intent_and_entities() {
        let processed = engine().process("Which pesticide works against bollworm?", Language::English);
        assert_eq!(processed.intent, Some(Intent::Pest));
        assert_eq!(processed.entities.pest(), Some("bollworm"));
    }

    #[test]
    fn test_process_without_intent_has_no_entities() {
        let processed = engine().process("hello there", Language::English);
        assert_eq!(processed.intent, None);
        assert!(processed.entities.is_empty());
    }

    #[test]
    fn test_reply_falls_back_to_help() {
        let reply = engine().reply("hello there", Language::English, &ChatContext::default());
        assert!(reply.contains("crop selection"));
    }

    #[test]
    fn test_reply_with_pest_treatment_lookup() {
        let reply = engine().reply(
            "There is a bollworm infestation in my field",
            Language::English,
            &ChatContext::default(),
        );
        assert!(reply.contains("bollworm"));
        assert!(reply.contains("spinosad"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english_tables() {
        let processed = engine().process("fertilizer for rice", Language::from_code("xx"));
        assert_eq!(processed.intent, Some(Intent::Fertilizer));
        assert_eq!(processed.entities.crop(), Some("rice"));
    }
}
