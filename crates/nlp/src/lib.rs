//! Chat language processing
//!
//! A thin rule engine, not an ML pipeline: keyword counting for intent
//! detection, vocabulary scanning for entities, and placeholder templating
//! for responses. All of it is pure computation over the immutable lexicon;
//! collaborator data (weather, prices, treatments) arrives pre-fetched in
//! the composer context.
//!
//! ```
//! use std::sync::Arc;
//! use agri_advisor_config::DomainTables;
//! use agri_advisor_core::Language;
//! use agri_advisor_nlp::ChatEngine;
//!
//! let engine = ChatEngine::new(DomainTables::builtin().into_shared(), 0.8);
//! let processed = engine.process("What fertilizer should I use for wheat?", Language::English);
//! assert_eq!(processed.intent.map(|i| i.as_str()), Some("fertilizer"));
//! assert_eq!(processed.entities.crop(), Some("wheat"));
//! ```

pub mod classifier;
pub mod composer;
pub mod extractor;
pub mod pipeline;

pub use classifier::IntentClassifier;
pub use composer::{ChatContext, ResponseComposer};
pub use extractor::EntityExtractor;
pub use pipeline::{ChatEngine, ProcessedMessage};
