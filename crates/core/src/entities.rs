//! Per-request entity map
//!
//! Produced fresh by the extractor for every message and discarded after
//! the response is composed. Empty when nothing matched.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::intent::EntityKind;

/// Entities extracted from a single chat message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entities(HashMap<String, String>);

impl Entities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: EntityKind, value: impl Into<String>) {
        self.0.insert(kind.key().to_string(), value.into());
    }

    pub fn get(&self, kind: EntityKind) -> Option<&str> {
        self.0.get(kind.key()).map(|s| s.as_str())
    }

    /// Extracted crop name, if any
    pub fn crop(&self) -> Option<&str> {
        self.get(EntityKind::Crop)
    }

    /// Extracted pest name, if any
    pub fn pest(&self) -> Option<&str> {
        self.get(EntityKind::Pest)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_accessors() {
        let mut entities = Entities::new();
        assert!(entities.is_empty());

        entities.insert(EntityKind::Crop, "wheat");
        assert_eq!(entities.crop(), Some("wheat"));
        assert_eq!(entities.pest(), None);
        assert_eq!(entities.len(), 1);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut entities = Entities::new();
        entities.insert(EntityKind::Pest, "aphid");
        let json = serde_json::to_value(&entities).unwrap();
        assert_eq!(json, serde_json::json!({"pest": "aphid"}));
    }
}
