//! Image analysis types
//!
//! The image classifier is an external collaborator; the chat core only
//! branches on its result. Confidence above the configured threshold yields
//! an assertive diagnosis, anything lower a tentative hedge.

use serde::{Deserialize, Serialize};

/// What the classifier found in the crop image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionKind {
    Pest,
    Disease,
    Healthy,
}

/// Result of analyzing a crop image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAnalysis {
    #[serde(rename = "type")]
    pub kind: DetectionKind,
    /// Detected pest/disease label; empty for healthy crops
    #[serde(default)]
    pub label: String,
    /// Classifier confidence in [0, 1]
    pub confidence: f64,
}

impl ImageAnalysis {
    pub fn healthy(confidence: f64) -> Self {
        Self {
            kind: DetectionKind::Healthy,
            label: String::new(),
            confidence,
        }
    }

    pub fn pest(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            kind: DetectionKind::Pest,
            label: label.into(),
            confidence,
        }
    }

    pub fn disease(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            kind: DetectionKind::Disease,
            label: label.into(),
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serialization() {
        let analysis = ImageAnalysis::pest("bollworm", 0.92);
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["type"], "pest");
        assert_eq!(json["label"], "bollworm");
    }
}
