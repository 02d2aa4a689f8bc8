//! Language definitions for the advisory assistant
//!
//! The assistant speaks English plus five Indian languages. Every lexicon
//! table carries an English row, so any unrecognized language code resolves
//! to English rather than failing.

use serde::{Deserialize, Serialize};

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Punjabi,
    Telugu,
    Tamil,
    Bengali,
}

impl Language {
    /// All supported languages, English first
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Hindi,
        Language::Punjabi,
        Language::Telugu,
        Language::Tamil,
        Language::Bengali,
    ];

    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Punjabi => "pa",
            Self::Telugu => "te",
            Self::Tamil => "ta",
            Self::Bengali => "bn",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Punjabi => "Punjabi",
            Self::Telugu => "Telugu",
            Self::Tamil => "Tamil",
            Self::Bengali => "Bengali",
        }
    }

    /// Resolve an ISO code, falling back to English for anything unknown
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "hi" => Self::Hindi,
            "pa" => Self::Punjabi,
            "te" => Self::Telugu,
            "ta" => Self::Tamil,
            "bn" => Self::Bengali,
            _ => Self::English,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), lang);
        }
    }

    #[test]
    fn test_unknown_code_falls_back_to_english() {
        assert_eq!(Language::from_code("fr"), Language::English);
        assert_eq!(Language::from_code(""), Language::English);
        assert_eq!(Language::from_code("HI "), Language::Hindi);
    }
}
