//! Cropping seasons
//!
//! India's agricultural calendar: kharif (monsoon sowing), rabi (winter
//! sowing) and zaid (the short summer window between them).

use serde::{Deserialize, Serialize};

/// Cropping season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
}

impl Season {
    /// Map a calendar month (1-12) to the season it falls in.
    ///
    /// June-August is kharif, October-January is rabi, the rest is zaid.
    pub fn from_month(month: u32) -> Self {
        match month {
            6..=8 => Self::Kharif,
            10..=12 | 1 => Self::Rabi,
            _ => Self::Zaid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kharif => "kharif",
            Self::Rabi => "rabi",
            Self::Zaid => "zaid",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_mapping() {
        assert_eq!(Season::from_month(6), Season::Kharif);
        assert_eq!(Season::from_month(7), Season::Kharif);
        assert_eq!(Season::from_month(8), Season::Kharif);
        assert_eq!(Season::from_month(10), Season::Rabi);
        assert_eq!(Season::from_month(12), Season::Rabi);
        assert_eq!(Season::from_month(1), Season::Rabi);
        for m in [2, 3, 4, 5, 9] {
            assert_eq!(Season::from_month(m), Season::Zaid);
        }
    }
}
