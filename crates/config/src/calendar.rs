//! Cropping calendar
//!
//! Sowing and harvest windows per (season, crop). Pairs not in the table
//! get a generic check-locally fallback.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use agri_advisor_core::Season;

/// Fallback when a crop/season pair has no calendar entry
pub const CHECK_LOCAL: &str = "Check local recommendations";

/// Sowing and harvest lookup tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropCalendar {
    /// Sowing windows keyed by season, then lowercase crop name
    #[serde(default)]
    pub sowing: HashMap<Season, HashMap<String, String>>,
    /// Harvest windows keyed by season, then lowercase crop name
    #[serde(default)]
    pub harvest: HashMap<Season, HashMap<String, String>>,
}

impl CropCalendar {
    pub fn sowing_time(&self, crop_name: &str, season: Season) -> &str {
        lookup(&self.sowing, crop_name, season)
    }

    pub fn harvest_time(&self, crop_name: &str, season: Season) -> &str {
        lookup(&self.harvest, crop_name, season)
    }
}

fn lookup<'a>(
    table: &'a HashMap<Season, HashMap<String, String>>,
    crop_name: &str,
    season: Season,
) -> &'a str {
    table
        .get(&season)
        .and_then(|by_crop| by_crop.get(&crop_name.trim().to_lowercase()))
        .map(String::as_str)
        .unwrap_or(CHECK_LOCAL)
}

fn window(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl Default for CropCalendar {
    fn default() -> Self {
        Self {
            sowing: HashMap::from([
                (
                    Season::Kharif,
                    window(&[
                        ("rice", "June-July"),
                        ("maize", "June-July"),
                        ("cotton", "April-May"),
                    ]),
                ),
                (
                    Season::Rabi,
                    window(&[("wheat", "October-November"), ("mustard", "October-November")]),
                ),
                (
                    Season::Zaid,
                    window(&[("maize", "February-March"), ("watermelon", "March-April")]),
                ),
            ]),
            harvest: HashMap::from([
                (
                    Season::Kharif,
                    window(&[
                        ("rice", "September-October"),
                        ("maize", "September-October"),
                        ("cotton", "November-December"),
                    ]),
                ),
                (
                    Season::Rabi,
                    window(&[("wheat", "April-May"), ("mustard", "March-April")]),
                ),
                (
                    Season::Zaid,
                    window(&[("maize", "June-July"), ("watermelon", "May-June")]),
                ),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_windows() {
        let calendar = CropCalendar::default();
        assert_eq!(calendar.sowing_time("rice", Season::Kharif), "June-July");
        assert_eq!(calendar.harvest_time("wheat", Season::Rabi), "April-May");
        assert_eq!(calendar.sowing_time("Maize", Season::Zaid), "February-March");
    }

    #[test]
    fn test_missing_pair_falls_back() {
        let calendar = CropCalendar::default();
        // Wheat is a rabi crop; the kharif table has no entry for it.
        assert_eq!(calendar.sowing_time("wheat", Season::Kharif), CHECK_LOCAL);
        assert_eq!(calendar.harvest_time("sugarcane", Season::Rabi), CHECK_LOCAL);
    }
}
