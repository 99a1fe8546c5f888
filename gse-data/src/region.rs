//! Closed set of reporting regions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic grouping every country belongs to.
///
/// Parsed from its display label; an unknown label fails deserialization,
/// so every `CountryMetric` refers to a real region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "Europe")]
    Europe,
    #[serde(rename = "Asia-Pacific")]
    AsiaPacific,
    #[serde(rename = "Latin America")]
    LatinAmerica,
    #[serde(rename = "Middle East & Africa")]
    MiddleEastAfrica,
}

impl Region {
    /// All regions in display order.
    pub const ALL: [Region; 5] = [
        Region::NorthAmerica,
        Region::Europe,
        Region::AsiaPacific,
        Region::LatinAmerica,
        Region::MiddleEastAfrica,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::AsiaPacific => "Asia-Pacific",
            Region::LatinAmerica => "Latin America",
            Region::MiddleEastAfrica => "Middle East & Africa",
        }
    }

    /// Display colour used for strokes, bars and legend dots.
    pub fn color(self) -> &'static str {
        match self {
            Region::NorthAmerica => "#1f3a5f",
            Region::Europe => "#4f7cac",
            Region::AsiaPacific => "#c46b2b",
            Region::LatinAmerica => "#7a9e5b",
            Region::MiddleEastAfrica => "#a33f2b",
        }
    }

    /// Lowercase ASCII id for DOM element ids.
    pub fn slug(self) -> &'static str {
        match self {
            Region::NorthAmerica => "north-america",
            Region::Europe => "europe",
            Region::AsiaPacific => "asia-pacific",
            Region::LatinAmerica => "latin-america",
            Region::MiddleEastAfrica => "middle-east-africa",
        }
    }

    /// Parse a display label.
    pub fn from_label(label: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|r| r.label() == label)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
