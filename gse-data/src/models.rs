//! Row types for the embedded tables.
//!
//! All structs derive `Serialize` so the UI can hand them to the D3 bridge
//! as JSON, and `Deserialize` so the CSV loader can build them directly.

use crate::region::Region;
use serde::{Deserialize, Serialize};

/// A (year, value) pair. Values are USD billions unless a chart says
/// otherwise (percent changes and index points reuse this type).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}

impl YearValue {
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

/// Demand metrics for a single country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryMetric {
    /// Country name as used by the world atlas boundaries.
    pub name: String,
    pub region: Region,
    /// Compound annual growth rate 2018-2026, in percent.
    pub growth: f64,
    /// Per-capita spend in USD (2026).
    pub per_capita: f64,
    /// Sales in USD billions.
    pub sales_2018: f64,
    pub sales_2026: f64,
}

impl CountryMetric {
    /// Snapshot sales for one of the two snapshot years.
    pub fn sales_for(&self, year: i32) -> Option<f64> {
        match year {
            2018 => Some(self.sales_2018),
            2026 => Some(self.sales_2026),
            _ => None,
        }
    }
}

/// Performance vs lifestyle sales for one year (USD billions).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategorySharePoint {
    pub year: i32,
    pub performance: f64,
    pub lifestyle: f64,
}

impl CategorySharePoint {
    pub fn total(&self) -> f64 {
        self.performance + self.lifestyle
    }
}
