//! Embedded dataset for the global sneaker economy report.
//!
//! The tables are shipped as CSV fixtures compiled into the binary with
//! `include_str!` and parsed once at startup into typed, read-only rows.
//!
//! # Usage
//!
//! ```rust
//! use gse_data::Dataset;
//!
//! let dataset = Dataset::embedded().unwrap();
//! assert_eq!(dataset.global_sales().first().map(|p| p.year), Some(2018));
//! ```
//!
//! # Tables
//!
//! - `global_sales.csv` - yearly global market size (USD billions)
//! - `countries.csv` - per-country growth, per-capita spend and snapshot sales
//! - `categories.csv` - performance vs lifestyle split per year

pub mod error;
mod loader;
pub mod models;
pub mod region;

pub use error::DatasetError;
pub use models::{CategorySharePoint, CountryMetric, YearValue};
pub use region::Region;

const GLOBAL_SALES_CSV: &str = include_str!("../fixtures/global_sales.csv");
const COUNTRIES_CSV: &str = include_str!("../fixtures/countries.csv");
const CATEGORIES_CSV: &str = include_str!("../fixtures/categories.csv");

/// First and last year covered by every yearly table.
pub const FIRST_YEAR: i32 = 2018;
pub const LAST_YEAR: i32 = 2026;

/// The full report dataset.
///
/// Built once and never mutated. Cloning copies the (small) tables, so
/// callers that share it across components should wrap it in `Rc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    global_sales: Vec<YearValue>,
    countries: Vec<CountryMetric>,
    categories: Vec<CategorySharePoint>,
}

impl Dataset {
    /// Parse and validate the fixtures compiled into this crate.
    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_csv(GLOBAL_SALES_CSV, COUNTRIES_CSV, CATEGORIES_CSV)
    }

    /// Parse and validate a dataset from CSV strings.
    pub fn from_csv(
        global_sales_csv: &str,
        countries_csv: &str,
        categories_csv: &str,
    ) -> anyhow::Result<Self> {
        let global_sales = loader::load_global_sales(global_sales_csv)?;
        let countries = loader::load_countries(countries_csv)?;
        let categories = loader::load_categories(categories_csv)?;
        loader::validate_category_years(&global_sales, &categories)?;

        log::info!(
            "[GSE] dataset: {} years, {} countries, {} category points",
            global_sales.len(),
            countries.len(),
            categories.len()
        );

        Ok(Self {
            global_sales,
            countries,
            categories,
        })
    }

    /// Yearly global sales, ordered by year.
    pub fn global_sales(&self) -> &[YearValue] {
        &self.global_sales
    }

    /// Per-country metrics in fixture order.
    pub fn countries(&self) -> &[CountryMetric] {
        &self.countries
    }

    /// Performance/lifestyle split, ordered by year.
    pub fn categories(&self) -> &[CategorySharePoint] {
        &self.categories
    }

    /// Look up a country by its display name.
    pub fn country(&self, name: &str) -> Option<&CountryMetric> {
        self.countries.iter().find(|c| c.name == name)
    }

    /// Global sales for a single year.
    pub fn sales_in(&self, year: i32) -> Option<f64> {
        self.global_sales
            .iter()
            .find(|p| p.year == year)
            .map(|p| p.value)
    }

    /// Category split for a single year.
    pub fn categories_in(&self, year: i32) -> Option<&CategorySharePoint> {
        self.categories.iter().find(|p| p.year == year)
    }

    /// Years covered by the yearly tables.
    pub fn years(&self) -> Vec<i32> {
        self.global_sales.iter().map(|p| p.year).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_loads() {
        let dataset = Dataset::embedded().unwrap();
        assert_eq!(dataset.global_sales().len(), 9);
        assert_eq!(dataset.categories().len(), 9);
        assert!(!dataset.countries().is_empty());
        assert_eq!(dataset.years().first(), Some(&FIRST_YEAR));
        assert_eq!(dataset.years().last(), Some(&LAST_YEAR));
    }

    #[test]
    fn lookups_by_name_and_year() {
        let dataset = Dataset::embedded().unwrap();
        assert_eq!(dataset.sales_in(2018), Some(100.0));
        assert_eq!(dataset.sales_in(2019), Some(122.0));
        assert_eq!(dataset.sales_in(1999), None);

        let china = dataset.country("China").unwrap();
        assert_eq!(china.region, Region::AsiaPacific);
        assert!(dataset.country("Atlantis").is_none());
        assert!(dataset.categories_in(2030).is_none());
    }

    #[test]
    fn category_totals_track_global_sales() {
        let dataset = Dataset::embedded().unwrap();
        for point in dataset.categories() {
            let global = dataset.sales_in(point.year).unwrap();
            assert!((point.total() - global).abs() < 0.01, "year {}", point.year);
        }
    }
}
