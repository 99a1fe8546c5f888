//! Derived metrics over the sneaker dataset.
//!
//! Every function here is pure: it borrows rows from [`gse_data`] and returns
//! new values. Missing inputs (empty series, absent years) produce `None` or an
//! empty result rather than an error.

pub mod growth;
pub mod ranking;
pub mod regional;
pub mod waterfall;

pub use growth::{
    change_in_year, index_to_baseline, total_growth_percent, year_over_year_change,
};
pub use ranking::{fastest_growing, highest_per_capita, rank_by_value, top_n, Ranked};
pub use regional::{
    interpolate_years, region_totals, regional_rollup, Aggregate, RegionTotals, RegionValue,
};
pub use waterfall::{cumulative_waterfall, WaterfallSegment};

/// Rounding helpers shared by the metric functions.
pub mod rounding {
    /// Round to the nearest integer, with halves rounding towards +infinity.
    ///
    /// `f64::round` rounds halves away from zero, which differs for negative
    /// values (-2.5 becomes -3 instead of -2).
    pub fn round_half_up(value: f64) -> f64 {
        (value + 0.5).floor()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_round_half_up() {
            assert_eq!(round_half_up(93.5), 94.0);
            assert_eq!(round_half_up(93.49), 93.0);
            assert_eq!(round_half_up(-2.5), -2.0);
            assert_eq!(round_half_up(-2.51), -3.0);
            assert_eq!(round_half_up(0.0), 0.0);
        }
    }
}

/// Category mix helpers.
pub mod categories {
    use gse_data::CategorySharePoint;

    /// Lifestyle share of total category sales in `year`, in percent.
    pub fn category_share(series: &[CategorySharePoint], year: i32) -> Option<f64> {
        let point = series.iter().find(|p| p.year == year)?;
        let total = point.total();
        if total <= 0.0 {
            return None;
        }
        Some(point.lifestyle / total * 100.0)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn point(year: i32, performance: f64, lifestyle: f64) -> CategorySharePoint {
            CategorySharePoint {
                year,
                performance,
                lifestyle,
            }
        }

        #[test]
        fn test_category_share() {
            let series = vec![point(2018, 55.0, 45.0), point(2026, 40.0, 60.0)];
            assert_eq!(category_share(&series, 2018), Some(45.0));
            assert_eq!(category_share(&series, 2026), Some(60.0));
        }

        #[test]
        fn test_category_share_missing_year() {
            let series = vec![point(2018, 0.0, 0.0)];
            assert_eq!(category_share(&series, 2018), None);
            assert_eq!(category_share(&series, 2019), None);
        }
    }
}
