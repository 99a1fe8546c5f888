//! Regional rollups of country metrics.

use gse_data::{CountryMetric, Region, YearValue};
use serde::Serialize;

/// How country values are combined within a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    Sum,
    Average,
}

/// One aggregated value per region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionValue {
    pub region: Region,
    pub value: f64,
}

/// Regional snapshot totals and their difference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionTotals {
    pub region: Region,
    pub total_2018: f64,
    pub total_2026: f64,
}

impl RegionTotals {
    /// Sales added between the two snapshots.
    pub fn growth(&self) -> f64 {
        self.total_2026 - self.total_2018
    }
}

/// Group countries by region and combine `selector` values.
///
/// Produces one row per region in [`Region::ALL`] order. A region without
/// countries sums to 0 and averages to 0.
pub fn regional_rollup<F>(countries: &[CountryMetric], aggregate: Aggregate, selector: F) -> Vec<RegionValue>
where
    F: Fn(&CountryMetric) -> f64,
{
    Region::ALL
        .iter()
        .map(|&region| {
            let values: Vec<f64> = countries
                .iter()
                .filter(|c| c.region == region)
                .map(&selector)
                .collect();
            let sum: f64 = values.iter().sum();
            let value = match aggregate {
                Aggregate::Sum => sum,
                Aggregate::Average if values.is_empty() => 0.0,
                Aggregate::Average => sum / values.len() as f64,
            };
            RegionValue { region, value }
        })
        .collect()
}

/// Summed 2018 and 2026 sales per region.
pub fn region_totals(countries: &[CountryMetric]) -> Vec<RegionTotals> {
    let t2018 = regional_rollup(countries, Aggregate::Sum, |c| c.sales_2018);
    let t2026 = regional_rollup(countries, Aggregate::Sum, |c| c.sales_2026);
    t2018
        .into_iter()
        .zip(t2026)
        .map(|(a, b)| RegionTotals {
            region: a.region,
            total_2018: a.value,
            total_2026: b.value,
        })
        .collect()
}

/// Straight-line estimate for every year from `first_year` to `last_year`
/// between two snapshot values.
pub fn interpolate_years(start: f64, end: f64, first_year: i32, last_year: i32) -> Vec<YearValue> {
    if last_year < first_year {
        return Vec::new();
    }
    let span = (last_year - first_year) as f64;
    (first_year..=last_year)
        .map(|year| {
            let progress = if span > 0.0 {
                (year - first_year) as f64 / span
            } else {
                0.0
            };
            YearValue::new(year, start + (end - start) * progress)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str, region: Region, per_capita: f64, sales_2018: f64, sales_2026: f64) -> CountryMetric {
        CountryMetric {
            name: name.to_string(),
            region,
            growth: 1.0,
            per_capita,
            sales_2018,
            sales_2026,
        }
    }

    fn sample() -> Vec<CountryMetric> {
        vec![
            country("A", Region::Europe, 40.0, 1.0, 2.0),
            country("B", Region::Europe, 60.0, 3.0, 5.0),
            country("C", Region::AsiaPacific, 10.0, 4.0, 10.0),
        ]
    }

    #[test]
    fn test_rollup_sum() {
        let rows = regional_rollup(&sample(), Aggregate::Sum, |c| c.sales_2026);
        assert_eq!(rows.len(), Region::ALL.len());
        assert_eq!(rows[0].region, Region::NorthAmerica);
        assert_eq!(rows[0].value, 0.0);
        assert_eq!(rows[1].value, 7.0);
        assert_eq!(rows[2].value, 10.0);
    }

    #[test]
    fn test_rollup_average() {
        let rows = regional_rollup(&sample(), Aggregate::Average, |c| c.per_capita);
        let europe = rows.iter().find(|r| r.region == Region::Europe).unwrap();
        assert_eq!(europe.value, 50.0);
        let empty = rows.iter().find(|r| r.region == Region::LatinAmerica).unwrap();
        assert_eq!(empty.value, 0.0);
    }

    #[test]
    fn test_region_totals_growth() {
        let totals = region_totals(&sample());
        let europe = totals.iter().find(|r| r.region == Region::Europe).unwrap();
        assert_eq!(europe.total_2018, 4.0);
        assert_eq!(europe.total_2026, 7.0);
        assert_eq!(europe.growth(), 3.0);
    }

    #[test]
    fn test_interpolate_years() {
        let points = interpolate_years(10.0, 18.0, 2018, 2026);
        assert_eq!(points.len(), 9);
        assert_eq!(points[0], YearValue::new(2018, 10.0));
        assert_eq!(points[4], YearValue::new(2022, 14.0));
        assert_eq!(points[8], YearValue::new(2026, 18.0));
    }

    #[test]
    fn test_interpolate_years_degenerate() {
        assert!(interpolate_years(1.0, 2.0, 2026, 2018).is_empty());
        assert_eq!(interpolate_years(1.0, 2.0, 2020, 2020), vec![YearValue::new(2020, 1.0)]);
    }
}
