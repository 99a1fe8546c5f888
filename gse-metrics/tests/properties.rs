//! Properties of the derived metrics over the embedded dataset.

use gse_data::{Dataset, Region, YearValue};
use gse_metrics::{
    cumulative_waterfall, fastest_growing, rank_by_value, region_totals, regional_rollup,
    total_growth_percent, year_over_year_change, Aggregate,
};

fn dataset() -> Dataset {
    Dataset::embedded().expect("embedded dataset")
}

#[test]
fn yoy_has_one_point_less_and_compounds_back() {
    let ds = dataset();
    let sales = ds.global_sales();
    let yoy = year_over_year_change(sales);
    assert_eq!(yoy.len(), sales.len() - 1);

    let mut value = sales[0].value;
    for (change, actual) in yoy.iter().zip(&sales[1..]) {
        value *= 1.0 + change.value / 100.0;
        assert!((value - actual.value).abs() < 1e-6, "year {}", actual.year);
    }
}

#[test]
fn total_growth_is_scale_invariant() {
    let ds = dataset();
    let sales = ds.global_sales();
    let base = total_growth_percent(sales).unwrap();
    for k in [0.5, 2.0, 7.25] {
        let scaled: Vec<YearValue> = sales
            .iter()
            .map(|p| YearValue::new(p.year, p.value * k))
            .collect();
        assert_eq!(total_growth_percent(&scaled), Some(base));
    }
}

#[test]
fn total_growth_scenario_from_100() {
    for last in [150.0, 194.0, 210.0] {
        let series = vec![
            YearValue::new(2018, 100.0),
            YearValue::new(2019, 122.0),
            YearValue::new(2020, 108.0),
            YearValue::new(2026, last),
        ];
        let expected = ((last - 100.0) / 100.0 * 100.0 + 0.5).floor() as i64;
        assert_eq!(total_growth_percent(&series), Some(expected));
    }
    assert_eq!(total_growth_percent(dataset().global_sales()), Some(94));
}

#[test]
fn rank_one_is_the_largest_2026_market() {
    let ds = dataset();
    let ranked = rank_by_value(ds.countries(), |c| c.sales_2026);
    let max = ds
        .countries()
        .iter()
        .map(|c| c.sales_2026)
        .fold(f64::MIN, f64::max);
    assert_eq!(ranked[0].rank, 1);
    assert_eq!(ranked[0].value, max);
    for pair in ranked.windows(2) {
        assert!(pair[0].value >= pair[1].value);
        assert_eq!(pair[1].rank, pair[0].rank + 1);
    }
}

#[test]
fn regional_sums_partition_the_total() {
    let ds = dataset();
    for selector in [
        (|c: &gse_data::CountryMetric| c.sales_2018) as fn(&gse_data::CountryMetric) -> f64,
        |c| c.sales_2026,
    ] {
        let regional: f64 = regional_rollup(ds.countries(), Aggregate::Sum, selector)
            .iter()
            .map(|r| r.value)
            .sum();
        let total: f64 = ds.countries().iter().map(selector).sum();
        assert!((regional - total).abs() < 1e-9);
    }
}

#[test]
fn waterfall_spans_zero_to_total_growth() {
    let ds = dataset();
    let totals = region_totals(ds.countries());
    let segments = cumulative_waterfall(totals.iter().map(|t| (t.region, t.growth())));
    let sum: f64 = totals.iter().map(|t| t.growth()).sum();

    assert_eq!(segments.len(), Region::ALL.len());
    assert_eq!(segments[0].start, 0.0);
    assert!((segments.last().unwrap().end - sum).abs() < 1e-9);
    for pair in segments.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
}

#[test]
fn asia_pacific_leads_growth_and_india_grows_fastest() {
    let ds = dataset();
    let totals = region_totals(ds.countries());
    let segments = cumulative_waterfall(totals.iter().map(|t| (t.region, t.growth())));
    assert_eq!(segments[0].key, Region::AsiaPacific);
    assert!(segments[0].value > 16.0);
    assert_eq!(fastest_growing(ds.countries()).unwrap().name, "India");
}
