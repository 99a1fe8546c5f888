//! Growth over a yearly series.

use crate::rounding::round_half_up;
use gse_data::YearValue;

/// Whole-period growth in percent, rounded.
///
/// `round((last - first) / first * 100)`. Returns `None` for an empty series
/// or a non-positive first value.
pub fn total_growth_percent(series: &[YearValue]) -> Option<i64> {
    let first = series.first()?;
    let last = series.last()?;
    if first.value <= 0.0 {
        return None;
    }
    let pct = (last.value - first.value) / first.value * 100.0;
    Some(round_half_up(pct) as i64)
}

/// Percent change between consecutive years, tagged with the later year.
///
/// The result is one element shorter than the input.
pub fn year_over_year_change(series: &[YearValue]) -> Vec<YearValue> {
    series
        .windows(2)
        .map(|pair| {
            let prev = pair[0].value;
            let curr = pair[1];
            YearValue::new(curr.year, (curr.value - prev) / prev * 100.0)
        })
        .collect()
}

/// Percent change for the year ending at `year`, if the series has it.
pub fn change_in_year(series: &[YearValue], year: i32) -> Option<f64> {
    year_over_year_change(series)
        .into_iter()
        .find(|p| p.year == year)
        .map(|p| p.value)
}

/// Rebase a series so that `base_year` reads 100, rounding each point.
///
/// Returns an empty vec if `base_year` is absent or its value is not positive.
pub fn index_to_baseline(series: &[YearValue], base_year: i32) -> Vec<YearValue> {
    let base = match series.iter().find(|p| p.year == base_year) {
        Some(p) if p.value > 0.0 => p.value,
        _ => return Vec::new(),
    };
    series
        .iter()
        .map(|p| YearValue::new(p.year, round_half_up(p.value / base * 100.0)))
        .collect()
}
