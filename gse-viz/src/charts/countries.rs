//! Country-level comparisons.

use gse_data::{CountryMetric, FIRST_YEAR, LAST_YEAR};
use gse_metrics::{fastest_growing, highest_per_capita, top_n};

use super::{extent, RUST};
use crate::chart::{Chart, ChartKind, Datum, Margin};
use crate::format::{billions, fixed, percent};
use crate::hover::Tooltip;

/// 2018 to 2026 sales lines for the six largest markets.
///
/// `y0` holds 2018 sales and `y` 2026 sales.
pub fn top_market_slope(countries: &[CountryMetric]) -> Chart {
    let leaders = top_n(countries, 6, |c| c.sales_2026);
    let lo = extent(leaders.iter().map(|r| r.row.sales_2018)).map_or(0.0, |e| e.0);
    let hi = extent(leaders.iter().map(|r| r.row.sales_2026)).map_or(0.0, |e| e.1);

    let lines = leaders
        .iter()
        .map(|ranked| {
            let country = ranked.row;
            Datum::new(&country.name, 0.0, country.sales_2026)
                .from(country.sales_2018)
                .color(country.region.color())
                .opacity(0.8)
                .label(format!("{}B", fixed(country.sales_2026, 1)))
                .tooltip(
                    Tooltip::new(&country.name)
                        .caption("Sales trajectory")
                        .line(format!("{FIRST_YEAR}: {}", billions(country.sales_2018)))
                        .line(format!("{LAST_YEAR}: {}", billions(country.sales_2026))),
                )
        })
        .collect();

    Chart::new(ChartKind::Slope, 520.0, 320.0, "Top market slope chart")
        .margin(Margin::new(30.0, 40.0, 30.0, 40.0))
        .title(format!("Top market trajectories ({FIRST_YEAR} \u{2192} {LAST_YEAR})"))
        .x_domain(FIRST_YEAR as f64, LAST_YEAR as f64)
        .y_domain(lo - 2.0, hi + 4.0)
        .data(lines)
}

/// Growth rate against per-capita spend, one dot per country.
///
/// The fastest grower and the highest spender are enlarged and labelled.
pub fn growth_scatter(countries: &[CountryMetric]) -> Chart {
    let (_, max_spend) = extent(countries.iter().map(|c| c.per_capita)).unwrap_or((0.0, 0.0));
    let (_, max_growth) = extent(countries.iter().map(|c| c.growth)).unwrap_or((0.0, 0.0));
    let fastest = fastest_growing(countries).map(|c| c.name.as_str());
    let richest = highest_per_capita(countries).map(|c| c.name.as_str());

    let dots = countries
        .iter()
        .map(|country| {
            let name = Some(country.name.as_str());
            let highlighted = fastest == name || richest == name;
            let (radius, opacity) = if highlighted { (6.0, 1.0) } else { (4.0, 0.65) };
            let dot = Datum::new(&country.name, country.per_capita, country.growth)
                .color(country.region.color())
                .radius(radius)
                .opacity(opacity)
                .tooltip(
                    Tooltip::new(&country.name)
                        .caption("Growth vs spend")
                        .line(format!("{} CAGR", percent(country.growth, 1)))
                        .line(format!("${} per capita", fixed(country.per_capita, 0))),
                );
            if highlighted {
                dot.label(&country.name)
            } else {
                dot
            }
        })
        .collect();

    let mut chart = Chart::new(ChartKind::Scatter, 520.0, 320.0, "Growth versus per-capita spend scatter plot")
        .margin(Margin::new(30.0, 30.0, 40.0, 50.0))
        .title("Growth vs. per-capita spend")
        .x_domain(0.0, max_spend + 10.0)
        .y_domain(0.0, max_growth + 2.0)
        .data(dots);
    chart.y_tick_suffix = Some("%".to_string());
    chart.x_tick_prefix = Some("$".to_string());
    chart.axis_label = Some(format!("Per-capita spend ({LAST_YEAR})"));
    chart
}

/// Eight fastest-growing markets as horizontal lollipops.
pub fn growth_lollipop(countries: &[CountryMetric]) -> Chart {
    let leaders = top_n(countries, 8, |c| c.growth);
    let (_, max) = extent(leaders.iter().map(|r| r.value)).unwrap_or((0.0, 0.0));

    let stems = leaders
        .iter()
        .map(|ranked| {
            let name = ranked.row.name.as_str();
            Datum::new(name, 0.0, ranked.value)
                .color(RUST)
                .radius(6.0)
                .label(percent(ranked.value, 1))
                .tooltip(
                    Tooltip::new(name)
                        .caption(format!("{FIRST_YEAR}\u{2013}{LAST_YEAR} CAGR"))
                        .line(percent(ranked.value, 1)),
                )
        })
        .collect();

    Chart::new(ChartKind::Lollipop, 520.0, 320.0, "Fastest growing markets lollipop chart")
        .margin(Margin::new(30.0, 24.0, 30.0, 120.0))
        .title("Fastest growing markets (CAGR)")
        .x_domain(0.0, max + 2.0)
        .data(stems)
}
