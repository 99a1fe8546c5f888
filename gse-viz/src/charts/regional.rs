//! Charts aggregated by region.

use gse_data::{CountryMetric, Region, YearValue, FIRST_YEAR, LAST_YEAR};
use gse_metrics::{
    cumulative_waterfall, interpolate_years, rank_by_value, region_totals, regional_rollup,
    Aggregate, Ranked, RegionTotals,
};

use super::extent;
use crate::chart::{Chart, ChartKind, Datum, LegendItem, Margin};
use crate::format::{billions, fixed, signed, signed_billions};
use crate::hover::Tooltip;

fn region_key() -> Vec<LegendItem> {
    Region::ALL
        .iter()
        .map(|r| LegendItem::swatch(r.label(), r.color()))
        .collect()
}

/// Linear estimate of each region's sales for every year.
fn regional_series(totals: &[RegionTotals]) -> Vec<(Region, Vec<YearValue>)> {
    totals
        .iter()
        .map(|t| {
            (
                t.region,
                interpolate_years(t.total_2018, t.total_2026, FIRST_YEAR, LAST_YEAR),
            )
        })
        .collect()
}

/// Region by year grid of estimated sales, coloured on the YlOrBr ramp.
pub fn regional_heatmap(countries: &[CountryMetric]) -> Chart {
    let rows = regional_series(&region_totals(countries));
    let (lo, hi) = extent(rows.iter().flat_map(|(_, s)| s.iter().map(|p| p.value))).unwrap_or((0.0, 0.0));

    let cells = rows
        .iter()
        .flat_map(|(region, series)| {
            series.iter().map(move |point| {
                Datum::new(region.label(), point.year as f64, point.value)
                    .opacity(0.85)
                    .tooltip(
                        Tooltip::new(region.label())
                            .caption(format!("{} estimate", point.year))
                            .line(billions(point.value)),
                    )
            })
        })
        .collect();

    let mut chart = Chart::new(ChartKind::Heatmap, 760.0, 340.0, "Regional demand heatmap")
        .margin(Margin::new(70.0, 30.0, 40.0, 140.0))
        .title(format!("Regional demand heatmap ({FIRST_YEAR}\u{2013}{LAST_YEAR})"))
        .x_domain(FIRST_YEAR as f64, LAST_YEAR as f64)
        .data(cells);
    chart.color_domain = Some([lo, hi]);
    chart
}

/// Regions' added sales stacked end to end, largest first.
pub fn growth_waterfall(countries: &[CountryMetric]) -> Chart {
    let totals = region_totals(countries);
    let segments = cumulative_waterfall(totals.iter().map(|t| (t.region, t.growth())));
    let total: f64 = segments.iter().map(|s| s.value).sum();

    let bars = segments
        .iter()
        .map(|segment| {
            Datum::new(segment.key.label(), 0.0, segment.end)
                .from(segment.start)
                .color(segment.key.color())
                .opacity(0.85)
                .label(format!("{}B", signed(segment.value, 1)))
                .tooltip(
                    Tooltip::new(segment.key.label())
                        .caption("Growth contribution")
                        .line(signed_billions(segment.value))
                        .line(format!("Cumulative: {}", billions(segment.end))),
                )
        })
        .collect();

    let mut chart = Chart::new(ChartKind::Waterfall, 760.0, 300.0, "Regional growth waterfall")
        .margin(Margin::new(40.0, 30.0, 40.0, 80.0))
        .title(format!("Growth contribution by region ({FIRST_YEAR} \u{2192} {LAST_YEAR})"))
        .x_domain(0.0, total + 10.0)
        .data(bars);
    chart.marker = Some(Datum::new("total", total, 0.0).label(format!("Total {}B", signed(total, 1))));
    chart
}

/// Position of each region in the 2018 and 2026 rankings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankShift {
    pub totals: RegionTotals,
    pub rank_2018: usize,
    pub rank_2026: usize,
}

pub fn rank_shifts(countries: &[CountryMetric]) -> Vec<RankShift> {
    let totals = region_totals(countries);
    let by_2018 = rank_by_value(&totals, |t| t.total_2018);
    let by_2026 = rank_by_value(&totals, |t| t.total_2026);
    let rank_of = |ranked: &[Ranked<&RegionTotals>], region: Region| {
        ranked
            .iter()
            .find(|r| r.row.region == region)
            .map(|r| r.rank)
            .unwrap_or(1)
    };
    totals
        .iter()
        .map(|t| RankShift {
            totals: *t,
            rank_2018: rank_of(&by_2018, t.region),
            rank_2026: rank_of(&by_2026, t.region),
        })
        .collect()
}

/// Bump chart of regional rank between the two snapshot years.
///
/// `y0` is the 2018 rank and `y` the 2026 rank.
pub fn regional_rank_bump(countries: &[CountryMetric]) -> Chart {
    let lines = rank_shifts(countries)
        .iter()
        .map(|shift| {
            let region = shift.totals.region;
            Datum::new(region.label(), 0.0, shift.rank_2026 as f64)
                .from(shift.rank_2018 as f64)
                .color(region.color())
                .opacity(0.9)
                .label(format!("#{}", shift.rank_2026))
                .tooltip(
                    Tooltip::new(region.label())
                        .caption("Rank shift")
                        .line(format!("{FIRST_YEAR}: #{}", shift.rank_2018))
                        .line(format!("{LAST_YEAR}: #{}", shift.rank_2026))
                        .line(format!("{FIRST_YEAR} sales: {}", billions(shift.totals.total_2018)))
                        .line(format!("{LAST_YEAR} sales: {}", billions(shift.totals.total_2026))),
                )
        })
        .collect();

    Chart::new(ChartKind::RankBump, 520.0, 320.0, "Regional rank bump chart")
        .margin(Margin::new(30.0, 40.0, 30.0, 40.0))
        .title(format!("Regional rank shift ({FIRST_YEAR} \u{2192} {LAST_YEAR})"))
        .x_domain(FIRST_YEAR as f64, LAST_YEAR as f64)
        .y_domain(1.0, Region::ALL.len() as f64)
        .data(lines)
}

/// Horizontal bars of 2026 sales per region.
pub fn regional_share_bars(countries: &[CountryMetric]) -> Chart {
    let totals = regional_rollup(countries, Aggregate::Sum, |c| c.sales_2026);
    let (_, max) = extent(totals.iter().map(|t| t.value)).unwrap_or((0.0, 0.0));

    let bars = totals
        .iter()
        .map(|item| {
            Datum::new(item.region.label(), 0.0, item.value)
                .color(item.region.color())
                .opacity(0.85)
                .label(format!("{}B", fixed(item.value, 1)))
                .tooltip(
                    Tooltip::new(item.region.label())
                        .caption(format!("{LAST_YEAR} sales"))
                        .line(billions(item.value)),
                )
        })
        .collect();

    Chart::new(ChartKind::ShareBars, 520.0, 320.0, "Regional sales contribution bar chart")
        .margin(Margin::new(30.0, 24.0, 30.0, 140.0))
        .title(format!("{LAST_YEAR} regional contribution (USD billions)"))
        .x_domain(0.0, max + 5.0)
        .data(bars)
}

/// One wedge per region whose length shows average per-capita spend.
///
/// The renderer maps `y_domain` onto wedge lengths of 20 to 95 beyond the
/// hub and starts the first wedge at twelve o'clock.
pub fn radial_per_capita(countries: &[CountryMetric]) -> Chart {
    let averages = regional_rollup(countries, Aggregate::Average, |c| c.per_capita);
    let (_, max) = extent(averages.iter().map(|a| a.value)).unwrap_or((0.0, 0.0));

    let wedges = averages
        .iter()
        .map(|item| {
            Datum::new(item.region.label(), 0.0, item.value)
                .color(item.region.color())
                .opacity(0.85)
                .tooltip(
                    Tooltip::new(item.region.label())
                        .caption("Avg per-capita spend")
                        .line(format!("${}", fixed(item.value, 0))),
                )
        })
        .collect();

    let mut chart = Chart::new(ChartKind::Radial, 360.0, 300.0, "Regional per-capita radial chart")
        .title("Per-capita intensity by region")
        .y_domain(0.0, max)
        .data(wedges)
        .legend(region_key());
    chart.hub_label = Some("$/capita".to_string());
    chart
}

/// Small trend line for one region.
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkline {
    pub region: Region,
    pub latest: f64,
    pub chart: Chart,
}

pub fn regional_sparklines(countries: &[CountryMetric]) -> Vec<Sparkline> {
    regional_series(&region_totals(countries))
        .into_iter()
        .map(|(region, series)| {
            let (lo, hi) = extent(series.iter().map(|p| p.value)).unwrap_or((0.0, 0.0));
            let chart = Chart::new(
                ChartKind::Sparkline,
                220.0,
                100.0,
                format!("{} sparkline", region.label()),
            )
            .margin(Margin::new(10.0, 10.0, 20.0, 20.0))
            .x_domain(FIRST_YEAR as f64, LAST_YEAR as f64)
            .y_domain(lo - 2.0, hi + 2.0)
            .data(series.iter().map(|p| Datum::year(p).color(region.color())).collect());
            Sparkline {
                region,
                latest: series.last().map(|p| p.value).unwrap_or(0.0),
                chart,
            }
        })
        .collect()
}
