//! Global sales charts: hero backdrop, market size, YoY bars, demand index.

use gse_data::{YearValue, FIRST_YEAR, LAST_YEAR};
use gse_metrics::{change_in_year, index_to_baseline, year_over_year_change};

use super::{extent, NAVY, RED, RUST};
use crate::chart::{Callout, Chart, ChartKind, Datum, GradientStop, Margin};
use crate::format::{percent, signed_percent};
use crate::hover::Tooltip;

const PANDEMIC_YEAR: i32 = 2020;
const SHOCK: &str = "#8f3a2c";

/// Which chapter the market chart is drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketVariant {
    Growth,
    /// Adds the pandemic callout.
    Shock,
}

fn year_points(series: &[YearValue]) -> Vec<Datum> {
    series
        .iter()
        .filter(|p| p.value.is_finite())
        .map(Datum::year)
        .collect()
}

/// Value extent widened by `pad` on both sides.
fn padded(series: &[YearValue], pad: f64) -> (f64, f64) {
    let (lo, hi) = extent(series.iter().map(|p| p.value)).unwrap_or((0.0, 0.0));
    (lo - pad, hi + pad)
}

/// Decorative sales curve behind the page header.
pub fn hero_backdrop(sales: &[YearValue]) -> Chart {
    let (lo, hi) = padded(sales, 8.0);
    Chart::new(ChartKind::Hero, 980.0, 320.0, "Global sneaker sales backdrop")
        .margin(Margin::new(30.0, 40.0, 40.0, 50.0))
        .x_domain(FIRST_YEAR as f64, LAST_YEAR as f64)
        .y_domain(lo, hi)
        .gradients(
            vec![
                GradientStop::new(0.0, "#f1c58b", 1.0),
                GradientStop::new(0.6, "#e37c42", 1.0),
                GradientStop::new(1.0, "#a33f2b", 1.0),
            ],
            vec![
                GradientStop::new(0.0, "#f1c58b", 0.35),
                GradientStop::new(1.0, "#f1c58b", 0.0),
            ],
        )
        .data(year_points(sales))
}

/// Market size line for the first two chapters.
pub fn global_market(sales: &[YearValue], variant: MarketVariant) -> Chart {
    let (lo, hi) = padded(sales, 10.0);
    let mut chart = Chart::new(ChartKind::Market, 760.0, 360.0, "Global sneaker market size line chart")
        .margin(Margin::new(40.0, 40.0, 50.0, 60.0))
        .title("Global market size (USD billions)")
        .x_domain(FIRST_YEAR as f64, LAST_YEAR as f64)
        .y_domain(lo, hi)
        .gradients(
            vec![
                GradientStop::new(0.0, "#f1c58b", 1.0),
                GradientStop::new(0.5, "#e37c42", 1.0),
                GradientStop::new(1.0, "#7a2f20", 1.0),
            ],
            vec![
                GradientStop::new(0.0, "#f1c58b", 0.35),
                GradientStop::new(1.0, "#f1c58b", 0.03),
            ],
        )
        .data(year_points(sales));

    chart.area_opacity = Some(match variant {
        MarketVariant::Growth => 0.55,
        MarketVariant::Shock => 0.35,
    });

    if variant == MarketVariant::Shock {
        if let Some(dip) = sales.iter().find(|p| p.year == PANDEMIC_YEAR) {
            let mut lines = vec!["Pandemic demand dip".to_string()];
            if let Some(change) = change_in_year(sales, PANDEMIC_YEAR) {
                lines.push(format!("{} vs {}", signed_percent(change, 1), PANDEMIC_YEAR - 1));
            }
            chart.callout = Some(Callout {
                x: dip.year as f64,
                y: dip.value,
                color: SHOCK.to_string(),
                lines,
            });
        }
    }
    chart
}

/// Bars of year-over-year change; declines are drawn in red.
pub fn yoy_growth(sales: &[YearValue]) -> Chart {
    let yoy = year_over_year_change(sales);
    let (lo, hi) = extent(yoy.iter().map(|p| p.value)).unwrap_or((0.0, 0.0));

    let mut chart = Chart::new(ChartKind::YoyBars, 520.0, 320.0, "Year over year growth bar chart")
        .margin(Margin::new(30.0, 24.0, 40.0, 50.0))
        .title("Year-over-year growth")
        .y_domain(lo.min(-15.0), hi.max(10.0))
        .data(
            yoy.iter()
                .filter(|p| p.value.is_finite())
                .map(|point| {
                    Datum::year(point)
                        .color(if point.value >= 0.0 { NAVY } else { RED })
                        .opacity(0.85)
                        .tooltip(
                            Tooltip::new(point.year.to_string())
                                .caption("YoY change")
                                .line(percent(point.value, 1)),
                        )
                })
                .collect(),
        );
    chart.y_tick_suffix = Some("%".to_string());
    chart
}

/// Demand indexed to the first year, with a snapping hover guide.
pub fn growth_index(sales: &[YearValue]) -> Chart {
    let base_year = sales.first().map(|p| p.year).unwrap_or(FIRST_YEAR);
    let indexed = index_to_baseline(sales, base_year);
    let (lo, hi) = padded(&indexed, 10.0);

    let mut chart = Chart::new(ChartKind::IndexLine, 640.0, 320.0, "Growth index line chart")
        .margin(Margin::new(30.0, 30.0, 40.0, 50.0))
        .title(format!("Global demand index ({base_year} = 100)"))
        .x_domain(FIRST_YEAR as f64, LAST_YEAR as f64)
        .y_domain(lo, hi)
        .data(
            indexed
                .iter()
                .map(|point| {
                    Datum::year(point).color(RUST).tooltip(
                        Tooltip::new(point.year.to_string())
                            .caption(format!("Index vs {base_year}"))
                            .line(point.value.to_string()),
                    )
                })
                .collect(),
        );
    chart.stroke = vec![GradientStop::new(0.0, NAVY, 1.0)];
    chart.snap = true;
    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use gse_data::Dataset;

    fn sales() -> Vec<YearValue> {
        Dataset::embedded().unwrap().global_sales().to_vec()
    }

    #[test]
    fn test_shock_callout_uses_computed_dip() {
        let chart = global_market(&sales(), MarketVariant::Shock);
        let callout = chart.callout.as_ref().unwrap();
        assert_eq!(callout.x, 2020.0);
        assert_eq!(callout.lines, vec!["Pandemic demand dip", "-11.5% vs 2019"]);
        assert_eq!(chart.area_opacity, Some(0.35));

        let growth = global_market(&sales(), MarketVariant::Growth);
        assert!(growth.callout.is_none());
        assert_eq!(growth.area_opacity, Some(0.55));
        assert_eq!(growth.data.len(), 9);
    }

    #[test]
    fn test_shock_without_2020_has_no_callout() {
        let series: Vec<YearValue> = sales().into_iter().filter(|p| p.year != 2020).collect();
        assert!(global_market(&series, MarketVariant::Shock).callout.is_none());
    }

    #[test]
    fn test_market_domain_is_padded() {
        let chart = global_market(&sales(), MarketVariant::Growth);
        let [lo, hi] = chart.y_domain.unwrap();
        assert_eq!(lo, 90.0);
        assert_eq!(hi, 194.0 + 10.0);
    }

    #[test]
    fn test_yoy_bars_color_declines() {
        let chart = yoy_growth(&sales());
        assert_eq!(chart.data.len(), 8);
        let dip = chart.data.iter().find(|d| d.key == "2020").unwrap();
        assert_eq!(dip.color.as_deref(), Some(RED));
        assert_eq!(dip.tooltip.as_ref().unwrap().lines, vec!["-11.5%"]);
        assert!(chart
            .data
            .iter()
            .filter(|d| d.key != "2020")
            .all(|d| d.color.as_deref() == Some(NAVY)));
        assert_eq!(chart.y_domain.unwrap()[0], -15.0);
    }

    #[test]
    fn test_yoy_handles_short_series() {
        let chart = yoy_growth(&[YearValue::new(2018, 100.0)]);
        assert!(chart.data.is_empty());
        assert_eq!(chart.y_domain, Some([-15.0, 10.0]));
    }

    #[test]
    fn test_yoy_skips_undefined_changes() {
        let series = vec![
            YearValue::new(2018, 0.0),
            YearValue::new(2019, 10.0),
            YearValue::new(2020, 11.0),
        ];
        let chart = yoy_growth(&series);
        assert_eq!(chart.data.len(), 1);
        assert_eq!(chart.data[0].key, "2020");
    }

    #[test]
    fn test_growth_index_snaps() {
        let chart = growth_index(&sales());
        assert!(chart.snap);
        assert_eq!(chart.data.len(), 9);
        let tips: Vec<&Tooltip> = chart.tooltips().collect();
        assert_eq!(tips[0].lines, vec!["100"]);
        assert_eq!(tips[8].lines, vec!["194"]);
        assert_eq!(tips[0].caption.as_deref(), Some("Index vs 2018"));
    }

    #[test]
    fn test_hero_has_no_tooltips() {
        let chart = hero_backdrop(&sales());
        assert_eq!(chart.tooltips().count(), 0);
        assert_eq!(chart.stroke.len(), 3);
        assert_eq!(chart.fill.len(), 2);
        assert!(chart.title.is_none());
    }

    #[test]
    fn test_empty_sales_do_not_panic() {
        let chart = global_market(&[], MarketVariant::Shock);
        assert!(chart.data.is_empty());
        assert!(chart.callout.is_none());
        assert!(growth_index(&[]).data.is_empty());
    }
}
