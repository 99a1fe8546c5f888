//! Performance versus lifestyle category charts.

use gse_data::{CategorySharePoint, FIRST_YEAR, LAST_YEAR};

use super::{extent, NAVY, RUST};
use crate::chart::{Chart, ChartKind, Datum, LegendItem, Margin, Ring};
use crate::format::billions;
use crate::hover::Tooltip;

pub const PERFORMANCE: &str = NAVY;
pub const LIFESTYLE: &str = RUST;

fn legend() -> Vec<LegendItem> {
    vec![
        LegendItem::swatch("Performance", PERFORMANCE),
        LegendItem::swatch("Lifestyle", LIFESTYLE),
    ]
}

/// Stacked areas of performance (bottom) and lifestyle (top) sales.
///
/// Each datum carries its stack base in `y0`; the renderer groups by key.
pub fn category_evolution(series: &[CategorySharePoint]) -> Chart {
    let (_, y_max) = extent(series.iter().map(|p| p.total())).unwrap_or((0.0, 0.0));

    let performance = series.iter().map(|p| {
        Datum::new("Performance", p.year as f64, p.performance)
            .from(0.0)
            .color(PERFORMANCE)
            .opacity(0.82)
    });
    let lifestyle = series.iter().map(|p| {
        Datum::new("Lifestyle", p.year as f64, p.total())
            .from(p.performance)
            .color(LIFESTYLE)
            .opacity(0.82)
    });

    Chart::new(ChartKind::StackedArea, 760.0, 360.0, "Category evolution stacked area chart")
        .margin(Margin::new(40.0, 40.0, 50.0, 60.0))
        .title("Category mix (USD billions)")
        .x_domain(FIRST_YEAR as f64, LAST_YEAR as f64)
        .y_domain(0.0, y_max + 12.0)
        .data(performance.chain(lifestyle).collect())
        .legend(legend())
}

/// Two concentric rings: 2018 inside, 2026 outside.
pub fn category_donut(series: &[CategorySharePoint]) -> Chart {
    let mut chart = Chart::new(ChartKind::Donut, 320.0, 280.0, "Category mix donut chart")
        .title(format!("Category mix: {FIRST_YEAR} vs {LAST_YEAR}"));

    // outer ring first so the inner ring sits on top
    let rings = [
        (LAST_YEAR, 85.0, 120.0, 0.9),
        (FIRST_YEAR, 55.0, 78.0, 0.45),
    ];
    for (year, inner, outer, opacity) in rings {
        let Some(row) = series.iter().find(|p| p.year == year) else {
            continue;
        };
        let slices = [
            ("Performance", row.performance, PERFORMANCE),
            ("Lifestyle", row.lifestyle, LIFESTYLE),
        ]
        .into_iter()
        .map(|(label, value, color)| {
            Datum::new(label, year as f64, value).color(color).tooltip(
                Tooltip::new(label)
                    .caption(format!("{year} value"))
                    .line(billions(value)),
            )
        })
        .collect();
        chart.rings.push(Ring {
            inner,
            outer,
            opacity,
            slices,
        });
    }

    chart.hub_label = Some(format!("{FIRST_YEAR} \u{2194} {LAST_YEAR}"));
    let mut key = legend();
    key.push(LegendItem::note(format!("Inner ring: {FIRST_YEAR}")));
    key.push(LegendItem::note(format!("Outer ring: {LAST_YEAR}")));
    chart.legend(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gse_data::Dataset;

    fn series() -> Vec<CategorySharePoint> {
        Dataset::embedded().unwrap().categories().to_vec()
    }

    #[test]
    fn test_evolution_stacks_lifestyle_on_performance() {
        let chart = category_evolution(&series());
        assert_eq!(chart.data.len(), 18);
        assert_eq!(chart.legend.len(), 2);
        let first_lifestyle = chart.data.iter().find(|d| d.key == "Lifestyle").unwrap();
        let first_performance = &chart.data[0];
        assert_eq!(first_lifestyle.y0, Some(first_performance.y));
        assert_eq!(first_performance.y0, Some(0.0));
        let total_max = series().iter().map(|p| p.total()).fold(0.0, f64::max);
        assert_eq!(chart.y_domain.unwrap()[1], total_max + 12.0);
    }

    #[test]
    fn test_donut_rings_and_tooltips() {
        let chart = category_donut(&series());
        assert_eq!(chart.rings.len(), 2);
        assert_eq!(chart.rings[0].outer, 120.0);
        let tips: Vec<&Tooltip> = chart.tooltips().collect();
        assert_eq!(tips.len(), 4);
        assert_eq!(tips[0].caption.as_deref(), Some("2026 value"));
        assert_eq!(tips[1].lines, vec!["$116.0B"]);
        assert_eq!(tips[2].caption.as_deref(), Some("2018 value"));
        assert_eq!(tips[2].lines, vec!["$55.0B"]);
        assert_eq!(chart.legend.len(), 4);
    }

    #[test]
    fn test_donut_skips_missing_year() {
        let only_2026: Vec<CategorySharePoint> =
            series().into_iter().filter(|p| p.year == 2026).collect();
        assert_eq!(category_donut(&only_2026).tooltips().count(), 2);
        assert_eq!(category_donut(&[]).tooltips().count(), 0);
    }
}
