//! Serializable chart descriptions handed to the D3 renderers.
//!
//! Layout functions in [`crate::charts`] decide what a chart shows: value
//! domains, colours, labels and the tooltip record of every datum. Scales,
//! shape generation and pointer handling run in the browser, in the script
//! named by [`ChartKind::renderer`].

use gse_data::YearValue;
use serde::Serialize;

use crate::hover::{Tooltip, POINTER_OFFSET};

/// Which D3 renderer draws a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Hero,
    Market,
    StackedArea,
    Donut,
    YoyBars,
    IndexLine,
    Heatmap,
    Waterfall,
    RankBump,
    Slope,
    Scatter,
    Lollipop,
    ShareBars,
    Radial,
    Sparkline,
}

impl ChartKind {
    pub const ALL: [ChartKind; 15] = [
        ChartKind::Hero,
        ChartKind::Market,
        ChartKind::StackedArea,
        ChartKind::Donut,
        ChartKind::YoyBars,
        ChartKind::IndexLine,
        ChartKind::Heatmap,
        ChartKind::Waterfall,
        ChartKind::RankBump,
        ChartKind::Slope,
        ChartKind::Scatter,
        ChartKind::Lollipop,
        ChartKind::ShareBars,
        ChartKind::Radial,
        ChartKind::Sparkline,
    ];

    /// Global JS function that draws this kind.
    pub fn renderer(self) -> &'static str {
        match self {
            ChartKind::Hero => "renderHeroChart",
            ChartKind::Market => "renderMarketChart",
            ChartKind::StackedArea => "renderStackedAreaChart",
            ChartKind::Donut => "renderDonutChart",
            ChartKind::YoyBars => "renderYoyBarChart",
            ChartKind::IndexLine => "renderIndexLineChart",
            ChartKind::Heatmap => "renderHeatmapChart",
            ChartKind::Waterfall => "renderWaterfallChart",
            ChartKind::RankBump => "renderRankBumpChart",
            ChartKind::Slope => "renderSlopeChart",
            ChartKind::Scatter => "renderScatterChart",
            ChartKind::Lollipop => "renderLollipopChart",
            ChartKind::ShareBars => "renderShareBarChart",
            ChartKind::Radial => "renderRadialChart",
            ChartKind::Sparkline => "renderSparklineChart",
        }
    }
}

/// Plot-area inset from the viewBox edges.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Margin {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// One data point as the renderer sees it.
///
/// `key` names the band, series or row the point belongs to. `y0` is the
/// second value of two-ended marks: the stack base, the waterfall start or
/// the 2018 end of a slope.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Datum {
    pub key: String,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y0: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
}

impl Datum {
    pub fn new(key: impl Into<String>, x: f64, y: f64) -> Self {
        Datum {
            key: key.into(),
            x,
            y,
            ..Datum::default()
        }
    }

    /// Point keyed by its year.
    pub fn year(point: &YearValue) -> Self {
        Datum::new(point.year.to_string(), point.year as f64, point.value)
    }

    pub fn from(mut self, y0: f64) -> Self {
        self.y0 = Some(y0);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn tooltip(mut self, tooltip: Tooltip) -> Self {
        self.tooltip = Some(tooltip);
        self
    }
}

/// Annular band of a donut; slices use `y` as their value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ring {
    pub inner: f64,
    pub outer: f64,
    pub opacity: f64,
    pub slices: Vec<Datum>,
}

/// Boxed note pointing at one data point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Callout {
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: String,
    pub opacity: f64,
}

impl GradientStop {
    pub fn new(offset: f64, color: impl Into<String>, opacity: f64) -> Self {
        GradientStop {
            offset,
            color: color.into(),
            opacity,
        }
    }
}

/// Entry of the HTML legend under a chart. Items without a colour are
/// shown as plain notes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendItem {
    pub label: String,
    pub color: Option<String>,
}

impl LegendItem {
    pub fn swatch(label: impl Into<String>, color: impl Into<String>) -> Self {
        LegendItem {
            label: label.into(),
            color: Some(color.into()),
        }
    }

    pub fn note(label: impl Into<String>) -> Self {
        LegendItem {
            label: label.into(),
            color: None,
        }
    }
}

/// Everything a renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub kind: ChartKind,
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub aria_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub data: Vec<Datum>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rings: Vec<Ring>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_domain: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_domain: Option<[f64; 2]>,
    /// Value range mapped onto the YlOrBr ramp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_domain: Option<[f64; 2]>,
    /// Horizontal gradient along the line.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stroke: Vec<GradientStop>,
    /// Vertical gradient under the line.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fill: Vec<GradientStop>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_tick_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_tick_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callout: Option<Callout>,
    /// Reference mark such as the waterfall total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Datum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hub_label: Option<String>,
    /// Hover snaps to the nearest `x` instead of following marks.
    pub snap: bool,
    pub tooltip_offset: f64,
    /// Drawn as HTML under the chart, not by the renderer.
    #[serde(skip)]
    pub legend: Vec<LegendItem>,
}

impl Chart {
    pub fn new(kind: ChartKind, width: f64, height: f64, aria_label: impl Into<String>) -> Self {
        Chart {
            kind,
            width,
            height,
            margin: Margin::default(),
            aria_label: aria_label.into(),
            title: None,
            data: Vec::new(),
            rings: Vec::new(),
            x_domain: None,
            y_domain: None,
            color_domain: None,
            stroke: Vec::new(),
            fill: Vec::new(),
            area_opacity: None,
            y_tick_suffix: None,
            x_tick_prefix: None,
            axis_label: None,
            callout: None,
            marker: None,
            hub_label: None,
            snap: false,
            tooltip_offset: POINTER_OFFSET,
            legend: Vec::new(),
        }
    }

    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn data(mut self, data: Vec<Datum>) -> Self {
        self.data = data;
        self
    }

    pub fn x_domain(mut self, lo: f64, hi: f64) -> Self {
        self.x_domain = Some([lo, hi]);
        self
    }

    pub fn y_domain(mut self, lo: f64, hi: f64) -> Self {
        self.y_domain = Some([lo, hi]);
        self
    }

    pub fn gradients(mut self, stroke: Vec<GradientStop>, fill: Vec<GradientStop>) -> Self {
        self.stroke = stroke;
        self.fill = fill;
        self
    }

    pub fn legend(mut self, legend: Vec<LegendItem>) -> Self {
        self.legend = legend;
        self
    }

    /// Tooltip records in draw order, ring slices included.
    pub fn tooltips(&self) -> impl Iterator<Item = &Tooltip> {
        self.data
            .iter()
            .chain(self.rings.iter().flat_map(|r| r.slices.iter()))
            .filter_map(|d| d.tooltip.as_ref())
    }

    /// Text labels drawn next to data points.
    pub fn labels(&self) -> Vec<&str> {
        self.data.iter().filter_map(|d| d.label.as_deref()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_names_are_unique() {
        let mut names: Vec<&str> = ChartKind::ALL.iter().map(|k| k.renderer()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ChartKind::ALL.len());
    }

    #[test]
    fn test_serializes_camel_case_without_empty_fields() {
        let chart = Chart::new(ChartKind::YoyBars, 520.0, 320.0, "bars")
            .margin(Margin::new(30.0, 24.0, 40.0, 50.0))
            .y_domain(-15.0, 10.0)
            .data(vec![Datum::new("2019", 2019.0, 4.2)
                .color("#1f3a5f")
                .tooltip(Tooltip::new("2019").line("4.2%"))]);
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["kind"], "yoyBars");
        assert_eq!(json["ariaLabel"], "bars");
        assert_eq!(json["yDomain"], serde_json::json!([-15.0, 10.0]));
        assert_eq!(json["tooltipOffset"], 12.0);
        assert_eq!(json["data"][0]["tooltip"]["lines"][0], "4.2%");
        assert!(json.get("rings").is_none());
        assert!(json.get("legend").is_none());
        assert!(json["data"][0].get("y0").is_none());
    }

    #[test]
    fn test_tooltips_include_ring_slices() {
        let mut chart = Chart::new(ChartKind::Donut, 320.0, 280.0, "donut");
        chart.rings.push(Ring {
            inner: 55.0,
            outer: 78.0,
            opacity: 0.45,
            slices: vec![Datum::new("Lifestyle", 0.0, 55.0).tooltip(Tooltip::new("Lifestyle"))],
        });
        assert_eq!(chart.tooltips().count(), 1);
    }
}
