//! Per-country paint for the world map.
//!
//! Geometry, projection and the colour ramp stay on the JavaScript side;
//! this module decides which value each named country shows, how it is
//! outlined and what its tooltip says.

use std::collections::BTreeMap;

use gse_data::{CountryMetric, Region, LAST_YEAR};
use serde::Serialize;

use super::extent;
use crate::chart::{GradientStop, LegendItem};
use crate::format::fixed;
use crate::hover::Tooltip;

pub const MAP_WIDTH: f64 = 760.0;
pub const MAP_HEIGHT: f64 = 420.0;
pub const MAP_BACKGROUND: &str = "#f7f1ea";

/// Years the map can be toggled between.
pub const MAP_YEARS: [i32; 2] = [2018, LAST_YEAR];

pub const FALLBACK_FILL: &str = "#e6dfd5";
const FALLBACK_STROKE: &str = "#cbbfb2";

/// Paint of one country. A `value` is coloured on the layer's ramp;
/// without one the country gets the fallback fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryStyle {
    pub value: Option<f64>,
    pub stroke: String,
    pub stroke_width: f64,
    pub tooltip: Tooltip,
}

impl CountryStyle {
    fn fallback() -> Self {
        CountryStyle {
            value: None,
            stroke: FALLBACK_STROKE.to_string(),
            stroke_width: 0.4,
            tooltip: Tooltip::new("")
                .caption("Emerging market")
                .line("Limited data"),
        }
    }
}

/// Paint for every known country in one year, keyed by country name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoroplethLayer {
    pub year: i32,
    /// Sales range mapped onto the YlOrBr ramp.
    pub domain: [f64; 2],
    pub fallback_fill: String,
    pub countries: BTreeMap<String, CountryStyle>,
    pub fallback: CountryStyle,
}

impl ChoroplethLayer {
    /// Colour countries by their sales in `year`.
    ///
    /// A country without a positive value keeps its region outline but is
    /// filled like an unknown country.
    pub fn build(countries: &[CountryMetric], year: i32) -> Self {
        let values: Vec<(&CountryMetric, f64)> = countries
            .iter()
            .map(|c| (c, c.sales_for(year).unwrap_or(0.0)))
            .collect();
        let (lo, hi) = extent(values.iter().map(|(_, v)| *v)).unwrap_or((0.0, 0.0));

        let styles = values
            .into_iter()
            .map(|(country, value)| {
                let known = value > 0.0;
                let line = if known {
                    format!("{}B", fixed(value, 1))
                } else {
                    "Limited data".to_string()
                };
                let style = CountryStyle {
                    value: known.then_some(value),
                    stroke: country.region.color().to_string(),
                    stroke_width: 0.7,
                    tooltip: Tooltip::new(&country.name)
                        .caption(country.region.label())
                        .line(line),
                };
                (country.name.clone(), style)
            })
            .collect();

        log::debug!("[GSE] choropleth layer for {year}: {lo:.1}..{hi:.1}");
        ChoroplethLayer {
            year,
            domain: [lo, hi],
            fallback_fill: FALLBACK_FILL.to_string(),
            countries: styles,
            fallback: CountryStyle::fallback(),
        }
    }

    /// Style for a map feature; unknown names get the fallback titled with
    /// the feature's own name.
    pub fn style_for(&self, name: &str) -> CountryStyle {
        match self.countries.get(name) {
            Some(style) => style.clone(),
            None => {
                let mut style = self.fallback.clone();
                style.tooltip.title = name.to_string();
                style
            }
        }
    }

    /// Low-to-high ramp shown under the map.
    pub fn legend_stops() -> Vec<GradientStop> {
        vec![
            GradientStop::new(0.0, "#f7e7c1", 1.0),
            GradientStop::new(0.5, "#e39c4f", 1.0),
            GradientStop::new(1.0, "#8b3d21", 1.0),
        ]
    }

    pub fn region_key() -> Vec<LegendItem> {
        Region::ALL
            .iter()
            .map(|r| LegendItem::swatch(r.label(), r.color()))
            .collect()
    }
}
