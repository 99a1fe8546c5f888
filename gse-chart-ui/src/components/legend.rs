//! HTML legends drawn under a chart.

use dioxus::prelude::*;
use gse_viz::{GradientStop, LegendItem};
use gse_viz::format::coord;

#[derive(Props, Clone, PartialEq)]
pub struct LegendProps {
    pub items: Vec<LegendItem>,
}

/// Colour swatches with labels; items without a colour render as notes.
#[component]
pub fn Legend(props: LegendProps) -> Element {
    rsx! {
        div {
            class: "legend",
            for item in props.items {
                if let Some(color) = item.color {
                    span { class: "legend__item",
                        span { class: "legend__swatch", style: "background: {color};" }
                        "{item.label}"
                    }
                } else {
                    span { class: "legend__note", "{item.label}" }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct RampLegendProps {
    pub stops: Vec<GradientStop>,
    #[props(default = "Low".to_string())]
    pub low: String,
    #[props(default = "High".to_string())]
    pub high: String,
}

/// Continuous colour ramp between two labels.
#[component]
pub fn RampLegend(props: RampLegendProps) -> Element {
    let stops: Vec<String> = props
        .stops
        .iter()
        .map(|s| format!("{} {}%", s.color, coord(s.offset * 100.0)))
        .collect();
    let background = format!("linear-gradient(90deg, {})", stops.join(", "));

    rsx! {
        div {
            class: "ramp-legend",
            span { "{props.low}" }
            span { class: "ramp-legend__bar", style: "background: {background};" }
            span { "{props.high}" }
        }
    }
}
