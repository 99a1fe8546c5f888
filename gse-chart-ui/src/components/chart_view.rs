//! Container a D3 renderer draws one chart into.
//!
//! Charts are laid out once per page, so the chart is rendered when the
//! component mounts and torn down (tooltip included) when it unmounts.

use dioxus::prelude::*;
use gse_viz::Chart;

use super::Legend;
use crate::js_bridge;

#[derive(Props, Clone, PartialEq)]
pub struct ChartViewProps {
    /// DOM id D3 renders into; unique on the page
    pub id: String,
    pub chart: Chart,
    /// Extra CSS class on the wrapper
    #[props(default = String::new())]
    pub class: String,
}

#[component]
pub fn ChartView(props: ChartViewProps) -> Element {
    let container_id = props.id.clone();
    let chart = props.chart.clone();
    use_effect(move || js_bridge::render_chart(&container_id, &chart));

    let drop_id = props.id.clone();
    use_drop(move || js_bridge::destroy_chart(&drop_id));

    rsx! {
        div {
            class: "figure {props.class}",
            div { id: "{props.id}", class: "chart" }
            if !props.chart.legend.is_empty() {
                Legend { items: props.chart.legend.clone() }
            }
        }
    }
}
