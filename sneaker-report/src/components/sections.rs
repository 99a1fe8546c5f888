//! Chart grids after the story.

use dioxus::prelude::*;
use gse_chart_ui::components::ChartView;
use gse_chart_ui::state::Shared;
use gse_viz::format::billions;

use crate::content::{SectionIntro, CREATIVE_LAB, PULSE_CHECK, SIGNAL_ROOM, WORKBENCH};
use crate::report::ReportCharts;

#[derive(Props, Clone, PartialEq)]
pub struct SectionProps {
    pub charts: Shared<ReportCharts>,
}

fn intro(copy: &SectionIntro) -> Element {
    rsx! {
        div {
            class: "section-intro",
            p { class: "eyebrow", "{copy.eyebrow}" }
            h2 { class: "display", "{copy.title}" }
            p { class: "body-copy", "{copy.body}" }
        }
    }
}

#[component]
pub fn Workbench(props: SectionProps) -> Element {
    let charts = props.charts;
    rsx! {
        section {
            class: "grid-section tinted",
            {intro(&WORKBENCH)}
            div {
                class: "chart-grid two",
                div { class: "card", ChartView { id: "grid-share-bars".to_string(), chart: charts.share_bars.clone() } }
                div { class: "card", ChartView { id: "grid-yoy".to_string(), chart: charts.yoy.clone() } }
                div { class: "card", ChartView { id: "grid-scatter".to_string(), chart: charts.scatter.clone() } }
                div { class: "card", ChartView { id: "grid-slope".to_string(), chart: charts.slope.clone() } }
            }
        }
    }
}

#[component]
pub fn CreativeLab(props: SectionProps) -> Element {
    let charts = props.charts;
    rsx! {
        section {
            class: "grid-section",
            {intro(&CREATIVE_LAB)}
            div {
                class: "chart-grid three",
                div { class: "card", ChartView { id: "grid-donut".to_string(), chart: charts.donut.clone() } }
                div { class: "card", ChartView { id: "grid-rank-bump".to_string(), chart: charts.rank_bump.clone() } }
                div { class: "card", ChartView { id: "grid-lollipop".to_string(), chart: charts.lollipop.clone() } }
            }
        }
    }
}

#[component]
pub fn SignalRoom(props: SectionProps) -> Element {
    let charts = props.charts;
    rsx! {
        section {
            class: "grid-section tinted",
            {intro(&SIGNAL_ROOM)}
            div { class: "card", ChartView { id: "grid-heatmap".to_string(), chart: charts.heatmap.clone() } }
            div {
                class: "chart-grid two",
                div { class: "card", ChartView { id: "grid-waterfall".to_string(), chart: charts.waterfall.clone() } }
                div { class: "card", ChartView { id: "grid-radial".to_string(), chart: charts.radial.clone() } }
            }
        }
    }
}

#[component]
pub fn PulseCheck(props: SectionProps) -> Element {
    let charts = props.charts;
    rsx! {
        section {
            class: "grid-section",
            {intro(&PULSE_CHECK)}
            div {
                class: "chart-grid pulse",
                div { class: "card", ChartView { id: "grid-index".to_string(), chart: charts.index.clone() } }
                div {
                    class: "sparklines",
                    for spark in charts.sparklines.iter() {
                        div {
                            key: "{spark.region}",
                            class: "sparkline-card",
                            div { class: "eyebrow", "{spark.region}" }
                            div { class: "sparkline-card__value", {billions(spark.latest)} }
                            ChartView {
                                id: format!("sparkline-{}", spark.region.slug()),
                                chart: spark.chart.clone(),
                                class: "sparkline",
                            }
                        }
                    }
                }
            }
        }
    }
}
