//! Page masthead and the opening hero.

use dioxus::prelude::*;
use gse_chart_ui::components::ChartView;
use gse_chart_ui::state::Shared;
use gse_data::{FIRST_YEAR, LAST_YEAR};

use crate::content::HIGHLIGHTS;
use crate::report::ReportCharts;

#[component]
pub fn Masthead() -> Element {
    rsx! {
        div {
            class: "masthead",
            header {
                span { "Global Sneaker Economy" }
                span { "{FIRST_YEAR}\u{2013}{LAST_YEAR}" }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct HeroProps {
    pub charts: Shared<ReportCharts>,
}

#[component]
pub fn Hero(props: HeroProps) -> Element {
    let headlines = &props.charts.headlines;
    let net_growth = headlines.net_growth_label();
    let fastest = headlines.fastest_name();

    rsx! {
        section {
            class: "hero",
            div {
                class: "hero__backdrop",
                ChartView { id: "hero-backdrop".to_string(), chart: props.charts.hero.clone() }
            }
            div { class: "hero__veil" }
            div {
                class: "hero__content",
                div {
                    p { class: "eyebrow", "Special Report" }
                    h1 { class: "display", "How the World Buys Sports Footwear ({FIRST_YEAR}\u{2013}{LAST_YEAR})" }
                    p {
                        class: "hero__lede",
                        "A scrollytelling look at the data, from the pandemic dip to the regional surge rewriting the sneaker playbook."
                    }
                    div {
                        class: "hero__stats",
                        HeroStat { label: "Net growth".to_string(), value: net_growth }
                        HeroStat { label: "Fastest market".to_string(), value: fastest }
                        HeroStat { label: "Peak year".to_string(), value: LAST_YEAR.to_string() }
                    }
                    div {
                        class: "hero__cue",
                        span { "Scroll to explore" }
                        span { class: "scroll-cue" }
                    }
                }
                div {
                    class: "card hero__highlights",
                    div { class: "eyebrow", "Report highlights" }
                    ul {
                        for item in HIGHLIGHTS {
                            li { "{item}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HeroStat(label: String, value: String) -> Element {
    rsx! {
        div {
            div { class: "eyebrow", "{label}" }
            div { class: "hero__stat-value", "{value}" }
        }
    }
}
