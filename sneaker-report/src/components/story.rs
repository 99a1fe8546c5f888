//! Scroll-driven story: chapter cards on the left, a sticky panel on the right.
//!
//! The active chapter comes from `AppState::narrative`, which the scroll
//! hook updates. Panel theme, chart, badge and annotation are each wrapped
//! in a single-item keyed list so a chapter change remounts them and replays
//! their fade.

use std::iter;

use dioxus::prelude::*;
use gse_chart_ui::components::{ChartView, WorldMap};
use gse_chart_ui::render::{fade_style, percent_height};
use gse_chart_ui::state::{AppState, Shared};
use gse_viz::ChartKey;

use crate::content::{panel_background, CHAPTERS};
use crate::report::ReportCharts;

const STORY_MAP_ID: &str = "story-world-map";

#[derive(Props, Clone, PartialEq)]
pub struct StorySectionProps {
    pub charts: Shared<ReportCharts>,
}

#[component]
pub fn StorySection(props: StorySectionProps) -> Element {
    let state = use_context::<AppState>();
    let narrative = state.narrative.read().clone();
    let active = narrative.active();
    let key = narrative.chart_key();
    let config = *narrative.config();
    let rail = percent_height(narrative.progress_percent());

    let annotations = props.charts.headlines.annotations();
    let annotation = annotations.get(active).cloned();
    let badge = CHAPTERS.get(active).map(|c| c.label).unwrap_or_default();

    let theme_style = format!("{} {}", panel_background(active), fade_style(config.panel_fade_ms));
    let chart_style = fade_style(config.chart_fade_ms);
    let caption_style = fade_style(config.caption_fade_ms);

    rsx! {
        section {
            class: "story",
            div {
                class: "story__steps",
                div { class: "story__rail" }
                div { class: "story__rail-fill", style: "{rail}" }
                for (index, chapter) in CHAPTERS.iter().enumerate() {
                    div {
                        key: "{chapter.title}",
                        class: "story__step-wrap",
                        div {
                            class: if index == active { "story__badge active" } else { "story__badge" },
                            {format!("{:02}", index + 1)}
                        }
                        div {
                            class: if index == active { "story__step active" } else { "story__step" },
                            "data-chapter": "{index}",
                            p { class: "eyebrow", "{chapter.label}" }
                            h3 { class: "display", "{chapter.title}" }
                            p { class: "body-copy", "{chapter.copy}" }
                        }
                    }
                }
            }
            div {
                class: "story__panel-wrap",
                div {
                    class: "story__panel",
                    for chapter in iter::once(active) {
                        div { key: "bg-{chapter}", class: "story__theme", style: "{theme_style}" }
                    }
                    div {
                        class: "story__panel-body",
                        div {
                            class: "story__chart",
                            for chart in iter::once(key.as_str()) {
                                div {
                                    key: "{chart}",
                                    class: "story__chart-frame",
                                    style: "{chart_style}",
                                    {story_chart(key, &props.charts)}
                                }
                            }
                            for chapter in iter::once(active) {
                                div {
                                    key: "badge-{chapter}",
                                    class: "story__chip",
                                    style: "{caption_style}",
                                    "{badge}"
                                }
                            }
                        }
                        if let Some(annotation) = annotation {
                            for chapter in iter::once(active) {
                                div {
                                    key: "annotation-{chapter}",
                                    class: "story__annotation",
                                    style: "{caption_style}",
                                    div { class: "eyebrow", "Chapter takeaway" }
                                    div { class: "story__annotation-title", "{annotation.title}" }
                                    div { class: "story__annotation-value", "{annotation.value}" }
                                    div { class: "story__annotation-detail", "{annotation.detail}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn story_chart(key: ChartKey, charts: &ReportCharts) -> Element {
    let chart = match key {
        ChartKey::Growth => &charts.growth,
        ChartKey::Shock => &charts.shock,
        ChartKey::Categories => &charts.categories,
        ChartKey::Index => &charts.index,
        ChartKey::Heatmap => &charts.heatmap,
        ChartKey::Map => {
            return rsx! {
                WorldMap { id: STORY_MAP_ID.to_string(), countries: charts.countries.clone() }
            };
        }
    };
    rsx! {
        ChartView { id: format!("story-chart-{}", key.as_str()), chart: chart.clone() }
    }
}
