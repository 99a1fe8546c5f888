//! Row of headline figures under the hero.

use dioxus::prelude::*;

use crate::content::Stat;

#[derive(Props, Clone, PartialEq)]
pub struct SummaryStatsProps {
    pub stats: Vec<Stat>,
}

#[component]
pub fn SummaryStats(props: SummaryStatsProps) -> Element {
    rsx! {
        section {
            class: "summary",
            for stat in props.stats {
                div {
                    key: "{stat.label}",
                    class: "summary__card",
                    div { class: "eyebrow", "{stat.label}" }
                    div { class: "summary__value", "{stat.value}" }
                    div { class: "summary__detail", "{stat.detail}" }
                }
            }
        }
    }
}
