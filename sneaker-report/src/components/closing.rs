//! Closing essay and methodology notes.

use dioxus::prelude::*;

use crate::content::{DRIVERS, METHODOLOGY};

#[component]
pub fn Closing() -> Element {
    rsx! {
        section {
            class: "closing",
            div {
                h2 { class: "display", "What drives the curve" }
                for paragraph in DRIVERS {
                    p { class: "body-copy", "{paragraph}" }
                }
            }
            div {
                class: "card",
                div { class: "eyebrow", "Methodology" }
                ul {
                    for note in METHODOLOGY {
                        li { "{note}" }
                    }
                }
            }
        }
    }
}
