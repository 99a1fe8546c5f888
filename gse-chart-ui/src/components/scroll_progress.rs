//! Fixed reading-progress bar at the top of the page.
//!
//! Reads `AppState::page_progress` itself so a scroll frame re-renders only
//! this bar, not the page that hosts it.

use dioxus::prelude::*;

use crate::render::percent_width;
use crate::state::AppState;

#[component]
pub fn ScrollProgress() -> Element {
    let state = use_context::<AppState>();
    let width = percent_width((state.page_progress)());
    rsx! {
        div {
            class: "scroll-progress",
            "aria-hidden": "true",
            div { class: "scroll-progress__bar", style: "{width}" }
        }
    }
}
