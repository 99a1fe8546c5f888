//! Global Sneaker Economy 2018-2026
//!
//! A scrollytelling report on sports-footwear demand.
//!
//! Data flow:
//! 1. `gse-data` embeds the CSV fixtures; on mount they are parsed and validated.
//! 2. Every chart is laid out once into `gse_viz` charts (`report.rs`).
//! 3. A scroll script posts samples that pick the active story chapter and
//!    fill the progress bar.
//! 4. D3.js draws each chart and the world map through the JS bridge.

use std::rc::Rc;

use anyhow::Context;
use dioxus::prelude::*;
use gse_chart_ui::components::{ErrorDisplay, LoadingSpinner};
use gse_chart_ui::js_bridge;
use gse_chart_ui::state::AppState;
use gse_data::Dataset;

mod components;
mod content;
mod report;

use components::Report;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("main"))
        .launch(App);
}

fn load_dataset() -> anyhow::Result<Dataset> {
    Dataset::embedded().context("embedded report dataset failed validation")
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Parse the dataset once on mount ───
    use_effect(move || {
        match load_dataset() {
            Ok(dataset) => {
                state.dataset.set(Some(Rc::new(dataset)));
                js_bridge::init_charts();
            }
            Err(err) => {
                log::error!("[GSE] {err:#}");
                state.error_msg.set(Some(format!("{err:#}")));
            }
        }
        state.loading.set(false);
    });

    let dataset = state.dataset.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        if let Some(err) = state.error_msg.read().as_ref() {
            ErrorDisplay { message: err.clone() }
        }

        if *state.loading.read() {
            LoadingSpinner {}
        } else if let Some(dataset) = dataset {
            Report { dataset }
        }
    }
}
