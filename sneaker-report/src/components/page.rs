//! The report page once the dataset is available.

use std::rc::Rc;

use dioxus::prelude::*;
use gse_chart_ui::components::ScrollProgress;
use gse_chart_ui::scroll::use_scroll_sync;
use gse_chart_ui::state::{AppState, Shared};
use gse_data::Dataset;

use super::{Closing, CreativeLab, Hero, Masthead, PulseCheck, SignalRoom, StorySection, SummaryStats, Workbench};
use crate::report::ReportCharts;

#[derive(Props, Clone, PartialEq)]
pub struct ReportProps {
    pub dataset: Rc<Dataset>,
}

#[component]
pub fn Report(props: ReportProps) -> Element {
    let state = use_context::<AppState>();
    use_scroll_sync(state);

    let dataset = props.dataset.clone();
    let charts = use_hook(move || Shared::new(ReportCharts::build(&dataset)));

    rsx! {
        div {
            class: "report",
            ScrollProgress {}
            Masthead {}
            Hero { charts: charts.clone() }
            SummaryStats { stats: charts.headlines.summary() }
            StorySection { charts: charts.clone() }
            Workbench { charts: charts.clone() }
            CreativeLab { charts: charts.clone() }
            SignalRoom { charts: charts.clone() }
            PulseCheck { charts: charts.clone() }
            Closing {}
        }
    }
}
