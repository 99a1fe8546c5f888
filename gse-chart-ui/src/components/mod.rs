//! Reusable Dioxus RSX components for the sneaker report.

mod chart_view;
mod error_display;
mod legend;
mod loading_spinner;
mod scroll_progress;
mod world_map;

pub use chart_view::ChartView;
pub use error_display::ErrorDisplay;
pub use legend::{Legend, RampLegend};
pub use loading_spinner::LoadingSpinner;
pub use scroll_progress::ScrollProgress;
pub use world_map::WorldMap;
