//! Chart layouts and view state for the sneaker report.
//!
//! Layout functions turn dataset rows into serializable [`Chart`]
//! descriptions (domains, colours, labels and tooltip records) that the UI
//! crate hands to D3. The narrative state machine lives here too so it can
//! be tested without a browser.

pub mod chart;
pub mod charts;
pub mod format;
pub mod hover;
pub mod narrative;

pub use chart::{Callout, Chart, ChartKind, Datum, GradientStop, LegendItem, Margin, Ring};
pub use hover::{Tooltip, POINTER_OFFSET};
pub use narrative::{ChartKey, NarrativeConfig, NarrativeController, ScrollSample};
