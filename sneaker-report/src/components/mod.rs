//! Page sections of the report.

mod closing;
mod hero;
mod page;
mod sections;
mod story;
mod summary;

pub use closing::Closing;
pub use hero::{Hero, Masthead};
pub use page::Report;
pub use sections::{CreativeLab, PulseCheck, SignalRoom, Workbench};
pub use story::StorySection;
pub use summary::SummaryStats;
