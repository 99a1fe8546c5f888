//! Tooltip records attached to chart data.

use serde::Serialize;

/// Distance between the pointer and the tooltip's top-left corner.
pub const POINTER_OFFSET: f64 = 12.0;

/// Text shown for one hovered datum.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Tooltip {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub lines: Vec<String>,
}

impl Tooltip {
    pub fn new(title: impl Into<String>) -> Self {
        Tooltip {
            title: title.into(),
            ..Tooltip::default()
        }
    }

    /// Muted line under the title.
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }
}
