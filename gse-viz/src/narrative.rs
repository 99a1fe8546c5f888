//! Chapter selection for the scroll-driven story panel.

use serde::Deserialize;

/// Chart shown in the sticky panel for a chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKey {
    Growth,
    Shock,
    Map,
    Categories,
    Index,
    Heatmap,
}

impl ChartKey {
    /// Chart per chapter, in story order.
    pub const STORY: [ChartKey; 6] = [
        ChartKey::Growth,
        ChartKey::Shock,
        ChartKey::Map,
        ChartKey::Categories,
        ChartKey::Index,
        ChartKey::Heatmap,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChartKey::Growth => "growth",
            ChartKey::Shock => "shock",
            ChartKey::Map => "map",
            ChartKey::Categories => "categories",
            ChartKey::Index => "index",
            ChartKey::Heatmap => "heatmap",
        }
    }

    /// Chart for chapter `index`; falls back to the first chart.
    pub fn for_chapter(index: usize) -> ChartKey {
        ChartKey::STORY
            .get(index)
            .copied()
            .unwrap_or(ChartKey::Growth)
    }
}

/// Timing and activation settings for the story panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NarrativeConfig {
    /// Fraction of the viewport height a chapter top must cross to activate.
    pub activation_line: f64,
    pub panel_fade_ms: u32,
    pub chart_fade_ms: u32,
    pub caption_fade_ms: u32,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        NarrativeConfig {
            activation_line: 0.55,
            panel_fade_ms: 600,
            chart_fade_ms: 350,
            caption_fade_ms: 300,
        }
    }
}

/// One reading of the page scroll position, posted from the browser.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollSample {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
    pub viewport_height: f64,
    /// Top edge of each chapter section, relative to the viewport.
    #[serde(default)]
    pub chapter_tops: Vec<f64>,
}

impl ScrollSample {
    /// Fraction of the document scrolled, in `[0, 1]`. A page that does not
    /// scroll reports 0.
    pub fn page_progress(&self) -> f64 {
        let scrollable = self.scroll_height - self.client_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.scroll_top / scrollable).clamp(0.0, 1.0)
    }

    /// Last chapter whose top has crossed the activation line, or 0 when
    /// none has.
    pub fn reached_chapter(&self, activation_line: f64) -> usize {
        let line = self.viewport_height * activation_line;
        self.chapter_tops
            .iter()
            .rposition(|&top| top <= line)
            .unwrap_or(0)
    }
}

/// Tracks the active chapter.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrativeController {
    active: usize,
    chapter_count: usize,
    config: NarrativeConfig,
}

impl NarrativeController {
    pub fn new(chapter_count: usize) -> Self {
        Self::with_config(chapter_count, NarrativeConfig::default())
    }

    pub fn with_config(chapter_count: usize, config: NarrativeConfig) -> Self {
        NarrativeController {
            active: 0,
            chapter_count,
            config,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn chapter_count(&self) -> usize {
        self.chapter_count
    }

    pub fn config(&self) -> &NarrativeConfig {
        &self.config
    }

    pub fn chart_key(&self) -> ChartKey {
        ChartKey::for_chapter(self.active)
    }

    /// Make chapter `index` active. Out-of-range indices are ignored.
    /// Returns true when the active chapter changed.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.chapter_count || index == self.active {
            return false;
        }
        log::debug!("[GSE] chapter {} -> {}", self.active, index);
        self.active = index;
        true
    }

    /// Derive the active chapter from a scroll sample. The same sample always
    /// yields the same chapter.
    pub fn observe(&mut self, sample: &ScrollSample) -> bool {
        let reached = sample.reached_chapter(self.config.activation_line);
        self.activate(reached.min(self.chapter_count.saturating_sub(1)))
    }

    /// Height of the progress rail, 0 to 100.
    pub fn progress_percent(&self) -> f64 {
        if self.chapter_count <= 1 {
            return 0.0;
        }
        self.active as f64 / (self.chapter_count - 1) as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(tops: &[f64]) -> ScrollSample {
        ScrollSample {
            scroll_top: 0.0,
            scroll_height: 4000.0,
            client_height: 1000.0,
            viewport_height: 1000.0,
            chapter_tops: tops.to_vec(),
        }
    }

    #[test]
    fn test_initial_state() {
        let controller = NarrativeController::new(6);
        assert_eq!(controller.active(), 0);
        assert_eq!(controller.chart_key(), ChartKey::Growth);
        assert_eq!(controller.progress_percent(), 0.0);
    }

    #[test]
    fn test_activate_out_of_range_ignored() {
        let mut controller = NarrativeController::new(6);
        assert!(controller.activate(3));
        assert_eq!(controller.chart_key(), ChartKey::Categories);
        assert!(!controller.activate(6));
        assert!(!controller.activate(usize::MAX));
        assert_eq!(controller.active(), 3);
        assert!(!controller.activate(3));
    }

    #[test]
    fn test_progress_percent() {
        let mut controller = NarrativeController::new(6);
        controller.activate(5);
        assert_eq!(controller.progress_percent(), 100.0);
        controller.activate(1);
        assert_eq!(controller.progress_percent(), 20.0);

        let mut single = NarrativeController::new(1);
        single.activate(0);
        assert_eq!(single.progress_percent(), 0.0);
    }

    #[test]
    fn test_observe_picks_last_reached_chapter() {
        let mut controller = NarrativeController::new(6);
        // line sits at 550px
        let s = sample(&[-900.0, -300.0, 200.0, 550.0, 900.0, 1500.0]);
        assert!(controller.observe(&s));
        assert_eq!(controller.active(), 3);
        assert_eq!(controller.chart_key(), ChartKey::Categories);
    }

    #[test]
    fn test_observe_is_deterministic() {
        let s = sample(&[-400.0, 100.0, 700.0, 1300.0, 1900.0, 2500.0]);
        let mut a = NarrativeController::new(6);
        let mut b = NarrativeController::new(6);
        b.activate(5);
        a.observe(&s);
        b.observe(&s);
        assert_eq!(a.active(), 1);
        assert_eq!(b.active(), 1);
        // re-delivery changes nothing
        assert!(!a.observe(&s));
        assert_eq!(a.active(), 1);
    }

    #[test]
    fn test_observe_before_first_chapter() {
        let mut controller = NarrativeController::new(6);
        controller.activate(2);
        controller.observe(&sample(&[800.0, 1400.0, 2000.0, 2600.0, 3200.0, 3800.0]));
        assert_eq!(controller.active(), 0);
        controller.observe(&sample(&[]));
        assert_eq!(controller.active(), 0);
    }

    #[test]
    fn test_page_progress() {
        let mut s = sample(&[]);
        s.scroll_top = 1500.0;
        assert_eq!(s.page_progress(), 0.5);
        s.scroll_top = 9000.0;
        assert_eq!(s.page_progress(), 1.0);
        s.scroll_height = 1000.0;
        assert_eq!(s.page_progress(), 0.0);
    }

    #[test]
    fn test_chart_keys() {
        let keys: Vec<&str> = ChartKey::STORY.iter().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["growth", "shock", "map", "categories", "index", "heatmap"]);
        assert_eq!(ChartKey::for_chapter(42), ChartKey::Growth);
    }

    #[test]
    fn test_sample_from_browser_json() {
        let json = r#"{"scrollTop":10,"scrollHeight":2000,"clientHeight":800,"viewportHeight":800,"chapterTops":[1,2]}"#;
        let s: ScrollSample = serde_json::from_str(json).unwrap();
        assert_eq!(s.chapter_tops, vec![1.0, 2.0]);
        assert_eq!(s.viewport_height, 800.0);
    }
}
