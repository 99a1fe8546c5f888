//! Editorial copy and the headline numbers derived from the dataset.

use gse_data::{CountryMetric, Dataset, Region, FIRST_YEAR, LAST_YEAR};
use gse_metrics::categories::category_share;
use gse_metrics::{
    change_in_year, fastest_growing, highest_per_capita, index_to_baseline, region_totals,
    total_growth_percent,
};
use gse_viz::format::{fixed, signed_billions, signed_percent};

pub const PANDEMIC_YEAR: i32 = 2020;
const INDEX_MILESTONE_YEAR: i32 = 2024;

pub struct Chapter {
    pub label: &'static str,
    pub title: &'static str,
    pub copy: &'static str,
}

pub const CHAPTERS: [Chapter; 6] = [
    Chapter {
        label: "Chapter 01",
        title: "Market growth over time",
        copy: "Sales climbed steadily from 2018 through 2019, then re-accelerated after a short shock. The line becomes a volume story as the decade matures.",
    },
    Chapter {
        label: "Chapter 02",
        title: "Pandemic shock",
        copy: "In 2020, global demand slipped sharply as retail froze. Recovery arrived fast with athleisure, e-commerce, and stimulus-fueled casualization.",
    },
    Chapter {
        label: "Chapter 03",
        title: "Regional power shift",
        copy: "Asia-Pacific carries the growth engine by 2026. The map highlights where momentum concentrates, a shift that reshapes distribution and design bets.",
    },
    Chapter {
        label: "Chapter 04",
        title: "Category evolution",
        copy: "Performance stays resilient, but lifestyle becomes the volume driver. The category mix tells a story of everyday wear and wellness culture.",
    },
    Chapter {
        label: "Chapter 05",
        title: "Momentum index",
        copy: "Indexed to 2018, global demand breaks through the 170 mark by 2024. The recovery wasn't just a bounce; it reset the baseline.",
    },
    Chapter {
        label: "Chapter 06",
        title: "Heatmap of momentum",
        copy: "Regional heat intensifies late in the cycle. Asia-Pacific and North America widen the gap while emerging regions compress the mid-pack.",
    },
];

/// Story panel background per chapter: gradient start and end (via white).
pub const PANEL_THEMES: [(&str, &str); 6] = [
    ("#fff7e6", "#f5ede2"),
    ("#fbeae4", "#f5efe8"),
    ("#eef4ff", "#f3ece4"),
    ("#f6f0ff", "#f6efe5"),
    ("#eaf6f6", "#f4eee6"),
    ("#f3f0e8", "#f8f2e8"),
];

pub fn panel_background(chapter: usize) -> String {
    let (from, to) = PANEL_THEMES.get(chapter).copied().unwrap_or(PANEL_THEMES[0]);
    format!("background: linear-gradient(135deg, {from}, #ffffff, {to});")
}

pub const HIGHLIGHTS: [&str; 4] = [
    "Direct-to-consumer expands margins and velocity.",
    "Lifestyle volume overtakes pure performance by mid-cycle.",
    "Asia-Pacific adds more than $16B in new demand.",
    "Growth markets outpace mature regions 2:1.",
];

pub const METHODOLOGY: [&str; 3] = [
    "Data compiled from industry reports and modeled for 2018\u{2013}2026.",
    "Values shown in USD billions, with directional signals.",
    "Regional shifts based on composite demand indicators.",
];

pub const DRIVERS: [&str; 2] = [
    "The boom is not a single story. Performance demand stays resilient thanks to running, training, and team sports. Lifestyle growth is powered by everyday wear, collaborations, and the expansion of sneaker culture in emerging cities.",
    "Distribution shifts are just as important. Direct-to-consumer channels and regionalized assortments let brands move faster in the markets that are adding the most incremental volume.",
];

/// Intro block of one of the chart-grid sections.
pub struct SectionIntro {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const WORKBENCH: SectionIntro = SectionIntro {
    eyebrow: "Analyst workbench",
    title: "Additional views on the global sneaker economy",
    body: "Four extra lenses that round out the story: regional contribution, per-capita intensity, market trajectories, and year-over-year momentum. Together with the scrollytelling chapter above, the report now includes eight distinct data visualizations.",
};

pub const CREATIVE_LAB: SectionIntro = SectionIntro {
    eyebrow: "Creative lab",
    title: "Alternative visuals for the same story",
    body: "These views push the visual language further: a dual-ring donut for category mix, a regional bump chart, and a lollipop ranking of the fastest growers.",
};

pub const SIGNAL_ROOM: SectionIntro = SectionIntro {
    eyebrow: "Signal room",
    title: "Pattern discovery views",
    body: "A heatmap surfaces momentum, a waterfall shows which regions fuel the growth jump, and a radial chart emphasizes per-capita intensity.",
};

pub const PULSE_CHECK: SectionIntro = SectionIntro {
    eyebrow: "Pulse check",
    title: "Quick-read signals by region",
    body: "A demand index line to show macro cadence and a set of regional sparklines that reveal how each territory accelerates through the cycle.",
};

/// Headline figure with a label and a supporting line.
#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub detail: String,
}

impl Stat {
    fn new(label: impl Into<String>, value: impl Into<String>, detail: impl Into<String>) -> Self {
        Stat {
            label: label.into(),
            value: value.into(),
            detail: detail.into(),
        }
    }
}

/// Card under the story chart summarising the active chapter.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub title: String,
    pub value: String,
    pub detail: String,
}

impl Annotation {
    fn new(title: impl Into<String>, value: impl Into<String>, detail: impl Into<String>) -> Self {
        Annotation {
            title: title.into(),
            value: value.into(),
            detail: detail.into(),
        }
    }
}

/// Shortened display name for the long official country names.
pub fn short_name(name: &str) -> &str {
    match name {
        "United States of America" => "US",
        "United Kingdom" => "UK",
        "United Arab Emirates" => "UAE",
        other => other,
    }
}

const UNKNOWN: &str = "n/a";

/// Numbers quoted across the page, computed once from the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Headlines {
    pub market_size: Option<f64>,
    pub net_growth: Option<i64>,
    pub pandemic_dip: Option<f64>,
    pub peak_sales: Option<f64>,
    pub fastest: Option<CountryMetric>,
    pub most_saturated: Option<CountryMetric>,
    pub apac_growth: Option<f64>,
    pub lifestyle_share: Option<f64>,
    pub index_milestone: Option<f64>,
}

impl Headlines {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let sales = dataset.global_sales();
        let countries = dataset.countries();
        let index = index_to_baseline(sales, FIRST_YEAR);
        Headlines {
            market_size: dataset.sales_in(LAST_YEAR),
            net_growth: total_growth_percent(sales),
            pandemic_dip: change_in_year(sales, PANDEMIC_YEAR),
            peak_sales: dataset.sales_in(PANDEMIC_YEAR - 1),
            fastest: fastest_growing(countries).cloned(),
            most_saturated: highest_per_capita(countries).cloned(),
            apac_growth: region_totals(countries)
                .iter()
                .find(|t| t.region == Region::AsiaPacific)
                .map(|t| t.growth()),
            lifestyle_share: category_share(dataset.categories(), LAST_YEAR),
            index_milestone: index
                .iter()
                .find(|p| p.year == INDEX_MILESTONE_YEAR)
                .map(|p| p.value),
        }
    }

    pub fn net_growth_label(&self) -> String {
        self.net_growth
            .map(|g| format!("+{g}%"))
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn fastest_name(&self) -> String {
        self.fastest
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn dip_label(&self) -> String {
        self.pandemic_dip
            .map(|d| signed_percent(d, 1))
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn summary(&self) -> Vec<Stat> {
        vec![
            Stat::new(
                format!("Global market size ({LAST_YEAR})"),
                self.market_size
                    .map(|v| format!("${}B", fixed(v, 0)))
                    .unwrap_or_else(|| UNKNOWN.to_string()),
                format!("{} vs {FIRST_YEAR}", self.net_growth_label()),
            ),
            Stat::new(
                format!("Pandemic dip ({PANDEMIC_YEAR})"),
                self.dip_label(),
                "Sharpest year-on-year drop in the period",
            ),
            Stat::new(
                "Fastest growth",
                self.fastest
                    .as_ref()
                    .map(|c| format!("{} +{}%", short_name(&c.name), fixed(c.growth, 1)))
                    .unwrap_or_else(|| UNKNOWN.to_string()),
                format!("Annual growth, {FIRST_YEAR}\u{2013}{LAST_YEAR}"),
            ),
            Stat::new(
                "Most saturated",
                self.most_saturated
                    .as_ref()
                    .map(|c| format!("{} ${}", short_name(&c.name), fixed(c.per_capita, 0)))
                    .unwrap_or_else(|| UNKNOWN.to_string()),
                format!("Per-capita spend ({LAST_YEAR})"),
            ),
        ]
    }

    /// One annotation per chapter, in story order.
    pub fn annotations(&self) -> Vec<Annotation> {
        let or_unknown = |v: Option<String>| v.unwrap_or_else(|| UNKNOWN.to_string());
        vec![
            Annotation::new(
                format!("{} pre-shock peak", PANDEMIC_YEAR - 1),
                or_unknown(self.peak_sales.map(|v| format!("${}B", fixed(v, 0)))),
                "Demand before the dip",
            ),
            Annotation::new(
                format!("{PANDEMIC_YEAR} trough"),
                self.dip_label(),
                "Sharpest YoY drop",
            ),
            Annotation::new(
                "APAC surge",
                or_unknown(self.apac_growth.map(signed_billions)),
                format!("{FIRST_YEAR}\u{2013}{LAST_YEAR} contribution"),
            ),
            Annotation::new(
                "Lifestyle lead",
                or_unknown(self.lifestyle_share.map(|s| format!("{}% share", fixed(s, 0)))),
                format!("By {LAST_YEAR}"),
            ),
            Annotation::new(
                "Index reset",
                or_unknown(
                    self.index_milestone
                        .map(|v| format!("{} by {INDEX_MILESTONE_YEAR}", fixed(v, 0))),
                ),
                "Demand baseline resets",
            ),
            Annotation::new(
                "Heat intensifies",
                format!("{}\u{2013}{LAST_YEAR}", LAST_YEAR - 1),
                "Regional clusters expand",
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headlines() -> Headlines {
        Headlines::from_dataset(&Dataset::embedded().unwrap())
    }

    #[test]
    fn test_copy_tables_line_up_with_chapters() {
        assert_eq!(CHAPTERS.len(), PANEL_THEMES.len());
        assert_eq!(headlines().annotations().len(), CHAPTERS.len());
        assert_eq!(CHAPTERS[2].label, "Chapter 03");
    }

    #[test]
    fn test_summary_stats() {
        let stats = headlines().summary();
        let values: Vec<&str> = stats.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["$194B", "-11.5%", "India +14.2%", "US $97"]);
        assert_eq!(stats[0].detail, "+94% vs 2018");
    }

    #[test]
    fn test_annotations_use_computed_values() {
        let notes = headlines().annotations();
        assert_eq!(notes[0].value, "$122B");
        assert_eq!(notes[1].value, "-11.5%");
        assert_eq!(notes[2].value, "+$22.7B");
        assert_eq!(notes[3].value, "60% share");
        assert_eq!(notes[4].value, "171 by 2024");
        assert_eq!(notes[5].value, "2025\u{2013}2026");
    }

    #[test]
    fn test_hero_labels() {
        let h = headlines();
        assert_eq!(h.net_growth_label(), "+94%");
        assert_eq!(h.fastest_name(), "India");
    }

    #[test]
    fn test_panel_background_falls_back() {
        assert!(panel_background(1).contains("#fbeae4"));
        assert_eq!(panel_background(42), panel_background(0));
    }

    #[test]
    fn test_short_name() {
        assert_eq!(short_name("United States of America"), "US");
        assert_eq!(short_name("India"), "India");
    }
}
