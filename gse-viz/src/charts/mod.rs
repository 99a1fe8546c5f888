//! Chart layouts.
//!
//! Each function turns dataset rows into a [`Chart`](crate::chart::Chart).
//! Lookups that miss (an absent year, an unknown key) drop the affected data
//! instead of failing.

pub mod categories;
pub mod choropleth;
pub mod countries;
pub mod market;
pub mod regional;

pub use categories::{category_donut, category_evolution};
pub use choropleth::{ChoroplethLayer, CountryStyle};
pub use countries::{growth_lollipop, growth_scatter, top_market_slope};
pub use market::{global_market, growth_index, hero_backdrop, yoy_growth, MarketVariant};
pub use regional::{
    growth_waterfall, radial_per_capita, rank_shifts, regional_heatmap, regional_rank_bump,
    regional_share_bars, regional_sparklines, RankShift, Sparkline,
};

pub const NAVY: &str = "#1f3a5f";
pub const RUST: &str = "#c46b2b";
pub const RED: &str = "#a33f2b";

/// Minimum and maximum of the finite `values`; `None` when there are none.
pub(crate) fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
