//! Every chart on the page, laid out once from the dataset.

use gse_chart_ui::state::Shared;
use gse_data::{CountryMetric, Dataset};
use gse_viz::charts::{self, MarketVariant, Sparkline};
use gse_viz::Chart;

use crate::content::Headlines;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportCharts {
    pub headlines: Headlines,
    pub hero: Chart,
    pub growth: Chart,
    pub shock: Chart,
    pub categories: Chart,
    pub index: Chart,
    pub heatmap: Chart,
    pub share_bars: Chart,
    pub yoy: Chart,
    pub scatter: Chart,
    pub slope: Chart,
    pub donut: Chart,
    pub rank_bump: Chart,
    pub lollipop: Chart,
    pub waterfall: Chart,
    pub radial: Chart,
    pub sparklines: Vec<Sparkline>,
    pub countries: Shared<Vec<CountryMetric>>,
}

impl ReportCharts {
    pub fn build(dataset: &Dataset) -> Self {
        let sales = dataset.global_sales();
        let countries = dataset.countries();
        let categories = dataset.categories();

        let report = ReportCharts {
            headlines: Headlines::from_dataset(dataset),
            hero: charts::hero_backdrop(sales),
            growth: charts::global_market(sales, MarketVariant::Growth),
            shock: charts::global_market(sales, MarketVariant::Shock),
            categories: charts::category_evolution(categories),
            index: charts::growth_index(sales),
            heatmap: charts::regional_heatmap(countries),
            share_bars: charts::regional_share_bars(countries),
            yoy: charts::yoy_growth(sales),
            scatter: charts::growth_scatter(countries),
            slope: charts::top_market_slope(countries),
            donut: charts::category_donut(categories),
            rank_bump: charts::regional_rank_bump(countries),
            lollipop: charts::growth_lollipop(countries),
            waterfall: charts::growth_waterfall(countries),
            radial: charts::radial_per_capita(countries),
            sparklines: charts::regional_sparklines(countries),
            countries: Shared::new(countries.to_vec()),
        };
        log::info!(
            "[GSE] laid out report charts ({} sparklines, {} countries)",
            report.sparklines.len(),
            report.countries.len()
        );
        report
    }
}
