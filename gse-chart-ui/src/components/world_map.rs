//! Choropleth world map with a year toggle.
//!
//! Paint comes from `ChoroplethLayer`; D3 draws the polygons through the JS
//! bridge. The selected year lives in this component only.

use dioxus::prelude::*;
use gse_data::{CountryMetric, LAST_YEAR};
use gse_viz::charts::choropleth::{MAP_BACKGROUND, MAP_HEIGHT, MAP_WIDTH, MAP_YEARS};
use gse_viz::charts::ChoroplethLayer;
use gse_viz::POINTER_OFFSET;

use super::{Legend, RampLegend};
use crate::js_bridge;
use crate::state::Shared;

#[derive(Props, Clone, PartialEq)]
pub struct WorldMapProps {
    /// DOM id D3 renders into
    pub id: String,
    pub countries: Shared<Vec<CountryMetric>>,
}

#[component]
pub fn WorldMap(props: WorldMapProps) -> Element {
    let mut year = use_signal(|| LAST_YEAR);

    let container_id = props.id.clone();
    let countries = props.countries.clone();
    use_effect(move || {
        let selected = year();
        let layer = ChoroplethLayer::build(&countries, selected);
        let config = serde_json::json!({
            "width": MAP_WIDTH,
            "height": MAP_HEIGHT,
            "background": MAP_BACKGROUND,
            "tooltipOffset": POINTER_OFFSET,
            "ariaLabel": format!("World map of sneaker sales in {selected}"),
        })
        .to_string();
        js_bridge::render_world_map(&container_id, &layer, &config);
    });

    let drop_id = props.id.clone();
    use_drop(move || js_bridge::destroy_world_map(&drop_id));

    rsx! {
        div {
            class: "world-map",
            div {
                class: "world-map__toggle",
                role: "group",
                "aria-label": "Map year",
                for option in MAP_YEARS {
                    button {
                        class: if year() == option { "world-map__year active" } else { "world-map__year" },
                        "aria-pressed": year() == option,
                        onclick: move |_| year.set(option),
                        "{option}"
                    }
                }
            }
            div { id: "{props.id}", class: "world-map__canvas" }
            RampLegend { stops: ChoroplethLayer::legend_stops() }
            Legend { items: ChoroplethLayer::region_key() }
        }
    }
}
