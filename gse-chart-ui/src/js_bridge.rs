//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at
//! runtime. They are evaluated as globals (no ES modules) and exposed via
//! `window.*`. This module serializes `gse_viz` charts and calls those
//! globals.

use gse_viz::charts::ChoroplethLayer;
use gse_viz::{Chart, ChartKind};
use wasm_bindgen::JsValue;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static CHART_FRAME_JS: &str = include_str!("../assets/js/chart-frame.js");
static LINE_CHARTS_JS: &str = include_str!("../assets/js/line-charts.js");
static BAR_CHARTS_JS: &str = include_str!("../assets/js/bar-charts.js");
static RADIAL_CHARTS_JS: &str = include_str!("../assets/js/radial-charts.js");
static POINT_CHARTS_JS: &str = include_str!("../assets/js/point-charts.js");
static WORLD_MAP_JS: &str = include_str!("../assets/js/world-map.js");

/// Globals other than the per-kind renderers.
const SHARED_FUNCTIONS: [&str; 5] = [
    "destroyChart",
    "renderWorldMap",
    "destroyWorldMap",
    "initTooltip",
    "hideTooltip",
];

fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('[GSE] JS call failed:', e); }}",
        code
    );
    if let Err(err) = js_sys::eval(&wrapped) {
        warn(&format!("[GSE] eval rejected: {err:?}"));
    }
}

/// Quote a string as a JS literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

fn chart_scripts() -> String {
    [
        TOOLTIP_JS,
        CHART_FRAME_JS,
        LINE_CHARTS_JS,
        BAR_CHARTS_JS,
        RADIAL_CHARTS_JS,
        POINT_CHARTS_JS,
        WORLD_MAP_JS,
    ]
    .join("\n")
}

fn exported_functions() -> Vec<&'static str> {
    ChartKind::ALL
        .iter()
        .map(|kind| kind.renderer())
        .chain(SHARED_FUNCTIONS)
        .collect()
}

fn init_script() -> String {
    let promote: String = exported_functions()
        .iter()
        .map(|name| format!("if (typeof {name} !== 'undefined') window.{name} = {name};\n"))
        .collect();
    format!(
        r#"
        (function() {{
            if (window.__gseChartsReady || window.__gseChartsPolling) return;
            window.__gseChartsPolling = true;
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined' && typeof topojson !== 'undefined') {{
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__gseChartScripts);
                    delete window.__gseChartScripts;
                    {promote}
                    window.__gseChartsReady = true;
                    console.log('[GSE] charts initialized');
                }}
            }}, 100);
        }})();
        "#
    )
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define their renderers with `function` declarations.
/// To make them global (not block-scoped inside the setInterval callback)
/// they are evaluated at global scope via indirect `eval()` once `d3` and
/// `topojson` exist, then promoted to `window.*`.
pub fn init_charts() {
    call_js(&format!("window.__gseChartScripts = {};", js_string(&chart_scripts())));
    call_js(&init_script());
    log::info!("[GSE] waiting for D3 to initialize the charts");
}

/// Poll until the scripts are ready and the container exists, then call
/// `window.{function}(id, args)`.
///
/// The interval handle is kept in `window.__gsePolls` under the container
/// id, and a newer call for the same container cancels the older poll.
fn poll_script(container_id: &str, function: &str, args: &str) -> String {
    let id = js_string(container_id);
    format!(
        r#"
        (function() {{
            var polls = window.__gsePolls = window.__gsePolls || {{}};
            if (polls[{id}]) clearInterval(polls[{id}]);
            polls[{id}] = setInterval(function() {{
                if (window.__gseChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(polls[{id}]);
                    delete polls[{id}];
                    try {{
                        window.{function}({id}, {args});
                    }} catch(e) {{ console.error('[GSE] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#
    )
}

/// Cancel a pending poll for the container, then tear the chart down with
/// `window.{function}(id)`, falling back to emptying the container.
fn destroy_script(container_id: &str, function: &str) -> String {
    let id = js_string(container_id);
    format!(
        r#"
        (function() {{
            var polls = window.__gsePolls;
            if (polls && polls[{id}]) {{
                clearInterval(polls[{id}]);
                delete polls[{id}];
            }}
            if (typeof window.{function} !== 'undefined') {{
                window.{function}({id});
            }} else {{
                var el = document.getElementById({id});
                if (el) el.innerHTML = '';
            }}
        }})();
        "#
    )
}

/// Draw `chart` into `container_id` with its kind's renderer.
///
/// Safe to call from an effect that runs before the first paint.
pub fn render_chart(container_id: &str, chart: &Chart) {
    let chart_json = match serde_json::to_string(chart) {
        Ok(json) => json,
        Err(err) => {
            log::warn!("[GSE] could not serialize {}: {err}", chart.aria_label);
            return;
        }
    };
    log::debug!("[GSE] render {:?} into {}", chart.kind, container_id);
    call_js(&poll_script(container_id, chart.kind.renderer(), &js_string(&chart_json)));
}

/// Render the choropleth into `container_id`.
pub fn render_world_map(container_id: &str, layer: &ChoroplethLayer, config_json: &str) {
    let layer_json = match serde_json::to_string(layer) {
        Ok(json) => json,
        Err(err) => {
            log::warn!("[GSE] could not serialize map layer: {err}");
            return;
        }
    };
    log::debug!("[GSE] render world map {} for {}", container_id, layer.year);
    let args = format!("{}, {}", js_string(&layer_json), js_string(config_json));
    call_js(&poll_script(container_id, "renderWorldMap", &args));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_script(container_id, "destroyChart"));
}

/// Destroy the map in the given container and hide its tooltip.
pub fn destroy_world_map(container_id: &str) {
    call_js(&destroy_script(container_id, "destroyWorldMap"));
}
