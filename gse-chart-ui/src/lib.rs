//! Shared Dioxus components and D3.js bridge for the sneaker report.
//!
//! This crate provides:
//! - `components`: chart containers, legends, map and page chrome
//! - `js_bridge`: Rust wrappers for the D3.js charts and world map via `js_sys::eval()`
//! - `scroll`: scroll sampling hook feeding the narrative controller
//! - `state`: Reactive AppState with Dioxus Signals

pub mod components;
pub mod js_bridge;
pub mod render;
pub mod scroll;
pub mod state;

#[cfg(test)]
mod tests {
    const MANIFEST: &str = include_str!("../Cargo.toml");

    #[test]
    fn test_json_goes_through_serde_json_only() {
        let deps: Vec<&str> = MANIFEST
            .lines()
            .filter_map(|line| line.split_once(" = ").map(|(name, _)| name.trim()))
            .collect();
        assert!(deps.contains(&"serde_json"));
        assert!(!deps.contains(&"serde"));
    }
}
