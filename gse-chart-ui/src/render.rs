//! Inline style strings shared by the components.
//!
//! Kept free of Dioxus types so they can be tested natively.

use gse_viz::format::coord;

/// Cross-fade applied to a freshly keyed element.
pub fn fade_style(duration_ms: u32) -> String {
    format!("animation: gse-fade {duration_ms}ms ease both;")
}

pub fn percent_width(fraction: f64) -> String {
    format!("width: {}%;", coord(fraction.clamp(0.0, 1.0) * 100.0))
}

pub fn percent_height(percent: f64) -> String {
    format!("height: {}%;", coord(percent.clamp(0.0, 100.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_styles_clamp() {
        assert_eq!(percent_width(0.5), "width: 50%;");
        assert_eq!(percent_width(1.7), "width: 100%;");
        assert_eq!(percent_height(-4.0), "height: 0%;");
        assert_eq!(fade_style(350), "animation: gse-fade 350ms ease both;");
    }
}
