//! Text formatting for labels and tooltips.

/// Fixed-decimal formatting that never prints `-0`.
pub fn fixed(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value);
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_string()
    } else {
        text
    }
}

/// `+12.3` or `-4.0`
pub fn signed(value: f64, decimals: usize) -> String {
    let text = fixed(value, decimals);
    if text.starts_with('-') {
        text
    } else {
        format!("+{text}")
    }
}

/// `$12.3B`
pub fn billions(value: f64) -> String {
    format!("${}B", fixed(value, 1))
}

/// `+$12.3B` or `-$4.0B`
pub fn signed_billions(value: f64) -> String {
    let text = signed(value, 1);
    format!("{}${}B", &text[..1], &text[1..])
}

/// `12.3%`
pub fn percent(value: f64, decimals: usize) -> String {
    format!("{}%", fixed(value, decimals))
}

/// `+12.3%` or `-4.0%`
pub fn signed_percent(value: f64, decimals: usize) -> String {
    format!("{}%", signed(value, decimals))
}

/// Compact number for CSS values: at most two decimals, trailing zeros trimmed.
pub fn coord(value: f64) -> String {
    let text = fixed(value, 2);
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    };
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_negative_zero() {
        assert_eq!(fixed(-0.04, 1), "0.0");
        assert_eq!(fixed(-0.06, 1), "-0.1");
        assert_eq!(fixed(2.25, 0), "2");
    }

    #[test]
    fn test_money_and_percent() {
        assert_eq!(billions(194.0), "$194.0B");
        assert_eq!(signed_billions(12.34), "+$12.3B");
        assert_eq!(signed_billions(-4.0), "-$4.0B");
        assert_eq!(percent(45.0, 0), "45%");
        assert_eq!(signed_percent(22.0, 1), "+22.0%");
        assert_eq!(signed_percent(-11.475, 1), "-11.5%");
    }

    #[test]
    fn test_coord() {
        assert_eq!(coord(12.0), "12");
        assert_eq!(coord(12.5), "12.5");
        assert_eq!(coord(12.3449), "12.34");
        assert_eq!(coord(-0.001), "0");
        assert_eq!(coord(100.10), "100.1");
    }
}
