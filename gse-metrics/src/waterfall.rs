//! Cumulative waterfall segments.

use serde::Serialize;

/// One bar of a waterfall: it spans `start..end` on the value axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterfallSegment<K> {
    pub key: K,
    pub value: f64,
    pub start: f64,
    pub end: f64,
}

/// Order contributions largest first and stack them end to end.
///
/// `start` of the first segment is 0 and `end` of the last equals the sum of
/// all values. Equal values keep their input order.
pub fn cumulative_waterfall<K, I>(rows: I) -> Vec<WaterfallSegment<K>>
where
    I: IntoIterator<Item = (K, f64)>,
{
    let mut ordered: Vec<(K, f64)> = rows.into_iter().collect();
    ordered.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut running = 0.0;
    ordered
        .into_iter()
        .map(|(key, value)| {
            let start = running;
            let end = start + value;
            running = end;
            WaterfallSegment {
                key,
                value,
                start,
                end,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_waterfall() {
        let segments = cumulative_waterfall(vec![("a", 2.0), ("b", 5.0), ("c", 1.0)]);
        let keys: Vec<_> = segments.iter().map(|s| s.key).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(segments[0].start, 0.0);
        assert_eq!(segments[0].end, 5.0);
        assert_eq!(segments[1].start, 5.0);
        assert_eq!(segments[1].end, 7.0);
        assert_eq!(segments[2].end, 8.0);
    }

    #[test]
    fn test_cumulative_waterfall_empty() {
        let segments: Vec<WaterfallSegment<&str>> = cumulative_waterfall(Vec::new());
        assert!(segments.is_empty());
    }

    #[test]
    fn test_cumulative_waterfall_ties_keep_order() {
        let segments = cumulative_waterfall(vec![("x", 3.0), ("y", 3.0)]);
        assert_eq!(segments[0].key, "x");
        assert_eq!(segments[1].key, "y");
    }
}
