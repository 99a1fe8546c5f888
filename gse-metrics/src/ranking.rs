//! Ranking and arg-max helpers.
//!
//! Ties never reorder rows: the row that appears first in the input wins.

use gse_data::CountryMetric;
use serde::Serialize;

/// A row paired with its 1-based rank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ranked<T> {
    pub rank: usize,
    pub value: f64,
    pub row: T,
}

/// Sort rows by `value` descending and assign `rank = position + 1`.
///
/// The sort is stable, so rows with equal values keep their input order and
/// the earlier one gets the better rank.
pub fn rank_by_value<T, F>(rows: &[T], value: F) -> Vec<Ranked<&T>>
where
    F: Fn(&T) -> f64,
{
    let mut ordered: Vec<(f64, &T)> = rows.iter().map(|row| (value(row), row)).collect();
    ordered.sort_by(|a, b| b.0.total_cmp(&a.0));
    ordered
        .into_iter()
        .enumerate()
        .map(|(i, (value, row))| Ranked {
            rank: i + 1,
            value,
            row,
        })
        .collect()
}

/// The first `n` rows of [`rank_by_value`].
pub fn top_n<T, F>(rows: &[T], n: usize, value: F) -> Vec<Ranked<&T>>
where
    F: Fn(&T) -> f64,
{
    let mut ranked = rank_by_value(rows, value);
    ranked.truncate(n);
    ranked
}

fn max_by_left<'a, F>(countries: &'a [CountryMetric], value: F) -> Option<&'a CountryMetric>
where
    F: Fn(&CountryMetric) -> f64,
{
    let mut iter = countries.iter();
    let first = iter.next()?;
    Some(iter.fold(first, |max, current| {
        if value(current) > value(max) {
            current
        } else {
            max
        }
    }))
}

/// Country with the highest growth rate; the leftmost wins on ties.
pub fn fastest_growing(countries: &[CountryMetric]) -> Option<&CountryMetric> {
    max_by_left(countries, |c| c.growth)
}

/// Country with the highest per-capita spend; the leftmost wins on ties.
pub fn highest_per_capita(countries: &[CountryMetric]) -> Option<&CountryMetric> {
    max_by_left(countries, |c| c.per_capita)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gse_data::Region;

    fn country(name: &str, growth: f64, sales_2026: f64) -> CountryMetric {
        CountryMetric {
            name: name.to_string(),
            region: Region::Europe,
            growth,
            per_capita: growth * 10.0,
            sales_2018: 1.0,
            sales_2026,
        }
    }

    #[test]
    fn test_rank_by_value_descending() {
        let rows = vec![country("A", 1.0, 5.0), country("B", 1.0, 9.0), country("C", 1.0, 7.0)];
        let ranked = rank_by_value(&rows, |c| c.sales_2026);
        let names: Vec<_> = ranked.iter().map(|r| r.row.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[2].rank, 3);
        assert_eq!(ranked[0].value, 9.0);
    }

    #[test]
    fn test_rank_by_value_ties_keep_input_order() {
        let rows = vec![country("First", 1.0, 9.0), country("Low", 1.0, 2.0), country("Second", 1.0, 9.0)];
        let ranked = rank_by_value(&rows, |c| c.sales_2026);
        assert_eq!(ranked[0].row.name, "First");
        assert_eq!(ranked[1].row.name, "Second");
        assert_eq!(ranked[2].row.name, "Low");
    }

    #[test]
    fn test_top_n() {
        let rows = vec![country("A", 3.0, 1.0), country("B", 9.0, 1.0), country("C", 5.0, 1.0)];
        let top = top_n(&rows, 2, |c| c.growth);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].row.name, "B");
        assert_eq!(top[1].row.name, "C");
        assert_eq!(top_n(&rows, 10, |c| c.growth).len(), 3);
    }

    #[test]
    fn test_fastest_growing_leftmost_wins() {
        let rows = vec![country("A", 3.0, 1.0), country("B", 9.0, 1.0), country("C", 9.0, 1.0)];
        assert_eq!(fastest_growing(&rows).unwrap().name, "B");
        assert!(fastest_growing(&[]).is_none());
    }

    #[test]
    fn test_highest_per_capita() {
        let rows = vec![country("A", 3.0, 1.0), country("B", 2.0, 1.0)];
        assert_eq!(highest_per_capita(&rows).unwrap().name, "A");
    }
}
