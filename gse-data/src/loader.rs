//! CSV parsing and validation for the embedded tables.
//!
//! # CSV Formats
//!
//! - **Global sales** (has headers): `year,value`
//! - **Countries** (has headers): `name,region,growth,per_capita,sales_2018,sales_2026`
//! - **Categories** (has headers): `year,performance,lifestyle`
//!
//! Region cells must hold one of the [`Region`](crate::Region) labels.

use crate::error::DatasetError;
use crate::models::{CategorySharePoint, CountryMetric, YearValue};
use anyhow::Context;
use serde::de::DeserializeOwned;

fn parse_rows<T: DeserializeOwned>(csv_data: &str, table: &'static str) -> anyhow::Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let mut rows = Vec::new();
    for (line, result) in rdr.deserialize().enumerate() {
        let row: T = result.with_context(|| format!("{}: bad row {}", table, line + 1))?;
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(DatasetError::EmptyTable(table).into());
    }
    Ok(rows)
}

fn check_contiguous(years: impl Iterator<Item = i32>) -> Result<(), DatasetError> {
    let mut previous: Option<i32> = None;
    for year in years {
        if let Some(prev) = previous {
            if year != prev + 1 {
                return Err(DatasetError::NonContiguousYears { previous: prev, next: year });
            }
        }
        previous = Some(year);
    }
    Ok(())
}

/// Load the yearly global sales table.
///
/// # Example CSV
/// ```text
/// year,value
/// 2018,100
/// 2019,122
/// ```
pub(crate) fn load_global_sales(csv_data: &str) -> anyhow::Result<Vec<YearValue>> {
    let rows: Vec<YearValue> = parse_rows(csv_data, "global_sales")?;
    check_contiguous(rows.iter().map(|r| r.year)).context("global_sales")?;
    // every year is the baseline of the next change
    if let Some(bad) = rows.iter().find(|r| !r.value.is_finite() || r.value <= 0.0) {
        return Err(DatasetError::NonPositiveBaseline { year: bad.year, value: bad.value }.into());
    }
    log::info!("[GSE] loader: Loaded {} global sales points", rows.len());
    Ok(rows)
}

/// Load the per-country metrics table.
///
/// # Example CSV
/// ```text
/// name,region,growth,per_capita,sales_2018,sales_2026
/// China,Asia-Pacific,9.8,24,14.0,29.6
/// ```
pub(crate) fn load_countries(csv_data: &str) -> anyhow::Result<Vec<CountryMetric>> {
    let rows: Vec<CountryMetric> = parse_rows(csv_data, "countries")?;
    if let Some(bad) = rows.iter().find(|c| c.sales_2018 < 0.0 || c.sales_2026 < 0.0) {
        return Err(DatasetError::NegativeSales(bad.name.clone()).into());
    }
    log::info!("[GSE] loader: Loaded {} countries", rows.len());
    Ok(rows)
}

/// Load the performance/lifestyle category table.
///
/// # Example CSV
/// ```text
/// year,performance,lifestyle
/// 2018,55,45
/// ```
pub(crate) fn load_categories(csv_data: &str) -> anyhow::Result<Vec<CategorySharePoint>> {
    let rows: Vec<CategorySharePoint> = parse_rows(csv_data, "categories")?;
    check_contiguous(rows.iter().map(|r| r.year)).context("categories")?;
    log::info!("[GSE] loader: Loaded {} category points", rows.len());
    Ok(rows)
}

/// The category table must cover exactly the global sales years.
pub(crate) fn validate_category_years(
    sales: &[YearValue],
    categories: &[CategorySharePoint],
) -> Result<(), DatasetError> {
    let same = sales.len() == categories.len()
        && sales.iter().zip(categories).all(|(s, c)| s.year == c.year);
    if same {
        Ok(())
    } else {
        Err(DatasetError::YearDomainMismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Region;

    #[test]
    fn load_global_sales_from_csv() {
        let csv = "\
year,value
2018,100
2019,122
2020,108
";
        let rows = load_global_sales(csv).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], YearValue::new(2019, 122.0));
    }

    #[test]
    fn load_global_sales_rejects_gaps() {
        let csv = "\
year,value
2018,100
2020,108
";
        let err = load_global_sales(csv).unwrap_err();
        let inner = err.downcast_ref::<DatasetError>().unwrap();
        assert_eq!(
            *inner,
            DatasetError::NonContiguousYears { previous: 2018, next: 2020 }
        );
    }

    #[test]
    fn load_global_sales_rejects_zero_baseline() {
        let csv = "year,value\n2018,0\n2019,10\n";
        let err = load_global_sales(csv).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DatasetError>(),
            Some(DatasetError::NonPositiveBaseline { year: 2018, .. })
        ));
    }

    #[test]
    fn load_global_sales_rejects_zero_in_a_later_year() {
        let csv = "year,value\n2018,100\n2019,0\n2020,90\n";
        let err = load_global_sales(csv).unwrap_err();
        let inner = err.downcast_ref::<DatasetError>().unwrap();
        assert_eq!(*inner, DatasetError::NonPositiveBaseline { year: 2019, value: 0.0 });
        assert!(err.to_string().contains("in 2019"));
    }

    #[test]
    fn load_countries_parses_regions() {
        let csv = "\
name,region,growth,per_capita,sales_2018,sales_2026
China,Asia-Pacific,9.8,24,14.0,29.6
Canada,North America,3.6,58,2.2,2.9
";
        let rows = load_countries(csv).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].region, Region::AsiaPacific);
        assert_eq!(rows[1].region, Region::NorthAmerica);
        assert_eq!(rows[1].sales_for(2026), Some(2.9));
        assert_eq!(rows[1].sales_for(2022), None);
    }

    #[test]
    fn load_countries_rejects_unknown_region() {
        let csv = "\
name,region,growth,per_capita,sales_2018,sales_2026
Atlantis,Oceania,1.0,1,1.0,1.0
";
        assert!(load_countries(csv).is_err());
    }

    #[test]
    fn load_countries_rejects_negative_sales() {
        let csv = "\
name,region,growth,per_capita,sales_2018,sales_2026
Nowhere,Europe,1.0,1,1.0,-1.0
";
        let err = load_countries(csv).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DatasetError>(),
            Some(&DatasetError::NegativeSales("Nowhere".to_string()))
        );
    }

    #[test]
    fn empty_table_is_an_error() {
        let err = load_categories("year,performance,lifestyle\n").unwrap_err();
        assert_eq!(
            err.downcast_ref::<DatasetError>(),
            Some(&DatasetError::EmptyTable("categories"))
        );
    }

    #[test]
    fn category_years_must_match_sales_years() {
        let sales = vec![YearValue::new(2018, 100.0), YearValue::new(2019, 122.0)];
        let categories = vec![CategorySharePoint {
            year: 2018,
            performance: 55.0,
            lifestyle: 45.0,
        }];
        assert_eq!(
            validate_category_years(&sales, &categories),
            Err(DatasetError::YearDomainMismatch)
        );
    }
}
