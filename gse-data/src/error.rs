use std::fmt;

/// Validation failures raised while loading the embedded tables.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetError {
    /// A table parsed without any rows.
    EmptyTable(&'static str),
    /// Two consecutive rows are not one year apart.
    NonContiguousYears { previous: i32, next: i32 },
    /// The category table covers different years than the global series.
    YearDomainMismatch,
    /// A country reported negative snapshot sales.
    NegativeSales(String),
    /// A global sales value is zero or negative, so it cannot serve as the
    /// baseline for the following year's growth or the index.
    NonPositiveBaseline { year: i32, value: f64 },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::EmptyTable(table) => write!(f, "table {} has no rows", table),
            DatasetError::NonContiguousYears { previous, next } => {
                write!(f, "years must be contiguous, {} followed by {}", previous, next)
            }
            DatasetError::YearDomainMismatch => {
                write!(f, "category years do not match global sales years")
            }
            DatasetError::NegativeSales(name) => write!(f, "negative sales for {}", name),
            DatasetError::NonPositiveBaseline { year, value } => {
                write!(f, "global sales must be positive, got {} in {}", value, year)
            }
        }
    }
}

impl std::error::Error for DatasetError {}
