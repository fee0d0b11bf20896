use polars::error::PolarsError;
use thiserror::Error;

/// Errors raised by the helper APIs built on top of the loaded tables.
///
/// Loading itself never fails; see [`crate::ClimateDataLoader::load_all`].
#[derive(Debug, Error)]
pub enum ClimateDataError {
    #[error("Failed processing DataFrame: {0}")]
    DataFrame(#[from] PolarsError),

    #[error("Table '{0}' contains no records")]
    EmptyTable(&'static str),

    #[error("Need at least 2 overlapping years to correlate, found {found}")]
    InsufficientOverlap { found: usize },

    #[error("Column '{0}' is constant over the overlapping years, correlation is undefined")]
    ConstantSeries(&'static str),
}
