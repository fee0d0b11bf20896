//! Year-indexed tables handed to the presentation layer.
//!
//! A [`YearlyTable`] is an immutable, ascending-by-year sequence with at most
//! one record per year. Each table can be viewed as a Polars [`DataFrame`]
//! using the column names dashboards address it by (see [`columns`]).

pub mod columns;
pub mod frames;

use crate::error::ClimateDataError;
use crate::types::records::{Co2Record, ExtremeEventRecord, TemperatureRecord, YearlyRecord};
use polars::prelude::{DataFrame, IntoLazy, LazyFrame, PolarsResult};

pub type TemperatureTable = YearlyTable<TemperatureRecord>;
pub type Co2Table = YearlyTable<Co2Record>;
pub type ExtremeEventsTable = YearlyTable<ExtremeEventRecord>;

/// Converts a slice of records into a column-named [`DataFrame`].
pub trait FrameRecord: Sized {
    /// Name used in logs and errors when referring to a table of these records.
    const TABLE_NAME: &'static str;

    fn to_frame(records: &[Self]) -> PolarsResult<DataFrame>;
}

/// An ordered, per-year table of records.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyTable<R> {
    records: Vec<R>,
}

impl<R: YearlyRecord> YearlyTable<R> {
    /// Builds a table from records in any order.
    ///
    /// Records are sorted ascending by year. When several records share a year
    /// only the first one (in input order) is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use climate_data::{TemperatureRecord, TemperatureTable};
    ///
    /// let table = TemperatureTable::from_records(vec![
    ///     TemperatureRecord { year: 2001, temperature_anomaly: 0.5 },
    ///     TemperatureRecord { year: 2000, temperature_anomaly: 0.4 },
    ///     TemperatureRecord { year: 2001, temperature_anomaly: 9.9 },
    /// ]);
    /// assert_eq!(table.years(), vec![2000, 2001]);
    /// assert_eq!(table.last().unwrap().temperature_anomaly, 0.5);
    /// ```
    pub fn from_records(mut records: Vec<R>) -> Self {
        // stable sort keeps input order among equal years, so dedup keeps the first
        records.sort_by_key(|r| r.year());
        records.dedup_by_key(|r| r.year());
        Self { records }
    }

    /// The years covered by the table, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.records.iter().map(YearlyRecord::year).collect()
    }

    /// Looks up the record for a specific year.
    pub fn at_year(&self, year: i32) -> Option<&R> {
        self.records
            .binary_search_by_key(&year, |r| r.year())
            .ok()
            .map(|idx| &self.records[idx])
    }

    /// Records whose year is `year` or later.
    pub fn since(&self, year: i32) -> &[R] {
        let start = self.records.partition_point(|r| r.year() < year);
        &self.records[start..]
    }
}

impl<R> YearlyTable<R> {
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&R> {
        self.records.get(index)
    }

    pub fn first(&self) -> Option<&R> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&R> {
        self.records.last()
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

impl<R: FrameRecord> YearlyTable<R> {
    /// Materializes the table as a Polars [`DataFrame`].
    ///
    /// # Errors
    ///
    /// Returns [`ClimateDataError::DataFrame`] if Polars rejects the columns.
    pub fn to_dataframe(&self) -> Result<DataFrame, ClimateDataError> {
        Ok(R::to_frame(&self.records)?)
    }

    /// Same as [`YearlyTable::to_dataframe`], wrapped in a `LazyFrame` for further querying.
    pub fn to_lazy(&self) -> Result<LazyFrame, ClimateDataError> {
        Ok(self.to_dataframe()?.lazy())
    }
}

impl<'a, R> IntoIterator for &'a YearlyTable<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
