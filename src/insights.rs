//! Headline figures and descriptive statistics derived from loaded tables.
//!
//! These are the numbers the dashboard puts next to its charts: how much
//! warmer the last year is than the first, how far CO2 has risen, and how
//! strongly temperature tracks CO2 over the years both series cover.

use crate::error::ClimateDataError;
use crate::filtering::ClimateFrameFilterExt;
use crate::types::records::TemperatureRecord;
use crate::types::tables::columns::{CO2_PPM, TEMPERATURE_ANOMALY, YEAR};
use crate::types::tables::{Co2Table, ExtremeEventsTable, FrameRecord, TemperatureTable};
use polars::prelude::{col, pearson_corr, DataFrame, IntoLazy, LazyFrame, NamedFrom, Series};

const CORRELATION: &str = "correlation";
const TEMPERATURE_STD: &str = "temperature_std";
const CO2_STD: &str = "co2_std";
// standard deviations below this count as a constant column
const CONSTANT_TOLERANCE: f64 = 1e-12;

/// A latest value and how far it moved since the start of the series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlineDelta {
    /// Value of the most recent record.
    pub latest: f64,
    /// `latest` minus the value of the earliest record considered.
    pub change: f64,
}

impl HeadlineDelta {
    fn between(first: f64, last: f64) -> Self {
        Self {
            latest: last,
            change: last - first,
        }
    }
}

/// Descriptive statistics of one numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (`n - 1` denominator); `0.0` for a single value.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// Summarizes `values`, or `None` when there are none.
    ///
    /// # Examples
    ///
    /// ```
    /// use climate_data::insights::Summary;
    ///
    /// let summary = Summary::of([1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(summary.mean, 2.0);
    /// assert_eq!(summary.std_dev, 1.0);
    /// assert_eq!((summary.min, summary.max), (1.0, 3.0));
    /// ```
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Summary> {
        let values: Vec<f64> = values.into_iter().collect();
        if values.is_empty() {
            return None;
        }
        let series = Series::new("values".into(), values);
        Some(Summary {
            count: series.len(),
            mean: series.mean()?,
            std_dev: series.std(1).filter(|s| s.is_finite()).unwrap_or(0.0),
            min: series.min::<f64>().ok()??,
            max: series.max::<f64>().ok()??,
        })
    }
}

/// Latest anomaly and total warming since the first recorded year.
pub fn total_warming(temperature: &TemperatureTable) -> Result<HeadlineDelta, ClimateDataError> {
    anomaly_delta(temperature.records())
        .ok_or(ClimateDataError::EmptyTable(TemperatureRecord::TABLE_NAME))
}

/// Warming across the records from `year` onwards (the dashboard uses 2000).
///
/// `None` if no record is that recent.
pub fn warming_since(temperature: &TemperatureTable, year: i32) -> Option<HeadlineDelta> {
    anomaly_delta(temperature.since(year))
}

fn anomaly_delta(records: &[TemperatureRecord]) -> Option<HeadlineDelta> {
    let first = records.first()?;
    let last = records.last()?;
    Some(HeadlineDelta::between(
        first.temperature_anomaly,
        last.temperature_anomaly,
    ))
}

/// Latest CO2 concentration and the rise since the first recorded year.
pub fn co2_increase(co2: &Co2Table) -> Result<HeadlineDelta, ClimateDataError> {
    match (co2.first(), co2.last()) {
        (Some(first), Some(last)) => Ok(HeadlineDelta::between(first.co2_ppm, last.co2_ppm)),
        _ => Err(ClimateDataError::EmptyTable(crate::Co2Record::TABLE_NAME)),
    }
}

/// Latest extreme-event count and its change since the first recorded year.
pub fn extreme_events_change(
    extreme_events: &ExtremeEventsTable,
) -> Result<HeadlineDelta, ClimateDataError> {
    match (extreme_events.first(), extreme_events.last()) {
        (Some(first), Some(last)) => Ok(HeadlineDelta::between(
            first.extreme_events,
            last.extreme_events,
        )),
        _ => Err(ClimateDataError::EmptyTable(
            crate::ExtremeEventRecord::TABLE_NAME,
        )),
    }
}

/// Pearson correlation of temperature anomaly against CO2 over every year both tables cover.
///
/// # Errors
///
/// * [`ClimateDataError::InsufficientOverlap`] if fewer than two years overlap.
/// * [`ClimateDataError::ConstantSeries`] if either column does not vary over the overlap.
/// * [`ClimateDataError::DataFrame`] if the join fails.
pub fn temperature_co2_correlation(
    temperature: &TemperatureTable,
    co2: &Co2Table,
) -> Result<f64, ClimateDataError> {
    correlate(joined_by_year(temperature, co2)?)
}

/// Like [`temperature_co2_correlation`], restricted to `start_year..=end_year`.
pub fn temperature_co2_correlation_between(
    temperature: &TemperatureTable,
    co2: &Co2Table,
    start_year: i32,
    end_year: i32,
) -> Result<f64, ClimateDataError> {
    correlate(joined_by_year(temperature, co2)?.filter_years(start_year, end_year))
}

fn joined_by_year(
    temperature: &TemperatureTable,
    co2: &Co2Table,
) -> Result<LazyFrame, ClimateDataError> {
    Ok(temperature
        .to_lazy()?
        .inner_join(co2.to_lazy()?, col(YEAR), col(YEAR)))
}

fn correlate(joined: LazyFrame) -> Result<f64, ClimateDataError> {
    let overlap = joined
        .select([col(TEMPERATURE_ANOMALY), col(CO2_PPM)])
        .drop_nulls(None)
        .collect()?;
    if overlap.height() < 2 {
        return Err(ClimateDataError::InsufficientOverlap {
            found: overlap.height(),
        });
    }

    let stats = overlap
        .lazy()
        .select([
            col(TEMPERATURE_ANOMALY).std(1).alias(TEMPERATURE_STD),
            col(CO2_PPM).std(1).alias(CO2_STD),
            pearson_corr(col(TEMPERATURE_ANOMALY), col(CO2_PPM)).alias(CORRELATION),
        ])
        .collect()?;

    if is_constant(scalar(&stats, TEMPERATURE_STD)?) {
        return Err(ClimateDataError::ConstantSeries(TEMPERATURE_ANOMALY));
    }
    if is_constant(scalar(&stats, CO2_STD)?) {
        return Err(ClimateDataError::ConstantSeries(CO2_PPM));
    }
    // both columns vary, so the coefficient is defined
    Ok(scalar(&stats, CORRELATION)?.unwrap_or(f64::NAN))
}

fn scalar(stats: &DataFrame, name: &str) -> Result<Option<f64>, ClimateDataError> {
    Ok(stats.column(name)?.f64()?.get(0))
}

fn is_constant(std_dev: Option<f64>) -> bool {
    std_dev.map_or(true, |s| !s.is_finite() || s.abs() < CONSTANT_TOLERANCE)
}

/// Summary of the anomaly column.
pub fn summarize_temperature(temperature: &TemperatureTable) -> Option<Summary> {
    Summary::of(temperature.iter().map(|r| r.temperature_anomaly))
}

/// Summary of the CO2 column.
pub fn summarize_co2(co2: &Co2Table) -> Option<Summary> {
    Summary::of(co2.iter().map(|r| r.co2_ppm))
}

/// Summaries of the event counts and the derived economic loss, in that order.
pub fn summarize_extreme_events(
    extreme_events: &ExtremeEventsTable,
) -> Option<(Summary, Summary)> {
    let events = Summary::of(extreme_events.iter().map(|r| r.extreme_events))?;
    let losses = Summary::of(extreme_events.iter().map(|r| r.economic_loss_billions()))?;
    Some((events, losses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipelines::co2::synthesize_co2_seeded;
    use crate::pipelines::extreme_events::synthesize_extreme_events_seeded;
    use crate::pipelines::temperature::synthesize_temperature_seeded;
    use crate::{Co2Record, ExtremeEventRecord};

    fn temperature(points: &[(i32, f64)]) -> TemperatureTable {
        TemperatureTable::from_records(
            points
                .iter()
                .map(|&(year, temperature_anomaly)| TemperatureRecord {
                    year,
                    temperature_anomaly,
                })
                .collect(),
        )
    }

    fn co2(points: &[(i32, f64)]) -> Co2Table {
        Co2Table::from_records(
            points
                .iter()
                .map(|&(year, co2_ppm)| Co2Record { year, co2_ppm })
                .collect(),
        )
    }

    #[test]
    fn test_total_warming_uses_first_and_last() {
        let t = temperature(&[(1880, -0.2), (1950, 0.1), (2023, 1.2)]);
        let delta = total_warming(&t).unwrap();
        assert_eq!(delta.latest, 1.2);
        assert!((delta.change - 1.4).abs() < 1e-12);
    }

    #[test]
    fn test_total_warming_on_empty_table() {
        let err = total_warming(&TemperatureTable::from_records(Vec::new())).unwrap_err();
        assert!(matches!(err, ClimateDataError::EmptyTable("temperature")));
    }

    #[test]
    fn test_warming_since_2000() {
        let t = temperature(&[(1999, 0.3), (2000, 0.4), (2010, 0.7), (2023, 1.0)]);
        let delta = warming_since(&t, 2000).unwrap();
        assert!((delta.change - 0.6).abs() < 1e-12);
        assert!(warming_since(&t, 2024).is_none());
    }

    #[test]
    fn test_co2_increase() {
        let delta = co2_increase(&co2(&[(1958, 315.0), (2023, 420.5)])).unwrap();
        assert_eq!(delta.latest, 420.5);
        assert_eq!(delta.change, 105.5);
    }

    #[test]
    fn test_extreme_events_change() {
        let table = ExtremeEventsTable::from_records(vec![
            ExtremeEventRecord { year: 1980, extreme_events: 190.0 },
            ExtremeEventRecord { year: 2001, extreme_events: 205.5 },
            ExtremeEventRecord { year: 2022, extreme_events: 230.25 },
        ]);
        let delta = extreme_events_change(&table).unwrap();
        assert_eq!(delta.latest, 230.25);
        assert_eq!(delta.change, 40.25);

        let err = extreme_events_change(&ExtremeEventsTable::from_records(Vec::new())).unwrap_err();
        assert!(matches!(err, ClimateDataError::EmptyTable("extreme events")));
    }

    #[test]
    fn test_summary_matches_hand_computed_moments() {
        let summary = Summary::of([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(summary.count, 8);
        assert!((summary.mean - 5.0).abs() < 1e-12);
        // sum of squared deviations is 32, over n - 1 = 7
        assert!((summary.std_dev - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
        assert_eq!((summary.min, summary.max), (2.0, 9.0));
    }

    #[test]
    fn test_correlation_of_inverse_relationship() {
        let t = temperature(&[(2000, 0.4), (2001, 0.3), (2002, 0.2), (2003, 0.1)]);
        let c = co2(&[(2000, 370.0), (2001, 372.0), (2002, 374.0), (2003, 376.0)]);
        let r = temperature_co2_correlation(&t, &c).unwrap();
        assert!((r + 1.0).abs() < 1e-9, "r = {r}");
    }

    #[test]
    fn test_correlation_of_linear_relationship() {
        let t = temperature(&[(2000, 0.1), (2001, 0.2), (2002, 0.3), (2003, 0.4)]);
        // 1999 and 2004 have no temperature counterpart and are dropped by the join
        let c = co2(&[
            (1999, 1.0),
            (2000, 370.0),
            (2001, 372.0),
            (2002, 374.0),
            (2003, 376.0),
            (2004, 2.0),
        ]);
        let r = temperature_co2_correlation(&t, &c).unwrap();
        assert!((r - 1.0).abs() < 1e-9, "r = {r}");
    }

    #[test]
    fn test_correlation_needs_overlap() {
        let t = temperature(&[(1900, 0.1), (1901, 0.2)]);
        let c = co2(&[(2000, 370.0), (2001, 371.0)]);
        let err = temperature_co2_correlation(&t, &c).unwrap_err();
        assert!(matches!(err, ClimateDataError::InsufficientOverlap { found: 0 }));
    }

    #[test]
    fn test_correlation_of_constant_series() {
        let t = temperature(&[(2000, 0.5), (2001, 0.5), (2002, 0.5)]);
        let c = co2(&[(2000, 370.0), (2001, 371.0), (2002, 372.0)]);
        let err = temperature_co2_correlation(&t, &c).unwrap_err();
        assert!(matches!(err, ClimateDataError::ConstantSeries(TEMPERATURE_ANOMALY)));
    }

    #[test]
    fn test_synthetic_series_are_positively_correlated() {
        let t = synthesize_temperature_seeded(42);
        let c = synthesize_co2_seeded(123);
        let r = temperature_co2_correlation(&t, &c).unwrap();
        assert!(r > 0.8, "r = {r}");
        assert!(r <= 1.0);
        let recent = temperature_co2_correlation_between(&t, &c, 1990, 2023).unwrap();
        assert!(recent > 0.0);
    }

    #[test]
    fn test_summaries() {
        let (events, losses) =
            summarize_extreme_events(&synthesize_extreme_events_seeded(3)).unwrap();
        assert_eq!(events.count, 43);
        assert!((losses.mean - 0.5 * events.mean).abs() < 1e-9);
        assert!(events.min <= events.mean && events.mean <= events.max);

        let single = Summary::of([4.2]).unwrap();
        assert_eq!(single.std_dev, 0.0);
        assert!(Summary::of(Vec::new()).is_none());
        assert!(summarize_temperature(&TemperatureTable::from_records(Vec::new())).is_none());
        assert_eq!(summarize_co2(&synthesize_co2_seeded(123)).unwrap().count, 66);
    }
}
