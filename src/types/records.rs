//! Per-year record types making up the three climate tables.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Global mean surface temperature the anomalies are expressed against, in °C.
pub const BASE_TEMPERATURE: f64 = 14.0;

/// Factor applied to every extreme-event count to derive the economic loss, in billions.
pub const LOSS_PER_EVENT_BILLIONS: f64 = 0.5;

/// Anything that belongs to exactly one calendar year.
pub trait YearlyRecord {
    fn year(&self) -> i32;
}

/// Global temperature anomaly for one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRecord {
    pub year: i32,
    /// Difference from [`BASE_TEMPERATURE`], in °C.
    pub temperature_anomaly: f64,
}

impl TemperatureRecord {
    /// The absolute global mean temperature, `BASE_TEMPERATURE + temperature_anomaly`.
    pub fn absolute_temperature(&self) -> f64 {
        BASE_TEMPERATURE + self.temperature_anomaly
    }
}

impl YearlyRecord for TemperatureRecord {
    fn year(&self) -> i32 {
        self.year
    }
}

/// Atmospheric CO2 concentration for one year. `co2_ppm` is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Co2Record {
    pub year: i32,
    pub co2_ppm: f64,
}

impl Co2Record {
    /// Collapses readings sharing a year (the upstream feed is monthly) into
    /// one record per year holding their arithmetic mean, ascending by year.
    pub fn annual_means(records: impl IntoIterator<Item = Co2Record>) -> Vec<Co2Record> {
        let mut by_year: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
        for record in records {
            let entry = by_year.entry(record.year).or_insert((0.0, 0));
            entry.0 += record.co2_ppm;
            entry.1 += 1;
        }
        by_year
            .into_iter()
            .map(|(year, (sum, count))| Co2Record {
                year,
                co2_ppm: sum / count as f64,
            })
            .collect()
    }
}

impl YearlyRecord for Co2Record {
    fn year(&self) -> i32 {
        self.year
    }
}

/// Count of extreme weather events for one year.
///
/// The count may be fractional since it is synthesized with Gaussian noise.
/// The economic loss is never stored; see [`ExtremeEventRecord::economic_loss_billions`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtremeEventRecord {
    pub year: i32,
    pub extreme_events: f64,
}

impl ExtremeEventRecord {
    pub fn economic_loss_billions(&self) -> f64 {
        LOSS_PER_EVENT_BILLIONS * self.extreme_events
    }
}

impl YearlyRecord for ExtremeEventRecord {
    fn year(&self) -> i32 {
        self.year
    }
}
