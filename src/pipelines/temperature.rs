//! Global temperature anomalies: GISTEMP parsing and the two-era synthesizer.

use crate::pipelines::noise::{gaussian_series, seeded_rng};
use crate::types::records::{TemperatureRecord, BASE_TEMPERATURE};
use crate::types::tables::TemperatureTable;
use rand::Rng;

pub const DEFAULT_SEED: u64 = 42;
pub const FIRST_YEAR: i32 = 1880;
pub const LAST_YEAR: i32 = 2023;
/// Last year of the early era; the recent era starts the year after.
pub const ERA_BOUNDARY: i32 = 1950;

const HEADER_MARKER: &str = "Year";
/// GISTEMP publishes anomalies in hundredths of a degree.
const HUNDREDTHS_TO_CELSIUS: f64 = 0.01;

const EARLY_TREND_PER_YEAR: f64 = 0.003;
const EARLY_NOISE_STD: f64 = 0.15;
const RECENT_TREND_PER_YEAR: f64 = 0.015;
const RECENT_TREND_OFFSET: f64 = 0.3;
const RECENT_NOISE_STD: f64 = 0.10;

/// Lazily parses a GISTEMP-style CSV body.
///
/// Blank rows and rows starting with the `Year` header are skipped. Field 0 is
/// the year and field 1 the anomaly in hundredths of a degree. Rows with fewer
/// than two fields or a non-numeric year/anomaly are dropped silently.
///
/// # Examples
///
/// ```
/// use climate_data::parse_temperature_csv;
///
/// let body = "Year,Jan,Feb\n1880,-18,-24\n1881,***,-14\n1882,16,14\n";
/// let years: Vec<i32> = parse_temperature_csv(body).map(|r| r.year).collect();
/// assert_eq!(years, vec![1880, 1882]);
/// ```
pub fn parse_temperature_csv(text: &str) -> impl Iterator<Item = TemperatureRecord> + '_ {
    text.lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with(HEADER_MARKER))
        .filter_map(parse_row)
}

fn parse_row(line: &str) -> Option<TemperatureRecord> {
    let mut fields = line.split(',');
    let year = fields.next()?.trim().parse::<i32>().ok()?;
    let hundredths = fields.next()?.trim().parse::<f64>().ok()?;
    if !hundredths.is_finite() {
        return None;
    }
    Some(TemperatureRecord {
        year,
        temperature_anomaly: hundredths * HUNDREDTHS_TO_CELSIUS,
    })
}

/// Parses a body into a table, see [`parse_temperature_csv`].
pub fn parse_temperature_table(text: &str) -> TemperatureTable {
    TemperatureTable::from_records(parse_temperature_csv(text).collect())
}

fn recent_trend(year: i32) -> f64 {
    RECENT_TREND_PER_YEAR * f64::from(year - ERA_BOUNDARY) + RECENT_TREND_OFFSET
}

/// Generates a plausible anomaly series for 1880–2023.
///
/// Up to 1950 the series warms slowly with wide noise; afterwards it warms five
/// times faster with narrower noise. The recent era is shifted so that 1951 is
/// the 1950 value plus 1951's noise draw alone: the step across the boundary
/// carries no trend increment, and the recent trend applies from 1952 onwards.
///
/// Noise is drawn from `rng` in year order, all early years first.
pub fn synthesize_temperature<R: Rng + ?Sized>(rng: &mut R) -> TemperatureTable {
    let early_years: Vec<i32> = (FIRST_YEAR..=ERA_BOUNDARY).collect();
    let recent_years: Vec<i32> = (ERA_BOUNDARY + 1..=LAST_YEAR).collect();

    let early_noise = gaussian_series(rng, EARLY_NOISE_STD, early_years.len());
    let recent_noise = gaussian_series(rng, RECENT_NOISE_STD, recent_years.len());

    let early_temps: Vec<f64> = early_years
        .iter()
        .zip(&early_noise)
        .map(|(&year, noise)| {
            BASE_TEMPERATURE + EARLY_TREND_PER_YEAR * f64::from(year - FIRST_YEAR) + noise
        })
        .collect();

    let early_last = early_temps.last().copied().unwrap_or(BASE_TEMPERATURE);
    let recent_start = BASE_TEMPERATURE + recent_trend(ERA_BOUNDARY + 1);
    let recent_temps = recent_years
        .iter()
        .zip(&recent_noise)
        .map(|(&year, noise)| {
            BASE_TEMPERATURE + recent_trend(year) + noise + early_last - recent_start
        });

    let records = early_years
        .iter()
        .copied()
        .zip(early_temps.iter().copied())
        .chain(recent_years.iter().copied().zip(recent_temps))
        .map(|(year, temperature)| TemperatureRecord {
            year,
            temperature_anomaly: temperature - BASE_TEMPERATURE,
        })
        .collect();

    TemperatureTable::from_records(records)
}

/// [`synthesize_temperature`] with a fresh generator seeded by `seed`.
pub fn synthesize_temperature_seeded(seed: u64) -> TemperatureTable {
    synthesize_temperature(&mut seeded_rng(seed))
}
