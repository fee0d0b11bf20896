use super::columns::{
    CO2_PPM, ECONOMIC_LOSS_BILLIONS, EXTREME_EVENTS, TEMPERATURE_ANOMALY, YEAR,
};
use super::FrameRecord;
use crate::types::records::{Co2Record, ExtremeEventRecord, TemperatureRecord};
use polars::df;
use polars::prelude::{DataFrame, PolarsResult};

impl FrameRecord for TemperatureRecord {
    const TABLE_NAME: &'static str = "temperature";

    fn to_frame(records: &[Self]) -> PolarsResult<DataFrame> {
        let years: Vec<i32> = records.iter().map(|r| r.year).collect();
        let anomalies: Vec<f64> = records.iter().map(|r| r.temperature_anomaly).collect();
        df!(
            YEAR => years,
            TEMPERATURE_ANOMALY => anomalies,
        )
    }
}

impl FrameRecord for Co2Record {
    const TABLE_NAME: &'static str = "co2";

    fn to_frame(records: &[Self]) -> PolarsResult<DataFrame> {
        let years: Vec<i32> = records.iter().map(|r| r.year).collect();
        let ppm: Vec<f64> = records.iter().map(|r| r.co2_ppm).collect();
        df!(
            YEAR => years,
            CO2_PPM => ppm,
        )
    }
}

impl FrameRecord for ExtremeEventRecord {
    const TABLE_NAME: &'static str = "extreme events";

    fn to_frame(records: &[Self]) -> PolarsResult<DataFrame> {
        let years: Vec<i32> = records.iter().map(|r| r.year).collect();
        let events: Vec<f64> = records.iter().map(|r| r.extreme_events).collect();
        // derived from the counts on every conversion, never stored
        let losses: Vec<f64> = records.iter().map(|r| r.economic_loss_billions()).collect();
        df!(
            YEAR => years,
            EXTREME_EVENTS => events,
            ECONOMIC_LOSS_BILLIONS => losses,
        )
    }
}
