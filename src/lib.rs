mod error;
mod fetch;
mod filtering;
pub mod insights;
mod loader;
mod pipelines;
mod types;

pub use error::ClimateDataError;
pub use loader::*;

pub use fetch::error::FetchFailure;
pub use fetch::fetcher::{Fetcher, RawText};

pub use filtering::ClimateFrameFilterExt;

pub use pipelines::co2::{parse_co2_csv, parse_co2_table, synthesize_co2, synthesize_co2_seeded};
pub use pipelines::extreme_events::{synthesize_extreme_events, synthesize_extreme_events_seeded};
pub use pipelines::noise::{seeded_rng, SynthesisRng};
pub use pipelines::temperature::{
    parse_temperature_csv, parse_temperature_table, synthesize_temperature,
    synthesize_temperature_seeded,
};

pub use types::data_source::{DataSource, Endpoints, Provenance};
pub use types::records::*;
pub use types::tables::columns;
pub use types::tables::{
    Co2Table, ExtremeEventsTable, FrameRecord, TemperatureTable, YearlyTable,
};
