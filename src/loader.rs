//! The entry point of the crate: loads the three climate tables for one
//! dashboard render, downloading where possible and synthesizing otherwise.

use crate::fetch::fetcher::Fetcher;
use crate::pipelines::co2::{self, parse_co2_table, synthesize_co2_seeded};
use crate::pipelines::extreme_events::{self, synthesize_extreme_events_seeded};
use crate::pipelines::temperature::{self, parse_temperature_table, synthesize_temperature_seeded};
use crate::pipelines::{normalize, synthesized};
use crate::types::data_source::{DataSource, Endpoints, Provenance};
use crate::types::tables::{Co2Table, ExtremeEventsTable, TemperatureTable};
use bon::bon;
use log::info;

/// Seeds for the three synthesizers.
///
/// Each pipeline owns its own generator, so the order pipelines run in never
/// changes what they produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seeds {
    pub temperature: u64,
    pub co2: u64,
    pub extreme_events: u64,
}

impl Default for Seeds {
    fn default() -> Self {
        Self {
            temperature: temperature::DEFAULT_SEED,
            co2: co2::DEFAULT_SEED,
            extreme_events: extreme_events::DEFAULT_SEED,
        }
    }
}

/// Where each table of a [`ClimateDatasets`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetProvenance {
    pub temperature: Provenance,
    pub co2: Provenance,
    pub extreme_events: Provenance,
}

/// The three tables produced by one load, in their fixed order.
///
/// Every table is non-empty and ascending by year.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateDatasets {
    pub temperature: TemperatureTable,
    pub co2: Co2Table,
    pub extreme_events: ExtremeEventsTable,
    pub provenance: DatasetProvenance,
}

impl ClimateDatasets {
    /// Drops the provenance and returns `(temperature, co2, extreme_events)`.
    pub fn into_tables(self) -> (TemperatureTable, Co2Table, ExtremeEventsTable) {
        (self.temperature, self.co2, self.extreme_events)
    }
}

/// Loads the dashboard's climate tables.
///
/// Create one with [`ClimateDataLoader::builder()`] (or `Default`) and call
/// [`ClimateDataLoader::load_all`]. Loading cannot fail: a dataset whose
/// download fails, or parses to nothing, is replaced by its synthetic
/// counterpart and the fallback is logged.
///
/// # Examples
///
/// ```rust
/// use climate_data::{ClimateDataLoader, Provenance};
///
/// # #[tokio::main]
/// # async fn main() {
/// let loader = ClimateDataLoader::builder().offline(true).build();
/// let data = loader.load_all().await;
///
/// assert_eq!(data.temperature.len(), 144);
/// assert_eq!(data.co2.len(), 66);
/// assert_eq!(data.extreme_events.len(), 43);
/// assert_eq!(data.provenance.co2, Provenance::Synthetic);
/// # }
/// ```
pub struct ClimateDataLoader {
    fetcher: Fetcher,
    seeds: Seeds,
    offline: bool,
}

#[bon]
impl ClimateDataLoader {
    /// Configures a loader.
    ///
    /// # Arguments
    ///
    /// * `.temperature_url(..)`, `.co2_url(..)`, `.sea_ice_url(..)`: Optional. Override the
    ///   download location of a dataset. Defaults to [`DataSource::default_url`].
    /// * `.temperature_seed(u64)`, `.co2_seed(u64)`, `.extreme_events_seed(u64)`: Optional.
    ///   Seeds for the synthesizers. Defaults to [`Seeds::default`].
    /// * `.offline(bool)`: Optional. Skip every download and synthesize directly.
    ///   Defaults to `false`.
    #[builder]
    pub fn new(
        #[builder(into)] temperature_url: Option<String>,
        #[builder(into)] co2_url: Option<String>,
        #[builder(into)] sea_ice_url: Option<String>,
        temperature_seed: Option<u64>,
        co2_seed: Option<u64>,
        extreme_events_seed: Option<u64>,
        #[builder(default)] offline: bool,
    ) -> Self {
        let defaults = Endpoints::default();
        let endpoints = Endpoints {
            temperature: temperature_url.unwrap_or(defaults.temperature),
            co2: co2_url.unwrap_or(defaults.co2),
            sea_ice: sea_ice_url.unwrap_or(defaults.sea_ice),
        };
        let default_seeds = Seeds::default();
        let seeds = Seeds {
            temperature: temperature_seed.unwrap_or(default_seeds.temperature),
            co2: co2_seed.unwrap_or(default_seeds.co2),
            extreme_events: extreme_events_seed.unwrap_or(default_seeds.extreme_events),
        };
        Self {
            fetcher: Fetcher::new(endpoints),
            seeds,
            offline,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        self.fetcher.endpoints()
    }

    pub fn seeds(&self) -> Seeds {
        self.seeds
    }

    /// Loads temperature, CO2 and extreme-event tables, one after the other.
    ///
    /// Each pipeline falls back to synthesis on its own; this never fails and
    /// always returns three well-formed tables.
    pub async fn load_all(&self) -> ClimateDatasets {
        info!("Loading climate data");

        let (temperature, temperature_provenance) = self.load_temperature().await;
        let (co2, co2_provenance) = self.load_co2().await;
        let (extreme_events, extreme_events_provenance) = self.load_extreme_events();

        info!(
            "Climate data loaded: temperature ({}), co2 ({}), extreme events ({})",
            temperature_provenance, co2_provenance, extreme_events_provenance
        );

        ClimateDatasets {
            temperature,
            co2,
            extreme_events,
            provenance: DatasetProvenance {
                temperature: temperature_provenance,
                co2: co2_provenance,
                extreme_events: extreme_events_provenance,
            },
        }
    }

    /// Downloads and parses the GISTEMP anomalies, or synthesizes 1880–2023.
    pub async fn load_temperature(&self) -> (TemperatureTable, Provenance) {
        let seed = self.seeds.temperature;
        if self.offline {
            return synthesized(|| synthesize_temperature_seeded(seed));
        }
        let fetched = self.fetcher.fetch(DataSource::Temperature).await;
        normalize(fetched, parse_temperature_table, || {
            synthesize_temperature_seeded(seed)
        })
    }

    /// Downloads and parses the Mauna Loa record, or synthesizes 1958–2023.
    pub async fn load_co2(&self) -> (Co2Table, Provenance) {
        let seed = self.seeds.co2;
        if self.offline {
            return synthesized(|| synthesize_co2_seeded(seed));
        }
        let fetched = self.fetcher.fetch(DataSource::Co2).await;
        normalize(fetched, parse_co2_table, || synthesize_co2_seeded(seed))
    }

    /// Synthesizes 1980–2022. No remote source is consulted.
    pub fn load_extreme_events(&self) -> (ExtremeEventsTable, Provenance) {
        let seed = self.seeds.extreme_events;
        synthesized(|| synthesize_extreme_events_seeded(seed))
    }
}

impl Default for ClimateDataLoader {
    fn default() -> Self {
        Self::builder().build()
    }
}
