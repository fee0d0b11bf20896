//! Defines the remote datasets the crate knows about, the URLs they are
//! downloaded from, and where a loaded table actually came from.

use std::fmt;

/// Identifies one of the remote climate datasets.
///
/// Each variant has a fixed default download location (see [`DataSource::default_url`]),
/// which can be overridden per loader through [`Endpoints`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSource {
    /// NASA GISTEMP global land-ocean temperature index (monthly anomalies, one row per year).
    Temperature,
    /// NOAA Mauna Loa monthly mean CO2 record.
    Co2,
    /// NSIDC Arctic sea-ice extent.
    ///
    /// Declared for completeness; no pipeline consumes it, so it is never downloaded
    /// by [`crate::ClimateDataLoader::load_all`].
    SeaIce,
}

impl DataSource {
    pub(crate) fn path_segment(&self) -> &'static str {
        match self {
            DataSource::Temperature => "temperature",
            DataSource::Co2 => "co2",
            DataSource::SeaIce => "sea-ice",
        }
    }

    /// The upstream URL the dataset is published at.
    ///
    /// # Examples
    ///
    /// ```
    /// use climate_data::DataSource;
    ///
    /// assert!(DataSource::Co2.default_url().ends_with("co2_mm_mlo.csv"));
    /// ```
    pub fn default_url(&self) -> &'static str {
        match self {
            DataSource::Temperature => {
                "https://data.giss.nasa.gov/gistemp/tabledata_v4/GLB.Ts+dSST.csv"
            }
            DataSource::Co2 => "https://gml.noaa.gov/webdata/ccgg/trends/co2/co2_mm_mlo.csv",
            DataSource::SeaIce => "https://nsidc.org/api/arcticseaicenews/sea-ice-data.csv",
        }
    }
}

/// Allows formatting a `DataSource` variant using its path segment.
///
/// # Examples
///
/// ```
/// use climate_data::DataSource;
///
/// assert_eq!(DataSource::SeaIce.to_string(), "sea-ice");
/// ```
impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

/// The URL each [`DataSource`] is fetched from.
///
/// Defaults to the upstream locations. Overriding is mostly useful for mirrors
/// and for pointing the loader at a local server in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub temperature: String,
    pub co2: String,
    pub sea_ice: String,
}

impl Endpoints {
    pub fn url(&self, source: DataSource) -> &str {
        match source {
            DataSource::Temperature => &self.temperature,
            DataSource::Co2 => &self.co2,
            DataSource::SeaIce => &self.sea_ice,
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            temperature: DataSource::Temperature.default_url().to_string(),
            co2: DataSource::Co2.default_url().to_string(),
            sea_ice: DataSource::SeaIce.default_url().to_string(),
        }
    }
}

/// Where the records of a loaded table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// Parsed from a successful download.
    Remote,
    /// Generated by the deterministic synthesizer after a failed (or skipped) download.
    Synthetic,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Remote => write!(f, "remote"),
            Provenance::Synthetic => write!(f, "synthetic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints_match_sources() {
        let endpoints = Endpoints::default();
        for source in [DataSource::Temperature, DataSource::Co2, DataSource::SeaIce] {
            assert_eq!(endpoints.url(source), source.default_url());
        }
    }

    #[test]
    fn test_overridden_endpoint_is_used() {
        let endpoints = Endpoints {
            co2: "http://127.0.0.1:9/co2.csv".to_string(),
            ..Endpoints::default()
        };
        assert_eq!(endpoints.url(DataSource::Co2), "http://127.0.0.1:9/co2.csv");
        assert_eq!(
            endpoints.url(DataSource::Temperature),
            DataSource::Temperature.default_url()
        );
    }
}
