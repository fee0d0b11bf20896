use crate::fetch::error::FetchFailure;
use crate::types::data_source::{DataSource, Endpoints};
use log::{info, warn};
use reqwest::Client;

/// The text body of a successful download, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawText {
    pub data_source: DataSource,
    pub url: String,
    pub body: String,
}

/// Issues the one best-effort download per dataset.
///
/// There are no retries, no backoff and no timeout beyond the transport
/// default: a failed request is reported once and the caller synthesizes.
pub struct Fetcher {
    endpoints: Endpoints,
    download_client: Client,
}

impl Fetcher {
    pub fn new(endpoints: Endpoints) -> Fetcher {
        Fetcher {
            endpoints,
            download_client: Client::new(),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Downloads the raw text of `source`.
    ///
    /// Succeeds only for a 2xx response whose body could be read as text.
    /// Every other outcome is folded into a [`FetchFailure`] and logged at warn level.
    pub async fn fetch(&self, source: DataSource) -> Result<RawText, FetchFailure> {
        let url = self.endpoints.url(source);
        info!("Downloading {} data from {}", source, url);

        match self.get_text(url).await {
            Ok(body) => {
                info!(
                    "Downloaded {} bytes of {} data from {}",
                    body.len(),
                    source,
                    url
                );
                Ok(RawText {
                    data_source: source,
                    url: url.to_string(),
                    body,
                })
            }
            Err(e) => {
                warn!("Could not download {} data from {}: {}", source, url, e);
                Err(FetchFailure::new(source, url, e))
            }
        }
    }

    async fn get_text(&self, url: &str) -> Result<String, reqwest::Error> {
        self.download_client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}
