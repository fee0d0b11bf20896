use crate::types::data_source::DataSource;
use thiserror::Error;

/// The single way a download can fail.
///
/// Network errors, non-success statuses and unreadable bodies are deliberately
/// not told apart; every one of them sends the pipeline to its synthesizer.
/// The underlying [`reqwest::Error`] is kept as the source for logging only.
#[derive(Debug, Error)]
#[error("Failed to fetch {data_source} data from {url}")]
pub struct FetchFailure {
    pub data_source: DataSource,
    pub url: String,
    #[source]
    cause: Option<reqwest::Error>,
}

impl FetchFailure {
    pub(crate) fn new(
        data_source: DataSource,
        url: impl Into<String>,
        cause: reqwest::Error,
    ) -> Self {
        Self {
            data_source,
            url: url.into(),
            cause: Some(cause),
        }
    }

    /// A failure for a response that arrived but held nothing usable.
    pub(crate) fn malformed(data_source: DataSource, url: impl Into<String>) -> Self {
        Self {
            data_source,
            url: url.into(),
            cause: None,
        }
    }
}
