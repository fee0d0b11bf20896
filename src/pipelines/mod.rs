//! The three normalization pipelines.
//!
//! Each pipeline turns either downloaded text or, when that is unavailable,
//! a seeded generator into a [`YearlyTable`]. Parsing is best effort per row:
//! rows that do not parse simply do not appear.

pub mod co2;
pub mod extreme_events;
pub mod noise;
pub mod temperature;

use crate::fetch::error::FetchFailure;
use crate::fetch::fetcher::RawText;
use crate::types::data_source::Provenance;
use crate::types::records::YearlyRecord;
use crate::types::tables::{FrameRecord, YearlyTable};
use log::{info, warn};

/// Parses a successful download, or synthesizes when there is none.
///
/// A download that parses to zero records counts as malformed and is treated
/// exactly like a failed request.
pub(crate) fn normalize<R, P, S>(
    fetched: Result<RawText, FetchFailure>,
    parse: P,
    synthesize: S,
) -> (YearlyTable<R>, Provenance)
where
    R: YearlyRecord + FrameRecord,
    P: FnOnce(&str) -> YearlyTable<R>,
    S: FnOnce() -> YearlyTable<R>,
{
    let parsed = fetched.and_then(|raw| {
        let table = parse(&raw.body);
        if table.is_empty() {
            warn!(
                "Downloaded {} data from {} contained no usable rows",
                raw.data_source, raw.url
            );
            Err(FetchFailure::malformed(raw.data_source, raw.url))
        } else {
            Ok(table)
        }
    });

    match parsed {
        Ok(table) => {
            info!("Parsed {} {} records", table.len(), R::TABLE_NAME);
            (table, Provenance::Remote)
        }
        Err(failure) => {
            info!("{}, using simulated {} data", failure, R::TABLE_NAME);
            (synthesize(), Provenance::Synthetic)
        }
    }
}

/// Synthesizes with no download attempted.
pub(crate) fn synthesized<R, S>(synthesize: S) -> (YearlyTable<R>, Provenance)
where
    R: FrameRecord,
    S: FnOnce() -> YearlyTable<R>,
{
    info!("Using simulated {} data", R::TABLE_NAME);
    (synthesize(), Provenance::Synthetic)
}
