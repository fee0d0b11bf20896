//! Extreme weather events. There is no remote feed; the table is always synthesized.

use crate::pipelines::noise::{gaussian, seeded_rng};
use crate::types::records::ExtremeEventRecord;
use crate::types::tables::ExtremeEventsTable;
use rand::Rng;

pub const DEFAULT_SEED: u64 = 2022;
pub const FIRST_YEAR: i32 = 1980;
pub const LAST_YEAR: i32 = 2022;

const BASE_EVENTS: f64 = 200.0;
const EVENTS_PER_YEAR: f64 = 0.08;
const NOISE_STD: f64 = 15.0;

/// Generates yearly event counts for 1980–2022: `200 + 0.08*(year-1980) + noise`,
/// noise with standard deviation 15.
pub fn synthesize_extreme_events<R: Rng + ?Sized>(rng: &mut R) -> ExtremeEventsTable {
    let records = (FIRST_YEAR..=LAST_YEAR)
        .map(|year| ExtremeEventRecord {
            year,
            extreme_events: BASE_EVENTS
                + EVENTS_PER_YEAR * f64::from(year - FIRST_YEAR)
                + gaussian(rng, NOISE_STD),
        })
        .collect();
    ExtremeEventsTable::from_records(records)
}

pub fn synthesize_extreme_events_seeded(seed: u64) -> ExtremeEventsTable {
    synthesize_extreme_events(&mut seeded_rng(seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesized_range() {
        let table = synthesize_extreme_events_seeded(DEFAULT_SEED);
        assert_eq!(table.len(), 43);
        assert_eq!(table.years(), (FIRST_YEAR..=LAST_YEAR).collect::<Vec<_>>());
    }

    #[test]
    fn test_economic_loss_law_holds_for_every_record() {
        for seed in 0..20 {
            let table = synthesize_extreme_events_seeded(seed);
            for record in &table {
                assert_eq!(record.economic_loss_billions(), 0.5 * record.extreme_events);
            }
        }
    }

    #[test]
    fn test_counts_stay_near_trend() {
        let table = synthesize_extreme_events_seeded(DEFAULT_SEED);
        for record in &table {
            let trend = 200.0 + 0.08 * f64::from(record.year - FIRST_YEAR);
            // six standard deviations
            assert!((record.extreme_events - trend).abs() < 90.0);
        }
    }
}
