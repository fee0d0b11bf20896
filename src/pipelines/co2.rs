//! Atmospheric CO2: Mauna Loa parsing and the Keeling-curve-like synthesizer.

use crate::pipelines::noise::{gaussian, seeded_rng};
use crate::types::records::Co2Record;
use crate::types::tables::Co2Table;
use rand::Rng;

pub const DEFAULT_SEED: u64 = 123;
pub const FIRST_YEAR: i32 = 1958;
pub const LAST_YEAR: i32 = 2023;

const COMMENT_MARKER: char = '#';
const MIN_FIELDS: usize = 5;
const READING_FIELD: usize = 4;

const BASE_PPM: f64 = 315.0;
const LINEAR_GROWTH: f64 = 1.5;
const QUADRATIC_GROWTH: f64 = 0.02;
// Reproduced as published: it damps the whole growth term, not just one component.
const GROWTH_DAMPING: f64 = 0.1;
const NOISE_STD: f64 = 0.5;

/// Lazily parses a NOAA Mauna Loa CSV body.
///
/// Comment (`#`) and blank rows are dropped, then the first remaining row is
/// taken as the header and skipped. Each data row needs at least five fields:
/// field 0 is the year (read as a float and truncated, so `1958.2` is 1958) and
/// field 4 the reading. Rows with an unparsable or non-positive reading are dropped.
///
/// One record is produced per data row, so a monthly feed yields several
/// records per year; [`parse_co2_table`] collapses them.
pub fn parse_co2_csv(text: &str) -> impl Iterator<Item = Co2Record> + '_ {
    text.lines()
        .filter(|line| !line.starts_with(COMMENT_MARKER) && !line.trim().is_empty())
        .skip(1)
        .filter_map(parse_row)
}

fn parse_row(line: &str) -> Option<Co2Record> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }
    let year = fields[0].parse::<f64>().ok().filter(|y| y.is_finite())?.trunc() as i32;
    let co2_ppm = fields[READING_FIELD].parse::<f64>().ok()?;
    // NaN fails this comparison too
    if !(co2_ppm > 0.0) || co2_ppm.is_infinite() {
        return None;
    }
    Some(Co2Record { year, co2_ppm })
}

/// Parses a body into one record per year, averaging readings that share a year.
pub fn parse_co2_table(text: &str) -> Co2Table {
    Co2Table::from_records(Co2Record::annual_means(parse_co2_csv(text)))
}

/// Generates a concentration series for 1958–2023.
///
/// `co2 = 315 + (1.5*t + 0.02*t^2) * 0.1 + noise`, with `t` years since 1958 and
/// noise drawn from a zero-mean Gaussian with standard deviation 0.5.
pub fn synthesize_co2<R: Rng + ?Sized>(rng: &mut R) -> Co2Table {
    let records = (FIRST_YEAR..=LAST_YEAR)
        .map(|year| {
            let t = f64::from(year - FIRST_YEAR);
            let growth = LINEAR_GROWTH * t + QUADRATIC_GROWTH * t.powi(2);
            Co2Record {
                year,
                co2_ppm: BASE_PPM + growth * GROWTH_DAMPING + gaussian(rng, NOISE_STD),
            }
        })
        .collect();
    Co2Table::from_records(records)
}

/// [`synthesize_co2`] with a fresh generator seeded by `seed`.
pub fn synthesize_co2_seeded(seed: u64) -> Co2Table {
    synthesize_co2(&mut seeded_rng(seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAUNA_LOA_SAMPLE: &str = "\
# --------------------------------------------------------------
# USE OF NOAA GML DATA
#
year,month,decimal date,average,deseasonalized,ndays,sdev,unc
1958,3,1958.2027,315.71,314.44,-1,-9.99,-0.99
1958,4,1958.2877,317.45,315.16,-1,-9.99,-0.99
1958,5,1958.3699,317.51,314.69,-1,-9.99,-0.99
1958,6,1958.4548,-99.99,-99.99,-1,-9.99,-0.99
1959,1,1959.0411,315.58,315.52,-1,-9.99,-0.99
1959,2,1959.1260,316.49,315.84,-1,-9.99,-0.99
1959,3,1959.2027,316.65,n/a,-1,-9.99,-0.99
1959,4
";

    #[test]
    fn test_parse_reads_deseasonalized_column() {
        let records: Vec<Co2Record> = parse_co2_csv(MAUNA_LOA_SAMPLE).collect();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0], Co2Record { year: 1958, co2_ppm: 314.44 });
        assert!(records.iter().all(|r| r.co2_ppm > 0.0));
    }

    #[test]
    fn test_parse_skips_first_non_comment_row_as_header() {
        // no explicit header: the first data row is consumed as one
        let body = "# comment\n1958,3,1958.2,315.7,314.4\n1958,4,1958.3,317.4,315.1\n";
        let records: Vec<Co2Record> = parse_co2_csv(body).collect();
        assert_eq!(records, vec![Co2Record { year: 1958, co2_ppm: 315.1 }]);
    }

    #[test]
    fn test_parse_truncates_fractional_year() {
        let body = "header\n1987.96,0,0,0,350.5\n";
        let records: Vec<Co2Record> = parse_co2_csv(body).collect();
        assert_eq!(records, vec![Co2Record { year: 1987, co2_ppm: 350.5 }]);
    }

    #[test]
    fn test_parse_table_has_one_record_per_year() {
        let table = parse_co2_table(MAUNA_LOA_SAMPLE);
        assert_eq!(table.years(), vec![1958, 1959]);
        let y1958 = table.at_year(1958).unwrap().co2_ppm;
        assert!((y1958 - (314.44 + 315.16 + 314.69) / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_synthesized_range_and_positivity() {
        let table = synthesize_co2_seeded(DEFAULT_SEED);
        assert_eq!(table.len(), 66);
        assert_eq!(table.first().map(|r| r.year), Some(FIRST_YEAR));
        assert_eq!(table.last().map(|r| r.year), Some(LAST_YEAR));
        assert!(table.iter().all(|r| r.co2_ppm > 0.0));
    }

    #[test]
    fn test_synthesized_values_follow_damped_trend() {
        let table = synthesize_co2_seeded(DEFAULT_SEED);
        // trend at 2023: 315 + (1.5*65 + 0.02*65^2) * 0.1 = 333.2
        let last = table.last().unwrap().co2_ppm;
        assert!((last - 333.2).abs() < 2.5, "2023 reading was {last}");
        let first = table.first().unwrap().co2_ppm;
        assert!((first - 315.0).abs() < 2.5, "1958 reading was {first}");
    }

    #[test]
    fn test_synthesis_is_reproducible() {
        let a = synthesize_co2_seeded(DEFAULT_SEED);
        let b = synthesize_co2_seeded(DEFAULT_SEED);
        let bits = |t: &Co2Table| -> Vec<u64> { t.iter().map(|r| r.co2_ppm.to_bits()).collect() };
        assert_eq!(bits(&a), bits(&b));
    }
}
