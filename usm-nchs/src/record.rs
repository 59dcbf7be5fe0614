use crate::metric::Metric;
use anyhow::{anyhow, Context, Result};
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};

/// Column holding the state name.
pub const STATE_COLUMN: &str = "STATE";
/// Column holding the four-digit year.
pub const YEAR_COLUMN: &str = "YEAR";
/// Columns holding the marker coordinates for the state.
pub const LAT_COLUMN: &str = "LAT";
pub const LON_COLUMN: &str = "LON";
/// Death-count header as shipped in the NCHS extracts; renamed on load to
/// the column [`Metric::DeathsCount`] reads, identically for every table.
pub const DEATHS_COUNT_COLUMN: &str = "DEATHS COUNT";

/// One (state, year) row of a mortality table. The measured columns are
/// optional: NCHS suppresses small counts and some state-years carry no
/// published rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortalityRecord {
    pub state: String,
    pub year: i32,
    pub lat: f64,
    pub lon: f64,
    pub rate: Option<f64>,
    pub deaths: Option<f64>,
}

impl MortalityRecord {
    /// True when both measured columns are present.
    pub fn is_complete(&self) -> bool {
        self.rate.is_some() && self.deaths.is_some()
    }
}

/// Resolved positions of the six columns a mortality table must carry.
struct ColumnIndex {
    state: usize,
    year: usize,
    lat: usize,
    lon: usize,
    rate: usize,
    deaths: usize,
}

fn position_of(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|header| header.trim() == name)
}

fn required_column(headers: &StringRecord, name: &str) -> Result<usize> {
    position_of(headers, name).ok_or_else(|| anyhow!("column '{}' not found in header", name))
}

/// Resolve headers by name so column order and extra columns do not matter.
/// The legacy `DEATHS COUNT` header is accepted as a spelling of `DEATHS`,
/// which is the rename every downstream consumer relies on.
fn resolve_columns(headers: &StringRecord) -> Result<ColumnIndex> {
    let deaths_column = Metric::DeathsCount.column();
    let deaths = position_of(headers, deaths_column)
        .or_else(|| position_of(headers, DEATHS_COUNT_COLUMN))
        .ok_or_else(|| anyhow!("column '{}' not found in header", deaths_column))?;
    Ok(ColumnIndex {
        state: required_column(headers, STATE_COLUMN)?,
        year: required_column(headers, YEAR_COLUMN)?,
        lat: required_column(headers, LAT_COLUMN)?,
        lon: required_column(headers, LON_COLUMN)?,
        rate: required_column(headers, Metric::Rate.column())?,
        deaths,
    })
}

/// Parse a suppressible numeric cell. Empty cells and the usual null
/// spellings load as `None` rather than failing the row.
fn parse_measure(cell: &str) -> Option<f64> {
    let trimmed = cell.trim().to_lowercase();
    match trimmed.as_str() {
        "" | "null" | "n/a" | "na" => None,
        value => value.parse::<f64>().ok().filter(|parsed| parsed.is_finite()),
    }
}

fn cell<'a>(row: &'a StringRecord, index: usize) -> &'a str {
    row.get(index).unwrap_or("").trim()
}

/// Parse one mortality CSV body into records. Rows with a blank state are
/// skipped; a malformed YEAR or coordinate is an error, since those columns
/// anchor every join the dashboard performs.
pub fn parse_mortality_csv(csv_body: &str) -> Result<Vec<MortalityRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_body.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = resolve_columns(&headers)?;

    let mut records: Vec<MortalityRecord> = Vec::new();
    for row in reader.records() {
        let row = row?;
        let state = cell(&row, columns.state);
        if state.is_empty() {
            continue;
        }
        let year: i32 = cell(&row, columns.year)
            .parse()
            .with_context(|| format!("bad YEAR value for state '{}'", state))?;
        let lat: f64 = cell(&row, columns.lat)
            .parse()
            .with_context(|| format!("bad LAT value for state '{}'", state))?;
        let lon: f64 = cell(&row, columns.lon)
            .parse()
            .with_context(|| format!("bad LON value for state '{}'", state))?;
        records.push(MortalityRecord {
            state: state.to_string(),
            year,
            lat,
            lon,
            rate: parse_measure(cell(&row, columns.rate)),
            deaths: parse_measure(cell(&row, columns.deaths)),
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGACY_HEADER_CSV: &str = "YEAR,STATE,RATE,DEATHS COUNT,URL,LAT,LON
2018,Alabama,22.9,1119,https://www.cdc.gov/nchs/pressroom/states/alabama/al.htm,32.6010112,-86.6807365
2018,Alaska,24.5,181,https://www.cdc.gov/nchs/pressroom/states/alaska/ak.htm,61.3025006,-158.7750198
2019,Alabama,23.3,1152,https://www.cdc.gov/nchs/pressroom/states/alabama/al.htm,32.6010112,-86.6807365
";

    const NORMALIZED_HEADER_CSV: &str = "YEAR,STATE,RATE,DEATHS,URL,LAT,LON
2018,Alabama,22.9,1119,https://www.cdc.gov/nchs/pressroom/states/alabama/al.htm,32.6010112,-86.6807365
2018,Alaska,24.5,181,https://www.cdc.gov/nchs/pressroom/states/alaska/ak.htm,61.3025006,-158.7750198
2019,Alabama,23.3,1152,https://www.cdc.gov/nchs/pressroom/states/alabama/al.htm,32.6010112,-86.6807365
";

    const SUPPRESSED_CELLS_CSV: &str = "YEAR,STATE,RATE,DEATHS COUNT,LAT,LON
2018,Vermont,11.5,,44.0685773,-72.6691839
2018,Wyoming,null,118,42.9957,-107.5512
2018,Rhode Island,N/A,na,41.5827282,-71.5064508
2018,Delaware,11.2,114,39.145251,-75.4189206
";

    #[test]
    fn test_parses_rows_with_legacy_death_count_header() {
        let records = parse_mortality_csv(LEGACY_HEADER_CSV).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].state, "Alabama");
        assert_eq!(records[0].year, 2018);
        assert_eq!(records[0].rate, Some(22.9));
        assert_eq!(records[0].deaths, Some(1119.0));
        assert_eq!(records[1].lat, 61.3025006);
        assert_eq!(records[1].lon, -158.7750198);
    }

    #[test]
    fn test_rename_gives_identical_records() {
        let legacy = parse_mortality_csv(LEGACY_HEADER_CSV).unwrap();
        let normalized = parse_mortality_csv(NORMALIZED_HEADER_CSV).unwrap();
        assert_eq!(legacy, normalized);
    }

    #[test]
    fn test_suppressed_cells_load_as_none() {
        let records = parse_mortality_csv(SUPPRESSED_CELLS_CSV).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].rate, Some(11.5));
        assert_eq!(records[0].deaths, None);
        assert_eq!(records[1].rate, None);
        assert_eq!(records[1].deaths, Some(118.0));
        assert_eq!(records[2].rate, None);
        assert_eq!(records[2].deaths, None);
        assert!(records[3].is_complete());
        assert!(!records[0].is_complete());
    }

    #[test]
    fn test_blank_state_rows_are_skipped() {
        let body = "YEAR,STATE,RATE,DEATHS,LAT,LON
2018,,10.0,100,40.0,-100.0
2018,Kansas,10.0,100,38.27312,-98.5821872
";
        let records = parse_mortality_csv(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].state, "Kansas");
    }

    #[test]
    fn test_missing_required_column_is_an_error() {
        let body = "YEAR,STATE,RATE,LAT,LON\n2018,Ohio,13.9,40.0,-82.0\n";
        let error = parse_mortality_csv(body).unwrap_err();
        assert!(error.to_string().contains("DEATHS"));
    }

    #[test]
    fn test_bad_year_is_an_error() {
        let body = "YEAR,STATE,RATE,DEATHS,LAT,LON\nlater,Ohio,13.9,1578,40.0,-82.0\n";
        assert!(parse_mortality_csv(body).is_err());
    }

    #[test]
    fn test_measure_lexicon() {
        assert_eq!(parse_measure("21.5"), Some(21.5));
        assert_eq!(parse_measure(" 3875 "), Some(3875.0));
        assert_eq!(parse_measure(""), None);
        assert_eq!(parse_measure("   "), None);
        assert_eq!(parse_measure("null"), None);
        assert_eq!(parse_measure("NULL"), None);
        assert_eq!(parse_measure("N/A"), None);
        assert_eq!(parse_measure("na"), None);
        assert_eq!(parse_measure("not a number"), None);
        assert_eq!(parse_measure("NaN"), None);
    }
}
