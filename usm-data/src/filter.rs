use serde::Serialize;
use usm_nchs::metric::Metric;
use usm_nchs::record::MortalityRecord;

/// Keep one year's rows and drop rows missing either measured value. This is
/// the shared first step of every pane derivation, and it is idempotent:
/// applied to its own output it returns the same rows.
pub fn select_year(records: &[MortalityRecord], year: i32) -> Vec<MortalityRecord> {
    records
        .iter()
        .filter(|record| record.year == year && record.is_complete())
        .cloned()
        .collect()
}

/// A state paired with the selected metric's value, plus the marker
/// coordinates carried through for the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateValue {
    pub state: String,
    pub lat: f64,
    pub lon: f64,
    pub value: f64,
}

/// Project filtered rows onto the selected metric, preserving row order.
pub fn metric_values(rows: &[MortalityRecord], metric: Metric) -> Vec<StateValue> {
    rows.iter()
        .filter_map(|record| {
            let value = match metric {
                Metric::Rate => record.rate,
                Metric::DeathsCount => record.deaths,
            }?;
            Some(StateValue {
                state: record.state.clone(),
                lat: record.lat,
                lon: record.lon,
                value,
            })
        })
        .collect()
}
