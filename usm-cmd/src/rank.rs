//! Ranking query: print one selection's table to stdout as CSV, using the
//! same derivation the dashboard panes run.

use anyhow::{anyhow, Result};
use log::warn;
use std::io;
use usm_dashboard::panes::format_value;
use usm_data::filter::{metric_values, select_year};
use usm_data::rank::build_rankings;
use usm_data::selection::SortOrder;
use usm_nchs::category::MortalityCategory;
use usm_nchs::dataset::{DatasetPaths, MortalityDataset, SUPPORTED_YEARS};
use usm_nchs::metric::Metric;

pub fn run_rank(
    year: i32,
    category: &str,
    metric: &str,
    sort: &str,
    paths: &DatasetPaths,
) -> Result<()> {
    let category = MortalityCategory::from_id(category)
        .ok_or_else(|| anyhow!("unknown category '{}'", category))?;
    let metric =
        Metric::from_id(metric).ok_or_else(|| anyhow!("unknown metric '{}'", metric))?;
    let sort_order =
        SortOrder::from_id(sort).ok_or_else(|| anyhow!("unknown sort direction '{}'", sort))?;
    if !SUPPORTED_YEARS.contains(&year) {
        warn!("year {} is outside the published tables; expect an empty table", year);
    }

    let dataset = MortalityDataset::load(paths)?;

    let rows = select_year(dataset.records(category), year);
    let values = metric_values(&rows, metric);
    let table = build_rankings(&values, sort_order);

    let mut writer = csv::Writer::from_writer(io::stdout());
    writer.write_record(["Rank", "State", "Value"])?;
    for row in &table {
        writer.write_record([
            row.rank.to_string(),
            row.state.clone(),
            format_value(row.value),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
