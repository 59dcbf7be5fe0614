//! Ranking table pane.

use serde::Serialize;
use usm_data::filter::{metric_values, select_year};
use usm_data::rank::{build_rankings, RankedRow};
use usm_data::selection::SortOrder;
use usm_nchs::category::MortalityCategory;
use usm_nchs::dataset::MortalityDataset;
use usm_nchs::metric::Metric;

/// The ranked (rank, state, value) table for one selection, ordered rank 1
/// first. Ranks are dense: tied states share a rank and no integer is
/// skipped after a tie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingTable {
    pub rows: Vec<RankedRow>,
}

pub fn build_ranking_table(
    dataset: &MortalityDataset,
    year: i32,
    category: MortalityCategory,
    metric: Metric,
    sort_order: SortOrder,
) -> RankingTable {
    let rows = select_year(dataset.records(category), year);
    let values = metric_values(&rows, metric);
    RankingTable {
        rows: build_rankings(&values, sort_order),
    }
}
