use crate::filter::StateValue;
use crate::selection::SortOrder;
use serde::Serialize;
use std::cmp::Ordering;

/// One row of the ranking table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRow {
    pub rank: u32,
    pub state: String,
    pub value: f64,
}

/// Dense rank for each value: ties share a rank and the next distinct value
/// takes the next integer, so ranks run 1..=distinct_count with no gaps.
/// Ascending puts rank 1 on the smallest value, descending on the largest.
pub fn dense_ranks(values: &[f64], order: SortOrder) -> Vec<u32> {
    let mut distinct: Vec<f64> = values.to_vec();
    distinct.sort_by(f64::total_cmp);
    distinct.dedup_by(|a, b| a.total_cmp(b) == Ordering::Equal);

    values
        .iter()
        .map(|value| {
            let position = distinct.partition_point(|d| d.total_cmp(value) == Ordering::Less);
            let rank = match order {
                SortOrder::Ascending => position + 1,
                SortOrder::Descending => distinct.len() - position,
            };
            rank as u32
        })
        .collect()
}

/// Build the display table: dense-rank the values under the chosen
/// direction, then order rows rank 1 first. The sort is stable, so tied
/// states keep their input order.
pub fn build_rankings(rows: &[StateValue], order: SortOrder) -> Vec<RankedRow> {
    let values: Vec<f64> = rows.iter().map(|row| row.value).collect();
    let ranks = dense_ranks(&values, order);
    let mut table: Vec<RankedRow> = rows
        .iter()
        .zip(ranks)
        .map(|(row, rank)| RankedRow {
            rank,
            state: row.state.clone(),
            value: row.value,
        })
        .collect();
    table.sort_by_key(|row| row.rank);
    table
}
