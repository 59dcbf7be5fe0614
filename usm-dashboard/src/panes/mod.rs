pub mod chart;
pub mod map;
pub mod rankings;

pub use chart::BarChart;
pub use map::MapView;
pub use rankings::RankingTable;

use serde::Serialize;
use usm_data::selection::Selection;
use usm_nchs::dataset::MortalityDataset;

/// The three artifacts displayed for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panes {
    pub map: MapView,
    pub rankings: RankingTable,
    pub chart: BarChart,
}

/// Recompute all three panes for a selection. Every control change rebuilds
/// all three, even when only one of them depends on the control that moved.
pub fn build_all(dataset: &MortalityDataset, selection: Selection) -> Panes {
    Panes {
        map: map::build_map(dataset, selection.year, selection.category, selection.metric),
        rankings: rankings::build_ranking_table(
            dataset,
            selection.year,
            selection.category,
            selection.metric,
            selection.sort_order,
        ),
        chart: chart::build_bar_chart(dataset, selection.year, selection.category, selection.metric),
    }
}

/// Display formatting for a measured value: counts print without a decimal
/// point, rates keep their shortest form. Popups, the ranking CSV, and the
/// page script all follow this rule.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(3875.0), "3875");
        assert_eq!(format_value(21.5), "21.5");
        assert_eq!(format_value(0.97), "0.97");
    }
}
