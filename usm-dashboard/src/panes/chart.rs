//! Bar-chart pane with the mean reference line.

use serde::Serialize;
use usm_data::filter::{metric_values, select_year};
use usm_data::stats::mean;
use usm_nchs::category::MortalityCategory;
use usm_nchs::dataset::MortalityDataset;
use usm_nchs::metric::Metric;

/// One bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub state: String,
    pub value: f64,
}

/// Bar chart for one (year, category, metric): bars in alphabetical state
/// order, plus the dotted red mean line. The mean is absent when the
/// selection matches no rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<Bar>,
    pub mean: Option<f64>,
    pub mean_label: Option<String>,
}

pub fn build_bar_chart(
    dataset: &MortalityDataset,
    year: i32,
    category: MortalityCategory,
    metric: Metric,
) -> BarChart {
    let rows = select_year(dataset.records(category), year);
    let mut values = metric_values(&rows, metric);
    values.sort_by(|a, b| a.state.cmp(&b.state));

    let mean = mean(&values.iter().map(|v| v.value).collect::<Vec<f64>>());
    BarChart {
        title: format!("{} {} for {}", category.label(), metric.label(), year),
        bars: values
            .into_iter()
            .map(|v| Bar {
                state: v.state,
                value: v.value,
            })
            .collect(),
        mean,
        mean_label: mean.map(|m| format!("Mean: {:.2}", m)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use usm_nchs::dataset::MortalityTable;
    use usm_nchs::record::parse_mortality_csv;

    const OVERDOSE_CSV: &str = "YEAR,STATE,RATE,DEATHS COUNT,LAT,LON
2018,Ohio,35.9,3980,40.0,-82.0
2018,Delaware,43.8,401,39.1,-75.4
2018,West Virginia,51.5,702,38.6,-80.4
2018,Nebraska,7.4,136,41.1,-98.3
";

    fn dataset() -> MortalityDataset {
        let records = parse_mortality_csv(OVERDOSE_CSV).unwrap();
        MortalityDataset::from_tables(
            MortalityTable::new(MortalityCategory::Firearm, Vec::new()),
            MortalityTable::new(MortalityCategory::Homicide, Vec::new()),
            MortalityTable::new(MortalityCategory::DrugOverdose, records),
        )
    }

    #[test]
    fn test_bars_are_alphabetical_by_state() {
        let chart = build_bar_chart(
            &dataset(),
            2018,
            MortalityCategory::DrugOverdose,
            Metric::Rate,
        );
        let states: Vec<&str> = chart.bars.iter().map(|bar| bar.state.as_str()).collect();
        assert_eq!(states, ["Delaware", "Nebraska", "Ohio", "West Virginia"]);
    }

    #[test]
    fn test_mean_and_label() {
        let chart = build_bar_chart(
            &dataset(),
            2018,
            MortalityCategory::DrugOverdose,
            Metric::Rate,
        );
        let expected = (35.9 + 43.8 + 51.5 + 7.4) / 4.0;
        assert!((chart.mean.unwrap() - expected).abs() < 1e-9);
        assert_eq!(chart.mean_label.as_deref(), Some("Mean: 34.65"));
    }

    #[test]
    fn test_title_names_category_metric_and_year() {
        let chart = build_bar_chart(
            &dataset(),
            2018,
            MortalityCategory::DrugOverdose,
            Metric::DeathsCount,
        );
        assert_eq!(chart.title, "Drug Overdose Mortality Deaths Count for 2018");
    }

    #[test]
    fn test_empty_selection_has_no_mean() {
        let chart = build_bar_chart(
            &dataset(),
            2014,
            MortalityCategory::DrugOverdose,
            Metric::Rate,
        );
        assert!(chart.bars.is_empty());
        assert_eq!(chart.mean, None);
        assert_eq!(chart.mean_label, None);
    }
}
