//! The four selection controls.
//!
//! Widgets are plain data here; `html` renders them and the page script
//! reads their values back to look up the matching artifact set. Option
//! values are the same short identifiers `Selection::key` is built from.

use serde::Serialize;
use usm_data::selection::{Selection, SortOrder};
use usm_nchs::category::MortalityCategory;
use usm_nchs::dataset::SUPPORTED_YEARS;
use usm_nchs::metric::Metric;

/// How a control renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WidgetKind {
    Select,
    Radio,
}

/// One option of a control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetOption {
    pub value: String,
    pub label: String,
}

/// A control: label, options, and the initially selected value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Widget {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: WidgetKind,
    pub options: Vec<WidgetOption>,
    pub selected: String,
}

pub fn year_widget(initial: Selection) -> Widget {
    Widget {
        name: "year",
        label: "Year",
        kind: WidgetKind::Select,
        options: SUPPORTED_YEARS
            .iter()
            .map(|year| WidgetOption {
                value: year.to_string(),
                label: year.to_string(),
            })
            .collect(),
        selected: initial.year.to_string(),
    }
}

pub fn category_widget(initial: Selection) -> Widget {
    Widget {
        name: "category",
        label: "Category",
        kind: WidgetKind::Select,
        options: MortalityCategory::ALL
            .iter()
            .map(|category| WidgetOption {
                value: category.id().to_string(),
                label: category.label().to_string(),
            })
            .collect(),
        selected: initial.category.id().to_string(),
    }
}

pub fn metric_widget(initial: Selection) -> Widget {
    Widget {
        name: "metric",
        label: "Metric",
        kind: WidgetKind::Radio,
        options: Metric::ALL
            .iter()
            .map(|metric| WidgetOption {
                value: metric.id().to_string(),
                label: metric.label().to_string(),
            })
            .collect(),
        selected: initial.metric.id().to_string(),
    }
}

pub fn sort_widget(initial: Selection) -> Widget {
    Widget {
        name: "sort",
        label: "Sort",
        kind: WidgetKind::Radio,
        options: SortOrder::ALL
            .iter()
            .map(|order| WidgetOption {
                value: order.id().to_string(),
                label: order.label().to_string(),
            })
            .collect(),
        selected: initial.sort_order.id().to_string(),
    }
}

/// All four controls, in display order.
pub fn all_widgets(initial: Selection) -> Vec<Widget> {
    vec![
        year_widget(initial),
        category_widget(initial),
        metric_widget(initial),
        sort_widget(initial),
    ]
}
