use serde::{Deserialize, Serialize};
use usm_nchs::category::MortalityCategory;
use usm_nchs::dataset::SUPPORTED_YEARS;
use usm_nchs::metric::Metric;

/// Row-ordering direction for the ranking table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Both directions, in widget display order.
    pub const ALL: [SortOrder; 2] = [SortOrder::Ascending, SortOrder::Descending];

    /// Label shown in the sort selector.
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }

    /// Short identifier used in selection keys and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    /// Inverse of [`SortOrder::id`].
    pub fn from_id(id: &str) -> Option<SortOrder> {
        SortOrder::ALL.into_iter().find(|order| order.id() == id)
    }
}

/// Current value of the four controls. Immutable per render: a control
/// change replaces the whole tuple, never mutates a pane in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub year: i32,
    pub category: MortalityCategory,
    pub metric: Metric,
    pub sort_order: SortOrder,
}

impl Default for Selection {
    /// The state the dashboard opens in: earliest year, firearm mortality,
    /// rate, descending.
    fn default() -> Self {
        Self {
            year: SUPPORTED_YEARS[0],
            category: MortalityCategory::Firearm,
            metric: Metric::Rate,
            sort_order: SortOrder::Descending,
        }
    }
}

impl Selection {
    /// Stable key identifying this selection in the embedded artifact set.
    /// The exported page recomputes the same key from its control values.
    pub fn key(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.year,
            self.category.id(),
            self.metric.id(),
            self.sort_order.id()
        )
    }

    /// Every reachable selection, in widget order: year, category, metric,
    /// sort. The exporter walks exactly this list.
    pub fn all() -> Vec<Selection> {
        let mut selections = Vec::new();
        for &year in &SUPPORTED_YEARS {
            for &category in &MortalityCategory::ALL {
                for &metric in &Metric::ALL {
                    for &sort_order in &SortOrder::ALL {
                        selections.push(Selection {
                            year,
                            category,
                            metric,
                            sort_order,
                        });
                    }
                }
            }
        }
        selections
    }
}
