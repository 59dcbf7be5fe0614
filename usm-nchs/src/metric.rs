use serde::{Deserialize, Serialize};

/// Which measured column the panes display: the age-adjusted rate per
/// 100,000 population, or the absolute death count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Rate,
    DeathsCount,
}

impl Metric {
    /// Both metrics, in widget display order.
    pub const ALL: [Metric; 2] = [Metric::Rate, Metric::DeathsCount];

    /// Label shown in the metric selector.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Rate => "Mortality Rate",
            Metric::DeathsCount => "Deaths Count",
        }
    }

    /// Normalized column this metric reads from a mortality table.
    pub fn column(&self) -> &'static str {
        match self {
            Metric::Rate => "RATE",
            Metric::DeathsCount => "DEATHS",
        }
    }

    /// Short identifier used in selection keys and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Metric::Rate => "rate",
            Metric::DeathsCount => "deaths",
        }
    }

    /// Inverse of [`Metric::id`].
    pub fn from_id(id: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|metric| metric.id() == id)
    }
}
