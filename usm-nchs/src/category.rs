use serde::{Deserialize, Serialize};

/// The three mortality tables the dashboard serves. Each variant is backed
/// by its own CSV file; after loading, the three tables share one schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MortalityCategory {
    Firearm,
    Homicide,
    DrugOverdose,
}

impl MortalityCategory {
    /// Every category, in widget display order.
    pub const ALL: [MortalityCategory; 3] = [
        MortalityCategory::Firearm,
        MortalityCategory::Homicide,
        MortalityCategory::DrugOverdose,
    ];

    /// Label shown in the category selector.
    pub fn label(&self) -> &'static str {
        match self {
            MortalityCategory::Firearm => "Firearm Mortality",
            MortalityCategory::Homicide => "Homicide Mortality",
            MortalityCategory::DrugOverdose => "Drug Overdose Mortality",
        }
    }

    /// Short identifier used in selection keys and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            MortalityCategory::Firearm => "firearm",
            MortalityCategory::Homicide => "homicide",
            MortalityCategory::DrugOverdose => "drug-overdose",
        }
    }

    /// File name of this category's table in the published data drop.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            MortalityCategory::Firearm => "FM.CSV",
            MortalityCategory::Homicide => "HM.CSV",
            MortalityCategory::DrugOverdose => "DOM.CSV",
        }
    }

    /// Inverse of [`MortalityCategory::id`].
    pub fn from_id(id: &str) -> Option<MortalityCategory> {
        MortalityCategory::ALL
            .into_iter()
            .find(|category| category.id() == id)
    }
}
