use crate::category::MortalityCategory;
use crate::record::{parse_mortality_csv, MortalityRecord};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Years covered by the published tables, oldest first. The year widget
/// offers exactly these.
pub const SUPPORTED_YEARS: [i32; 8] = [2014, 2015, 2016, 2017, 2018, 2019, 2020, 2021];

/// One category's table.
#[derive(Debug, Clone)]
pub struct MortalityTable {
    pub category: MortalityCategory,
    pub records: Vec<MortalityRecord>,
}

impl MortalityTable {
    pub fn new(category: MortalityCategory, records: Vec<MortalityRecord>) -> Self {
        Self { category, records }
    }
}

/// Where the three tables live on disk.
#[derive(Debug, Clone)]
pub struct DatasetPaths {
    pub firearm: PathBuf,
    pub homicide: PathBuf,
    pub drug_overdose: PathBuf,
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self {
            firearm: PathBuf::from(MortalityCategory::Firearm.default_file_name()),
            homicide: PathBuf::from(MortalityCategory::Homicide.default_file_name()),
            drug_overdose: PathBuf::from(MortalityCategory::DrugOverdose.default_file_name()),
        }
    }
}

/// The three mortality tables. Loaded once at startup and read-only for the
/// rest of the process; every derivation copies what it needs.
#[derive(Debug, Clone)]
pub struct MortalityDataset {
    firearm: MortalityTable,
    homicide: MortalityTable,
    drug_overdose: MortalityTable,
}

impl MortalityDataset {
    /// Load all three tables. A missing or malformed file is fatal; there is
    /// no partial dashboard.
    pub fn load(paths: &DatasetPaths) -> Result<Self> {
        Ok(Self {
            firearm: load_table(MortalityCategory::Firearm, &paths.firearm)?,
            homicide: load_table(MortalityCategory::Homicide, &paths.homicide)?,
            drug_overdose: load_table(MortalityCategory::DrugOverdose, &paths.drug_overdose)?,
        })
    }

    /// Assemble a dataset from already-parsed tables.
    pub fn from_tables(
        firearm: MortalityTable,
        homicide: MortalityTable,
        drug_overdose: MortalityTable,
    ) -> Self {
        Self {
            firearm,
            homicide,
            drug_overdose,
        }
    }

    /// The records backing one category.
    pub fn records(&self, category: MortalityCategory) -> &[MortalityRecord] {
        match category {
            MortalityCategory::Firearm => &self.firearm.records,
            MortalityCategory::Homicide => &self.homicide.records,
            MortalityCategory::DrugOverdose => &self.drug_overdose.records,
        }
    }

    /// Distinct state names across all three tables, sorted.
    pub fn state_names(&self) -> Vec<String> {
        let mut names: Vec<String> = MortalityCategory::ALL
            .iter()
            .flat_map(|category| self.records(*category))
            .map(|record| record.state.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

fn load_table(category: MortalityCategory, path: &Path) -> Result<MortalityTable> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("failed to read {} table: {:?}", category.label(), path))?;
    let records = parse_mortality_csv(&body)
        .with_context(|| format!("failed to parse {} table: {:?}", category.label(), path))?;
    log::info!(
        "loaded {} {} records from {:?}",
        records.len(),
        category.label(),
        path
    );
    Ok(MortalityTable::new(category, records))
}
