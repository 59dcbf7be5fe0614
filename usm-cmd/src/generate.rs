//! Full dashboard export: load the three tables and the boundary file,
//! precompute every selection state, write one HTML page.

use anyhow::Result;
use log::info;
use std::path::Path;
use usm_dashboard::dashboard::Dashboard;
use usm_dashboard::export::export_dashboard;
use usm_geo::boundaries::StateBoundaries;
use usm_nchs::dataset::{DatasetPaths, MortalityDataset};

pub fn run_generate(paths: &DatasetPaths, boundaries: &Path, output: &Path) -> Result<()> {
    let dataset = MortalityDataset::load(paths)?;
    let boundaries = StateBoundaries::load_default(boundaries)?;

    let mut dashboard = Dashboard::new(dataset, boundaries);
    export_dashboard(&mut dashboard, output)?;

    info!("Generate complete. Output: {}", output.display());
    Ok(())
}
