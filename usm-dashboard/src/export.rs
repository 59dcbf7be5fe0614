//! Whole-dashboard export.
//!
//! The exported page is static: every reachable selection is precomputed
//! here and embedded, and the page script swaps artifacts in and out as the
//! controls move. The boundary collection is embedded exactly once; the
//! per-selection artifacts reference states by name only.

use crate::dashboard::Dashboard;
use crate::html;
use crate::panes::map::TileLayers;
use crate::panes::Panes;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use usm_data::selection::Selection;

/// Everything the page needs: artifacts keyed by selection, the boundary
/// collection, and the key of the state the page opens in.
#[derive(Debug, Serialize)]
pub struct ExportBundle {
    pub initial: String,
    pub states: BTreeMap<String, Panes>,
    pub boundaries: serde_json::Value,
    pub name_property: String,
    pub tiles: TileLayers,
    pub generated_at: String,
}

/// Drive the dashboard through the combinations [`Selection::all`]
/// enumerates and capture the pane snapshot after each one. Every setter
/// call goes through the reactive binder, so each capture is exactly what
/// a user walking the controls to that combination would see.
pub fn collect_states(dashboard: &mut Dashboard) -> BTreeMap<String, Panes> {
    let mut states = BTreeMap::new();
    for selection in Selection::all() {
        dashboard.set_year(selection.year);
        dashboard.set_category(selection.category);
        dashboard.set_metric(selection.metric);
        dashboard.set_sort_order(selection.sort_order);
        states.insert(selection.key(), dashboard.panes());
    }
    states
}

/// Report states that cannot join the boundary file, in both directions.
/// Neither direction is an error: a data state without a polygon renders as
/// a marker only, a polygon without data renders unfilled.
fn log_boundary_join(dashboard: &Dashboard) {
    let data_states: BTreeSet<String> = dashboard.dataset().state_names().into_iter().collect();
    let boundaries = dashboard.boundaries();
    for state in &data_states {
        if !boundaries.contains(state) {
            log::info!("state '{}' has data but no boundary polygon", state);
        }
    }
    for name in boundaries.names() {
        if !data_states.contains(name) {
            log::info!("boundary '{}' has no data rows; it renders unfilled", name);
        }
    }
}

/// Assemble the bundle for the current dashboard. Leaves the dashboard on
/// the last combination walked; the page opens on the default selection
/// regardless.
pub fn build_bundle(dashboard: &mut Dashboard) -> Result<ExportBundle> {
    log_boundary_join(dashboard);
    let states = collect_states(dashboard);
    Ok(ExportBundle {
        initial: Selection::default().key(),
        states,
        boundaries: dashboard.boundaries().to_json()?,
        name_property: dashboard.boundaries().name_property().to_string(),
        tiles: TileLayers::default(),
        generated_at: Utc::now().to_rfc3339(),
    })
}

/// Export the dashboard as one self-contained HTML file.
pub fn export_dashboard(dashboard: &mut Dashboard, output: &Path) -> Result<()> {
    let bundle = build_bundle(dashboard)?;
    let file = File::create(output)
        .with_context(|| format!("failed to create output file: {:?}", output))?;
    let mut writer = BufWriter::new(file);
    html::write_page(&mut writer, &bundle, Selection::default())?;
    writer
        .flush()
        .with_context(|| format!("failed to write output file: {:?}", output))?;
    log::info!(
        "exported dashboard with {} embedded selection states to {:?}",
        bundle.states.len(),
        output
    );
    Ok(())
}
