//! Dashboard assembly and static export for the US state mortality tables.
//!
//! This crate provides:
//! - `state`: reactive selection state with subscriber callbacks
//! - `panes`: the map, ranking table, and bar chart builders
//! - `scale`: the sequential color scale backing the choropleth
//! - `widgets`: the four selection controls
//! - `dashboard`: data + state + panes wired together
//! - `export` / `html`: the self-contained HTML page writer

pub mod dashboard;
pub mod export;
pub mod html;
pub mod panes;
pub mod scale;
pub mod state;
pub mod widgets;
