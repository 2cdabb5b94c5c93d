// Subcommand handlers.
//
// main.rs parses arguments and dispatches here; each module owns one subcommand.

pub mod buildings;
pub mod dump;
pub mod meet;
pub mod stats;

use std::path::Path;

use anyhow::{Context, Result};
use meetpoint_lib::{load_campus_map, CampusMap, MeetingPlanner};

/// Load and validate the campus map at `path`.
pub fn load_map(path: &Path) -> Result<CampusMap> {
    load_campus_map(path)
        .with_context(|| format!("failed to load campus map from {}", path.display()))
}

/// Load the campus map and build a planner over its footway graph.
pub fn load_planner(path: &Path) -> Result<MeetingPlanner> {
    let map = load_map(path)?;
    MeetingPlanner::new(map)
        .with_context(|| format!("campus map {} cannot be routed", path.display()))
}
