use std::path::Path;

use anyhow::{Context, Result};
use meetpoint_lib::MeetingRequest;
use tracing::info;

use crate::commands::load_planner;
use crate::output::OutputFormat;

/// Handle `meetpoint meet`: resolve both buildings and print the meeting plan.
pub fn handle_meet(map_path: &Path, from: &str, to: &str, format: OutputFormat) -> Result<()> {
    let planner = load_planner(map_path)?;
    let plan = planner
        .plan(&MeetingRequest::new(from, to))
        .with_context(|| format!("failed to plan a meeting between '{from}' and '{to}'"))?;

    info!(
        meeting = %plan.meeting.abbrev,
        first_reached = plan.first_leg.is_reachable(),
        second_reached = plan.second_leg.is_reachable(),
        "meeting planned"
    );

    match format.render_mode() {
        Some(mode) => print!("{}", plan.render(mode)),
        None => println!("{}", serde_json::to_string_pretty(&plan)?),
    }
    Ok(())
}
