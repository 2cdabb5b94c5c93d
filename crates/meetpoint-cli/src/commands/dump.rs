use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::commands::load_planner;

/// Handle `meetpoint dump`: write the footway graph's debug dump to stdout.
pub fn handle_dump(map_path: &Path) -> Result<()> {
    let planner = load_planner(map_path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    planner
        .graph()
        .dump(&mut out)
        .context("failed to write graph dump")?;
    out.flush()?;
    Ok(())
}
