use std::path::Path;

use anyhow::Result;

use crate::commands::load_map;
use crate::output::DataFormat;

/// Handle `meetpoint buildings`: list every building in map order.
pub fn handle_buildings(map_path: &Path, format: DataFormat) -> Result<()> {
    let map = load_map(map_path)?;

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&map.buildings)?);
        return Ok(());
    }

    for (index, building) in map.buildings.iter().enumerate() {
        println!(
            "{index:>3}. {:<8} {} {}",
            building.abbrev, building.name, building.coordinate
        );
    }
    Ok(())
}
