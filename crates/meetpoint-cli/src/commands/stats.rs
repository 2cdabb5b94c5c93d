use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::commands::load_planner;
use crate::output::DataFormat;

/// Sizes of the loaded map and the graph built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MapStats {
    pub nodes: usize,
    pub footways: usize,
    pub buildings: usize,
    pub vertices: usize,
    pub edges: usize,
}

impl MapStats {
    fn render_text(&self) -> String {
        format!(
            "# of nodes: {}\n# of footways: {}\n# of buildings: {}\n# of vertices: {}\n# of edges: {}\n",
            self.nodes, self.footways, self.buildings, self.vertices, self.edges
        )
    }
}

/// Handle `meetpoint stats`.
pub fn handle_stats(map_path: &Path, format: DataFormat) -> Result<()> {
    let planner = load_planner(map_path)?;
    let (map, graph) = (planner.map(), planner.graph());
    let stats = MapStats {
        nodes: map.nodes.len(),
        footways: map.footways.len(),
        buildings: map.buildings.len(),
        vertices: graph.num_vertices(),
        edges: graph.num_edges(),
    };

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", stats.render_text());
    }
    Ok(())
}
