//! Common test utilities and fixture helpers.
//!
//! This module provides shared test infrastructure for integration tests,
//! including the campus map fixture and small hand-built graphs.

use std::path::PathBuf;

use meetpoint_lib::{load_campus_map, CampusMap, Graph};
use tempfile::NamedTempFile;

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the campus map fixture.
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    fixtures_dir().join("campus_map.json")
}

/// Load the campus map fixture.
#[allow(dead_code)]
pub fn fixture_map() -> CampusMap {
    load_campus_map(&fixture_path()).expect("fixture loads")
}

/// Graph with vertices {1, 2, 3} and edges 1->2 (1.0), 2->3 (2.0), 1->3 (5.0).
#[allow(dead_code)]
pub fn triangle_graph() -> Graph<i64, f64> {
    let mut graph = Graph::new();
    for vertex in [1, 2, 3] {
        graph.add_vertex(vertex);
    }
    graph.add_edge(1, 2, 1.0);
    graph.add_edge(2, 3, 2.0);
    graph.add_edge(1, 3, 5.0);
    graph
}

/// Write `contents` to a temporary file that lives as long as the handle.
#[allow(dead_code)]
pub fn temp_map_file(contents: &str) -> NamedTempFile {
    use std::io::Write;

    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp map");
    file
}
