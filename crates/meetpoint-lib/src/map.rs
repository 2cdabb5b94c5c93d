use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::Coordinate;

/// Identifier of a map node (an OSM node id).
pub type NodeId = i64;

/// A footway node together with its position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapNode {
    pub id: NodeId,
    pub coordinate: Coordinate,
}

/// Walkable path given as an ordered list of node identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footway {
    pub id: i64,
    pub nodes: Vec<NodeId>,
}

/// Named campus building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub name: String,
    pub abbrev: String,
    /// Centroid of the footprint.
    pub coordinate: Coordinate,
    #[serde(default)]
    pub footprint: Vec<Coordinate>,
}

/// In-memory representation of a parsed campus map.
#[derive(Debug, Clone, Default)]
pub struct CampusMap {
    pub nodes: BTreeMap<NodeId, Coordinate>,
    pub footways: Vec<Footway>,
    pub buildings: Vec<Building>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    id: NodeId,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct RawCampusMap {
    nodes: Vec<RawNode>,
    #[serde(default)]
    footways: Vec<Footway>,
    buildings: Vec<Building>,
}

impl CampusMap {
    /// Assemble a map from already-parsed parts, validating cross references.
    pub fn from_parts(
        nodes: BTreeMap<NodeId, Coordinate>,
        footways: Vec<Footway>,
        buildings: Vec<Building>,
    ) -> Result<Self> {
        let map = Self {
            nodes,
            footways,
            buildings,
        };
        map.validate()?;
        Ok(map)
    }

    /// Parse a JSON campus map document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawCampusMap = serde_json::from_str(json)?;

        let mut nodes = BTreeMap::new();
        for node in raw.nodes {
            if nodes
                .insert(node.id, Coordinate::new(node.lat, node.lon))
                .is_some()
            {
                return Err(Error::InvalidMap {
                    message: format!("duplicate node id {}", node.id),
                });
            }
        }

        Self::from_parts(nodes, raw.footways, raw.buildings)
    }

    /// Lookup a node with its coordinates.
    pub fn node(&self, id: NodeId) -> Option<MapNode> {
        self.nodes.get(&id).map(|&coordinate| MapNode { id, coordinate })
    }

    /// Lookup a building by its position in the building list.
    pub fn building(&self, index: usize) -> Option<&Building> {
        self.buildings.get(index)
    }

    fn validate(&self) -> Result<()> {
        if self.buildings.is_empty() {
            return Err(Error::InvalidMap {
                message: "map contains no buildings".to_string(),
            });
        }

        let mut footway_ids = HashSet::new();
        for footway in &self.footways {
            if !footway_ids.insert(footway.id) {
                return Err(Error::InvalidMap {
                    message: format!("duplicate footway id {}", footway.id),
                });
            }
            if let Some(missing) = footway
                .nodes
                .iter()
                .find(|id| !self.nodes.contains_key(*id))
            {
                return Err(Error::InvalidMap {
                    message: format!(
                        "footway {} references unknown node {}",
                        footway.id, missing
                    ),
                });
            }
        }

        Ok(())
    }
}

/// Load and validate a campus map from a JSON file.
pub fn load_campus_map(path: &Path) -> Result<CampusMap> {
    let json = fs::read_to_string(path).map_err(|source| Error::MapRead {
        path: path.to_path_buf(),
        source,
    })?;
    let map = CampusMap::from_json_str(&json)?;
    debug!(
        path = %path.display(),
        nodes = map.nodes.len(),
        footways = map.footways.len(),
        buildings = map.buildings.len(),
        "loaded campus map"
    );
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn building(name: &str, abbrev: &str) -> Building {
        Building {
            name: name.to_string(),
            abbrev: abbrev.to_string(),
            coordinate: Coordinate::new(0.0, 0.0),
            footprint: Vec::new(),
        }
    }

    #[test]
    fn parses_minimal_document() {
        let map = CampusMap::from_json_str(
            r#"{
                "nodes": [{"id": 1, "lat": 41.0, "lon": -87.0}, {"id": 2, "lat": 41.001, "lon": -87.0}],
                "footways": [{"id": 10, "nodes": [1, 2]}],
                "buildings": [{"name": "Hall", "abbrev": "H", "coordinate": {"lat": 41.0, "lon": -87.0}}]
            }"#,
        )
        .expect("valid map");

        assert_eq!(map.nodes.len(), 2);
        assert_eq!(map.footways[0].nodes, vec![1, 2]);
        assert!(map.buildings[0].footprint.is_empty());
        assert_eq!(map.node(2).map(|n| n.coordinate.lat), Some(41.001));
        assert!(map.node(3).is_none());
    }

    #[test]
    fn rejects_duplicate_nodes() {
        let err = CampusMap::from_json_str(
            r#"{
                "nodes": [{"id": 1, "lat": 0.0, "lon": 0.0}, {"id": 1, "lat": 1.0, "lon": 1.0}],
                "buildings": [{"name": "Hall", "abbrev": "H", "coordinate": {"lat": 0.0, "lon": 0.0}}]
            }"#,
        )
        .expect_err("duplicate node");
        assert!(err.to_string().contains("duplicate node id 1"));
    }

    #[test]
    fn rejects_footway_with_unknown_node() {
        let nodes = BTreeMap::from([(1, Coordinate::new(0.0, 0.0))]);
        let footways = vec![Footway {
            id: 5,
            nodes: vec![1, 9],
        }];
        let err = CampusMap::from_parts(nodes, footways, vec![building("Hall", "H")])
            .expect_err("unknown node");
        assert!(matches!(err, Error::InvalidMap { .. }));
        assert!(err.to_string().contains("unknown node 9"));
    }

    #[test]
    fn rejects_empty_building_list() {
        let err = CampusMap::from_parts(BTreeMap::new(), Vec::new(), Vec::new())
            .expect_err("no buildings");
        assert!(err.to_string().contains("no buildings"));
    }

    #[test]
    fn reports_malformed_json() {
        let err = CampusMap::from_json_str("{ not json").expect_err("malformed");
        assert!(matches!(err, Error::Json(_)));
    }
}
