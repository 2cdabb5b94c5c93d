use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::Coordinate;
use crate::graph::{build_footway_graph, Graph};
use crate::map::{CampusMap, MapNode, NodeId};
use crate::path::{dijkstra, Route};
use crate::spatial::{
    find_building, fuzzy_building_matches, nearest_building, nearest_footway_node,
};

/// Number of "did you mean" suggestions attached to unknown building errors.
const MAX_SUGGESTIONS: usize = 3;

/// Two building queries (abbreviation, full name, or part of a full name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingRequest {
    pub first: String,
    pub second: String,
}

impl MeetingRequest {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

/// Resolved building with its position in the building list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingRef {
    pub index: usize,
    pub name: String,
    pub abbrev: String,
    pub coordinate: Coordinate,
}

/// Walk from one origin node to the meeting node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Leg {
    /// `path` lists footway nodes from the origin to the meeting node inclusive.
    Reached { miles: f64, path: Vec<NodeId> },
    Unreachable,
}

impl Leg {
    pub fn miles(&self) -> Option<f64> {
        match self {
            Leg::Reached { miles, .. } => Some(*miles),
            Leg::Unreachable => None,
        }
    }

    pub fn path(&self) -> Option<&[NodeId]> {
        match self {
            Leg::Reached { path, .. } => Some(path.as_slice()),
            Leg::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Leg::Reached { .. })
    }
}

impl From<Route<NodeId, f64>> for Leg {
    fn from(route: Route<NodeId, f64>) -> Self {
        match route {
            Route::Reached { path, distance } => Leg::Reached {
                miles: distance,
                path,
            },
            Route::Unreachable => Leg::Unreachable,
        }
    }
}

/// Meeting point and both walking legs for a [`MeetingRequest`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingPlan {
    pub first: BuildingRef,
    pub second: BuildingRef,
    pub midpoint: Coordinate,
    pub meeting: BuildingRef,
    pub first_node: MapNode,
    pub second_node: MapNode,
    pub meeting_node: MapNode,
    pub first_leg: Leg,
    pub second_leg: Leg,
}

/// Answers meeting queries against one campus map.
///
/// The footway graph is built once on construction and only read afterwards,
/// so a planner can be shared between threads.
#[derive(Debug, Clone)]
pub struct MeetingPlanner {
    map: CampusMap,
    graph: Graph<NodeId, f64>,
}

impl MeetingPlanner {
    pub fn new(map: CampusMap) -> Result<Self> {
        if map.buildings.is_empty() {
            return Err(Error::NoBuildings);
        }
        if map.footways.iter().all(|footway| footway.nodes.is_empty()) {
            return Err(Error::NoFootwayNodes);
        }

        let graph = build_footway_graph(&map);
        Ok(Self { map, graph })
    }

    pub fn map(&self) -> &CampusMap {
        &self.map
    }

    pub fn graph(&self) -> &Graph<NodeId, f64> {
        &self.graph
    }

    /// Resolve a building query to its index, suggesting close names on failure.
    pub fn resolve_building(&self, query: &str) -> Result<usize> {
        find_building(&self.map.buildings, query).ok_or_else(|| Error::UnknownBuilding {
            name: query.to_string(),
            suggestions: fuzzy_building_matches(&self.map.buildings, query, MAX_SUGGESTIONS),
        })
    }

    /// Pick the building nearest the midpoint of both origins and route each
    /// origin to it along the footways.
    pub fn plan(&self, request: &MeetingRequest) -> Result<MeetingPlan> {
        let first = self.resolve_building(&request.first)?;
        let second = self.resolve_building(&request.second)?;

        let first_ref = self.building_ref(first)?;
        let second_ref = self.building_ref(second)?;
        let center = first_ref.coordinate.midpoint_with(&second_ref.coordinate);
        let meeting_ref = self.building_ref(nearest_building(center, &self.map.buildings)?)?;

        let first_node = self.snap(first)?;
        let second_node = self.snap(second)?;
        let meeting_node = self.snap(meeting_ref.index)?;

        debug!(
            first = %first_ref.abbrev,
            second = %second_ref.abbrev,
            meeting = %meeting_ref.abbrev,
            first_node = first_node.id,
            second_node = second_node.id,
            meeting_node = meeting_node.id,
            "resolved meeting point"
        );

        let first_leg = Leg::from(dijkstra(&self.graph, first_node.id)?.route_to(meeting_node.id));
        let second_leg =
            Leg::from(dijkstra(&self.graph, second_node.id)?.route_to(meeting_node.id));

        Ok(MeetingPlan {
            first: first_ref,
            second: second_ref,
            midpoint: center,
            meeting: meeting_ref,
            first_node,
            second_node,
            meeting_node,
            first_leg,
            second_leg,
        })
    }

    fn snap(&self, building: usize) -> Result<MapNode> {
        nearest_footway_node(
            building,
            &self.map.footways,
            &self.map.nodes,
            &self.map.buildings,
        )
    }

    fn building_ref(&self, index: usize) -> Result<BuildingRef> {
        let building = self
            .map
            .building(index)
            .ok_or(Error::BuildingIndexOutOfRange {
                index,
                len: self.map.buildings.len(),
            })?;
        Ok(BuildingRef {
            index,
            name: building.name.clone(),
            abbrev: building.abbrev.clone(),
            coordinate: building.coordinate,
        })
    }
}

/// One-off meeting query. Prefer [`MeetingPlanner`] when answering several
/// queries against the same map.
pub fn plan_meeting(map: &CampusMap, request: &MeetingRequest) -> Result<MeetingPlan> {
    MeetingPlanner::new(map.clone())?.plan(request)
}
