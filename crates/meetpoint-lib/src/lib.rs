//! Meetpoint library entry points.
//!
//! This crate loads a parsed campus map, builds the footway graph, and finds a
//! fair meeting building for two people together with the shortest walking
//! path for each of them. Higher-level consumers (the CLI) should only depend
//! on the functions exported here instead of reimplementing behavior.

pub mod error;
pub mod geo;
pub mod graph;
pub mod map;
pub mod output;
pub mod path;
pub mod routing;
pub mod spatial;

pub use error::{Error, Result};
pub use geo::{distance_miles, midpoint, Coordinate, EARTH_RADIUS_MILES};
pub use graph::{build_footway_graph, EdgeWeight, Graph, Vertex};
pub use map::{load_campus_map, Building, CampusMap, Footway, MapNode, NodeId};
pub use output::RenderMode;
pub use path::{dijkstra, shortest_route, trace_path, Route, ShortestPaths};
pub use routing::{plan_meeting, BuildingRef, Leg, MeetingPlan, MeetingPlanner, MeetingRequest};
pub use spatial::{
    find_building, fuzzy_building_matches, nearest_building, nearest_footway_node, nearest_node,
};
