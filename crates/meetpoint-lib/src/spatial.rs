//! Lookups that tie named buildings to coordinates and footway nodes.
//!
//! All searches are linear scans that keep the first candidate on ties, so
//! results depend on the order of the building and footway lists.

use std::collections::BTreeMap;

use strsim::{jaro_winkler, normalized_levenshtein};

use crate::error::{Error, Result};
use crate::geo::Coordinate;
use crate::map::{Building, Footway, MapNode, NodeId};

/// Minimum combined similarity for a building to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Find a building by abbreviation, full name, or partial full name.
///
/// Matching is case-sensitive and applied in priority order: an exact
/// abbreviation anywhere in the list beats an exact full name, which beats
/// the first full name containing `query`. Empty queries match nothing.
pub fn find_building(buildings: &[Building], query: &str) -> Option<usize> {
    if query.is_empty() {
        return None;
    }

    buildings
        .iter()
        .position(|building| building.abbrev == query)
        .or_else(|| buildings.iter().position(|building| building.name == query))
        .or_else(|| {
            buildings
                .iter()
                .position(|building| building.name.contains(query))
        })
}

/// Index of the building whose centroid is closest to `point`.
pub fn nearest_building(point: Coordinate, buildings: &[Building]) -> Result<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, building) in buildings.iter().enumerate() {
        let distance = point.distance_to(&building.coordinate);
        if best.map_or(true, |(_, closest)| distance < closest) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index).ok_or(Error::NoBuildings)
}

/// Footway node closest to `point`, scanning footways and their nodes in order.
pub fn nearest_node(
    point: Coordinate,
    footways: &[Footway],
    nodes: &BTreeMap<NodeId, Coordinate>,
) -> Result<MapNode> {
    let mut best: Option<(MapNode, f64)> = None;
    for footway in footways {
        for &id in &footway.nodes {
            let coordinate = *nodes.get(&id).ok_or(Error::UnknownNode { id })?;
            let distance = point.distance_to(&coordinate);
            if best.map_or(true, |(_, closest)| distance < closest) {
                best = Some((MapNode { id, coordinate }, distance));
            }
        }
    }
    best.map(|(node, _)| node).ok_or(Error::NoFootwayNodes)
}

/// Footway node closest to the centroid of `buildings[building_index]`.
pub fn nearest_footway_node(
    building_index: usize,
    footways: &[Footway],
    nodes: &BTreeMap<NodeId, Coordinate>,
    buildings: &[Building],
) -> Result<MapNode> {
    let building = buildings
        .get(building_index)
        .ok_or(Error::BuildingIndexOutOfRange {
            index: building_index,
            len: buildings.len(),
        })?;
    nearest_node(building.coordinate, footways, nodes)
}

/// Building names or abbreviations resembling `query`, best match first.
pub fn fuzzy_building_matches(buildings: &[Building], query: &str, limit: usize) -> Vec<String> {
    let query_lower = query.to_lowercase();
    let mut scored: Vec<(f64, &str)> = buildings
        .iter()
        .filter_map(|building| {
            [building.abbrev.as_str(), building.name.as_str()]
                .into_iter()
                .map(|candidate| (similarity(&query_lower, candidate), candidate))
                .max_by(|a, b| a.0.total_cmp(&b.0))
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    let mut suggestions: Vec<String> = Vec::new();
    for (_, candidate) in scored {
        if suggestions.len() == limit {
            break;
        }
        if !suggestions.iter().any(|existing| existing == candidate) {
            suggestions.push(candidate.to_string());
        }
    }
    suggestions
}

fn similarity(query_lower: &str, candidate: &str) -> f64 {
    let candidate_lower = candidate.to_lowercase();
    jaro_winkler(query_lower, &candidate_lower) * 0.7
        + normalized_levenshtein(query_lower, &candidate_lower) * 0.3
}
