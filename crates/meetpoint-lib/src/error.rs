use std::path::PathBuf;

use thiserror::Error;

use crate::map::NodeId;

/// Convenient result alias for the meetpoint library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a building name or abbreviation could not be found.
    #[error("unknown building: {name}{}", format_suggestions(.suggestions))]
    UnknownBuilding {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a shortest-path search starts from a vertex the graph does not contain.
    #[error("vertex {vertex} is not part of the graph")]
    UnknownVertex { vertex: String },

    /// Raised when a footway references a node missing from the node table.
    #[error("footway node {id} has no coordinates in the node table")]
    UnknownNode { id: NodeId },

    /// Raised when a spatial search is given an empty building list.
    #[error("building list is empty")]
    NoBuildings,

    /// Raised when no footway contains a node to snap buildings onto.
    #[error("no footway contains any nodes")]
    NoFootwayNodes,

    /// Raised when a building index does not address the building list.
    #[error("building index {index} is out of range for {len} buildings")]
    BuildingIndexOutOfRange { index: usize, len: usize },

    /// Raised when a campus map document fails validation.
    #[error("invalid campus map: {message}")]
    InvalidMap { message: String },

    /// Raised when a campus map file cannot be read.
    #[error("failed to read campus map from {path}: {source}")]
    MapRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for JSON decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
