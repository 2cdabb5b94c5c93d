//! Single-source shortest paths over a [`Graph`].
//!
//! [`dijkstra`] computes distance and predecessor maps for every vertex known
//! to the graph. [`ShortestPaths::route_to`] turns those maps into a tagged
//! [`Route`], while [`trace_path`] exposes the raw predecessor walk.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;
use tracing::trace;

use crate::error::{Error, Result};
use crate::graph::{EdgeWeight, Graph, Vertex};

/// Outcome of looking up the path to a destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Route<V, W> {
    /// `path` runs from the source to the destination, both inclusive.
    Reached { path: Vec<V>, distance: W },
    /// No finite-weight path exists.
    Unreachable,
}

impl<V, W: Copy> Route<V, W> {
    pub fn is_reached(&self) -> bool {
        matches!(self, Route::Reached { .. })
    }

    pub fn distance(&self) -> Option<W> {
        match self {
            Route::Reached { distance, .. } => Some(*distance),
            Route::Unreachable => None,
        }
    }

    pub fn path(&self) -> Option<&[V]> {
        match self {
            Route::Reached { path, .. } => Some(path.as_slice()),
            Route::Unreachable => None,
        }
    }

    /// Number of edges walked, zero when already at the destination.
    pub fn hop_count(&self) -> Option<usize> {
        self.path().map(|path| path.len().saturating_sub(1))
    }
}

/// Distance and predecessor maps produced by one [`dijkstra`] run.
#[derive(Debug, Clone)]
pub struct ShortestPaths<V, W> {
    source: V,
    distances: HashMap<V, W>,
    predecessors: HashMap<V, Option<V>>,
}

impl<V: Vertex, W: EdgeWeight + PartialEq> PartialEq for ShortestPaths<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.distances == other.distances
            && self.predecessors == other.predecessors
    }
}

impl<V: Vertex, W: EdgeWeight> ShortestPaths<V, W> {
    pub fn source(&self) -> V {
        self.source
    }

    /// Shortest known distance to `vertex`; infinity when unreached, `None`
    /// when the vertex was not part of the graph.
    pub fn distance(&self, vertex: V) -> Option<W> {
        self.distances.get(&vertex).copied()
    }

    /// Vertex preceding `vertex` on its shortest path.
    pub fn predecessor(&self, vertex: V) -> Option<V> {
        self.predecessors.get(&vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: V) -> bool {
        self.distance(vertex)
            .is_some_and(|distance| !distance.is_infinite())
    }

    pub fn distances(&self) -> &HashMap<V, W> {
        &self.distances
    }

    pub fn predecessors(&self) -> &HashMap<V, Option<V>> {
        &self.predecessors
    }

    /// Resolve the shortest path from the source to `dest`.
    pub fn route_to(&self, dest: V) -> Route<V, W> {
        if dest == self.source {
            return Route::Reached {
                path: vec![dest],
                distance: W::zero(),
            };
        }

        match self.distance(dest) {
            Some(distance) if !distance.is_infinite() => Route::Reached {
                path: trace_path(&self.predecessors, self.source, dest),
                distance,
            },
            _ => Route::Unreachable,
        }
    }
}

/// Run Dijkstra's algorithm from `source` over every vertex of `graph`.
///
/// Edge weights must be non-negative. Ties between equal distances are
/// settled by vertex order, so repeated runs produce identical maps.
pub fn dijkstra<V: Vertex, W: EdgeWeight>(
    graph: &Graph<V, W>,
    source: V,
) -> Result<ShortestPaths<V, W>> {
    if !graph.contains_vertex(source) {
        return Err(Error::UnknownVertex {
            vertex: source.to_string(),
        });
    }

    let vertices = graph.vertices();
    let mut distances = HashMap::with_capacity(vertices.len());
    let mut predecessors = HashMap::with_capacity(vertices.len());
    let mut frontier = BinaryHeap::with_capacity(vertices.len() + 1);

    for &vertex in &vertices {
        distances.insert(vertex, W::infinity());
        predecessors.insert(vertex, None);
        frontier.push(QueueEntry::new(vertex, W::infinity()));
    }
    distances.insert(source, W::zero());
    frontier.push(QueueEntry::new(source, W::zero()));

    let mut finalized = HashSet::with_capacity(vertices.len());
    while let Some(entry) = frontier.pop() {
        if entry.cost.is_infinite() {
            break;
        }
        // Stale entry for a vertex that was already settled at a lower cost.
        if !finalized.insert(entry.vertex) {
            continue;
        }

        for (neighbour, weight) in graph.edges(entry.vertex) {
            let candidate = entry.cost.plus(weight);
            let current = distances
                .get(&neighbour)
                .copied()
                .unwrap_or_else(W::infinity);
            if candidate.compare(&current) == Ordering::Less {
                distances.insert(neighbour, candidate);
                predecessors.insert(neighbour, Some(entry.vertex));
                frontier.push(QueueEntry::new(neighbour, candidate));
            }
        }
    }

    trace!(
        source = %source,
        vertices = vertices.len(),
        settled = finalized.len(),
        "dijkstra finished"
    );

    Ok(ShortestPaths {
        source,
        distances,
        predecessors,
    })
}

/// Shortest route between two vertices.
pub fn shortest_route<V: Vertex, W: EdgeWeight>(
    graph: &Graph<V, W>,
    source: V,
    dest: V,
) -> Result<Route<V, W>> {
    Ok(dijkstra(graph, source)?.route_to(dest))
}

/// Walk `predecessors` back from `dest` and return the forward path.
///
/// Returns an empty path when `source == dest`, and `[dest]` alone when the
/// chain from `dest` never arrives at `source`. Otherwise the path starts at
/// `source` and ends at `dest`.
pub fn trace_path<V: Vertex>(predecessors: &HashMap<V, Option<V>>, source: V, dest: V) -> Vec<V> {
    if source == dest {
        return Vec::new();
    }

    let mut path = vec![dest];
    let mut current = predecessors.get(&dest).copied().flatten();
    while let Some(vertex) = current {
        path.push(vertex);
        if vertex == source {
            path.reverse();
            return path;
        }
        // A chain longer than the map has vertices must contain a cycle.
        if path.len() > predecessors.len() {
            break;
        }
        current = predecessors.get(&vertex).copied().flatten();
    }
    vec![dest]
}

#[derive(Copy, Clone, Debug)]
struct QueueEntry<V, W> {
    vertex: V,
    cost: W,
}

impl<V, W> QueueEntry<V, W> {
    fn new(vertex: V, cost: W) -> Self {
        Self { vertex, cost }
    }
}

impl<V: Vertex, W: EdgeWeight> PartialEq for QueueEntry<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: Vertex, W: EdgeWeight> Eq for QueueEntry<V, W> {}

impl<V: Vertex, W: EdgeWeight> Ord for QueueEntry<V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .compare(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl<V: Vertex, W: EdgeWeight> PartialOrd for QueueEntry<V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
