use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::hash::Hash;
use std::io::{self, Write};

use tracing::{debug, warn};

use crate::geo::distance_miles;
use crate::map::{CampusMap, NodeId};

/// Key type accepted as a graph vertex.
pub trait Vertex: Copy + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

impl<T> Vertex for T where T: Copy + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

/// Numeric weight carried by a graph edge.
///
/// Weights must be non-negative for shortest-path searches to be meaningful.
pub trait EdgeWeight: Copy + PartialOrd + fmt::Debug + fmt::Display {
    /// Additive identity, the distance of a source to itself.
    fn zero() -> Self;

    /// Distance of a vertex that has not been reached.
    fn infinity() -> Self;

    /// Sum of two weights. Integer weights saturate at [`EdgeWeight::infinity`].
    fn plus(self, other: Self) -> Self;

    /// Total ordering used by priority queues.
    fn compare(&self, other: &Self) -> Ordering;

    fn is_infinite(&self) -> bool {
        self.compare(&Self::infinity()) == Ordering::Equal
    }
}

macro_rules! float_weight {
    ($($ty:ty),*) => {$(
        impl EdgeWeight for $ty {
            fn zero() -> Self {
                0.0
            }

            fn infinity() -> Self {
                <$ty>::INFINITY
            }

            fn plus(self, other: Self) -> Self {
                self + other
            }

            fn compare(&self, other: &Self) -> Ordering {
                self.total_cmp(other)
            }
        }
    )*};
}

macro_rules! integer_weight {
    ($($ty:ty),*) => {$(
        impl EdgeWeight for $ty {
            fn zero() -> Self {
                0
            }

            fn infinity() -> Self {
                <$ty>::MAX
            }

            fn plus(self, other: Self) -> Self {
                self.saturating_add(other)
            }

            fn compare(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        }
    )*};
}

float_weight!(f32, f64);
integer_weight!(u32, u64);

/// Directed weighted graph stored as an adjacency map.
///
/// Undirected connectivity is modelled by inserting both `(u, v)` and `(v, u)`.
#[derive(Debug, Clone)]
pub struct Graph<V, W> {
    adjacency: HashMap<V, HashMap<V, W>>,
    edge_count: usize,
}

impl<V, W> Default for Graph<V, W> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }
}

impl<V: Vertex, W: EdgeWeight> Graph<V, W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `vertex` without edges. Returns `false` if it already exists.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, HashMap::new());
        true
    }

    /// Insert or update the directed edge `from -> to`.
    ///
    /// Returns `false` when either endpoint is unknown. Updating the weight of
    /// an existing edge leaves [`Graph::num_edges`] unchanged.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> bool {
        if !self.adjacency.contains_key(&to) {
            return false;
        }
        let Some(edges) = self.adjacency.get_mut(&from) else {
            return false;
        };
        if edges.insert(to, weight).is_none() {
            self.edge_count += 1;
        }
        true
    }

    /// Weight of the edge `from -> to`, if present.
    pub fn weight(&self, from: V, to: V) -> Option<W> {
        self.adjacency
            .get(&from)
            .and_then(|edges| edges.get(&to))
            .copied()
    }

    /// Vertices reachable by one outgoing edge from `vertex`.
    pub fn neighbours(&self, vertex: V) -> BTreeSet<V> {
        self.adjacency
            .get(&vertex)
            .map(|edges| edges.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Outgoing edges of `vertex` as `(target, weight)` pairs.
    pub fn edges(&self, vertex: V) -> impl Iterator<Item = (V, W)> + '_ {
        self.adjacency
            .get(&vertex)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(target, weight)| (*target, *weight)))
    }

    /// All vertices in unspecified order.
    pub fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().copied().collect()
    }

    pub fn contains_vertex(&self, vertex: V) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edge_count
    }

    /// Write the vertex list and adjacency matrix for debugging.
    ///
    /// Each matrix cell is `F` when there is no edge and `(T,weight)` otherwise.
    pub fn dump<Out: Write>(&self, output: &mut Out) -> io::Result<()> {
        let mut vertices = self.vertices();
        vertices.sort_unstable();

        writeln!(output, "***************************************************")?;
        writeln!(output, "********************* GRAPH ***********************")?;
        writeln!(output, "**Num vertices: {}", self.num_vertices())?;
        writeln!(output, "**Num edges: {}", self.num_edges())?;
        writeln!(output)?;
        writeln!(output, "**Vertices:")?;
        for (index, vertex) in vertices.iter().enumerate() {
            writeln!(output, " {index}. {vertex}")?;
        }
        writeln!(output)?;
        writeln!(output, "**Edges:")?;
        for &row in &vertices {
            write!(output, " row {row}: ")?;
            for &col in &vertices {
                match self.weight(row, col) {
                    Some(weight) => write!(output, "(T,{weight}) ")?,
                    None => write!(output, "F ")?,
                }
            }
            writeln!(output)?;
        }
        writeln!(output, "**************************************************")?;
        Ok(())
    }
}

/// Build the walking graph for a campus map.
///
/// Every node of the node table becomes a vertex. Consecutive footway nodes
/// are joined in both directions by their great-circle distance in miles.
pub fn build_footway_graph(map: &CampusMap) -> Graph<NodeId, f64> {
    let mut graph = Graph::new();
    for &id in map.nodes.keys() {
        graph.add_vertex(id);
    }

    let mut skipped = 0usize;
    for footway in &map.footways {
        for pair in footway.nodes.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let (Some(a), Some(b)) = (map.nodes.get(&from), map.nodes.get(&to)) else {
                warn!(
                    footway = footway.id,
                    from, to, "skipping footway segment with unknown node"
                );
                skipped += 1;
                continue;
            };
            let distance = distance_miles(*a, *b);
            graph.add_edge(from, to, distance);
            graph.add_edge(to, from, distance);
        }
    }

    debug!(
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        footways = map.footways.len(),
        skipped,
        "built footway graph"
    );
    graph
}
