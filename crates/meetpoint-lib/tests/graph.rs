mod common;

use meetpoint_lib::{build_footway_graph, distance_miles, Graph};

use common::{fixture_map, triangle_graph};

#[test]
fn add_vertex_twice_is_a_no_op() {
    let mut graph = triangle_graph();
    let (vertices, edges) = (graph.num_vertices(), graph.num_edges());

    assert!(!graph.add_vertex(1));
    assert_eq!(graph.num_vertices(), vertices);
    assert_eq!(graph.num_edges(), edges);

    assert!(graph.add_vertex(4));
    assert_eq!(graph.num_vertices(), vertices + 1);
}

#[test]
fn add_edge_requires_known_endpoints() {
    let mut graph = triangle_graph();

    assert!(!graph.add_edge(1, 99, 1.0));
    assert!(!graph.add_edge(99, 1, 1.0));
    assert_eq!(graph.num_edges(), 3);
    assert_eq!(graph.weight(1, 99), None);
    assert!(!graph.contains_vertex(99));
}

#[test]
fn readding_an_edge_updates_weight_only() {
    let mut graph = triangle_graph();
    assert_eq!(graph.weight(1, 2), Some(1.0));

    assert!(graph.add_edge(1, 2, 4.5));
    assert_eq!(graph.weight(1, 2), Some(4.5));
    assert_eq!(graph.num_edges(), 3);
}

#[test]
fn edges_are_directed() {
    let graph = triangle_graph();

    assert_eq!(graph.weight(2, 1), None);
    assert_eq!(graph.neighbours(1).into_iter().collect::<Vec<_>>(), vec![2, 3]);
    assert!(graph.neighbours(3).is_empty());
    assert!(graph.neighbours(42).is_empty());
}

#[test]
fn vertices_lists_every_vertex() {
    let graph = triangle_graph();
    let mut vertices = graph.vertices();
    vertices.sort_unstable();
    assert_eq!(vertices, vec![1, 2, 3]);
}

#[test]
fn graph_is_generic_over_keys_and_weights() {
    let mut graph: Graph<char, u32> = Graph::new();
    graph.add_vertex('a');
    graph.add_vertex('b');
    assert!(graph.add_edge('a', 'b', 7));
    assert_eq!(graph.weight('a', 'b'), Some(7));
    assert_eq!(graph.num_edges(), 1);
}

#[test]
fn footway_graph_covers_the_node_table() {
    let map = fixture_map();
    let graph = build_footway_graph(&map);

    assert_eq!(graph.num_vertices(), map.nodes.len());
    // Node 30 is a footprint node that no footway walks through.
    assert!(graph.contains_vertex(30));
    assert!(graph.neighbours(30).is_empty());
}

#[test]
fn footway_segments_become_two_directed_edges() {
    let map = fixture_map();
    let graph = build_footway_graph(&map);

    let expected = distance_miles(map.nodes[&1], map.nodes[&2]);
    assert_eq!(graph.weight(1, 2), Some(expected));
    assert_eq!(graph.weight(2, 1), Some(expected));
    assert_eq!(
        graph.neighbours(2).into_iter().collect::<Vec<_>>(),
        vec![1, 3]
    );
}

#[test]
fn shared_footway_segments_are_counted_once() {
    let map = fixture_map();
    let graph = build_footway_graph(&map);

    // Seven distinct segments, one of them walked by two footways.
    assert_eq!(graph.num_edges(), 14);
}
