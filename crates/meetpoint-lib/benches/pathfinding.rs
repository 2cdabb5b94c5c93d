use criterion::{criterion_group, criterion_main, Criterion};
use meetpoint_lib::{
    build_footway_graph, dijkstra, load_campus_map, CampusMap, Graph, MeetingPlanner,
    MeetingRequest, NodeId,
};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

/// Side length of the synthetic grid campus.
const GRID_SIZE: i64 = 60;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/campus_map.json")
}

static CAMPUS: Lazy<CampusMap> =
    Lazy::new(|| load_campus_map(&fixture_path()).expect("fixture loads"));
static PLANNER: Lazy<MeetingPlanner> =
    Lazy::new(|| MeetingPlanner::new(CAMPUS.clone()).expect("fixture has footways"));
static GRID: Lazy<Graph<NodeId, f64>> = Lazy::new(grid_graph);

fn grid_graph() -> Graph<NodeId, f64> {
    let mut graph = Graph::new();
    for id in 0..GRID_SIZE * GRID_SIZE {
        graph.add_vertex(id);
    }
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let id = row * GRID_SIZE + col;
            if col + 1 < GRID_SIZE {
                let weight = 1.0 + ((id % 7) as f64) / 10.0;
                graph.add_edge(id, id + 1, weight);
                graph.add_edge(id + 1, id, weight);
            }
            if row + 1 < GRID_SIZE {
                let weight = 1.0 + ((id % 5) as f64) / 10.0;
                graph.add_edge(id, id + GRID_SIZE, weight);
                graph.add_edge(id + GRID_SIZE, id, weight);
            }
        }
    }
    graph
}

fn benchmark_pathfinding(c: &mut Criterion) {
    c.bench_function("build_footway_graph_fixture", |b| {
        let map = &*CAMPUS;
        b.iter(|| {
            let graph = build_footway_graph(map);
            black_box(graph.num_edges())
        });
    });

    c.bench_function("dijkstra_grid_corner", |b| {
        let graph = &*GRID;
        b.iter(|| {
            let paths = dijkstra(graph, 0).expect("source exists");
            black_box(paths.distance(GRID_SIZE * GRID_SIZE - 1))
        });
    });

    c.bench_function("meeting_seo_sce", |b| {
        let planner = &*PLANNER;
        let request = MeetingRequest::new("SEO", "SCE");
        b.iter(|| {
            let plan = planner.plan(&request).expect("plan");
            black_box(plan.second_leg.miles())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
