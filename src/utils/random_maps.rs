// Random instance generation for benchmarks and comparison tests

use rand::rngs::StdRng;
use rand::Rng;

use crate::models::{Cost, Location, PointOfInterest, PoiCategory, Score, VertexIdx};
use crate::utils::graph::WeightedGraph;
use crate::utils::reduction::ReductionMatrix;

/// Bounding box the random points are drawn from
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn square(side: f64) -> Self {
        Self {
            min_x: 0.0,
            max_x: side,
            min_y: 0.0,
            max_y: side,
        }
    }

    fn sample(&self, rng: &mut StdRng) -> Location {
        Location::new(
            rng.gen_range(self.min_x..self.max_x),
            rng.gen_range(self.min_y..self.max_y),
        )
    }
}

/// Builds a random reduction matrix of the given dimension from uniformly
/// distributed points: index 0 plays the start/finish anchor role, the
/// remaining indices are points of interest. The finish point is redrawn
/// until its direct distance from the start fits the budget, so the
/// instance always admits at least the empty tour.
pub fn random_matrix(
    rng: &mut StdRng,
    bounds: Bounds,
    size: usize,
    budget: Cost,
) -> ReductionMatrix {
    let start = bounds.sample(rng);

    let mut finish = bounds.sample(rng);
    while start.distance_to(&finish) > budget {
        finish = bounds.sample(rng);
    }

    let points: Vec<Location> = (1..size).map(|_| bounds.sample(rng)).collect();

    let mut matrix = vec![vec![0.0; size]; size];
    for from in 0..size {
        for to in 0..size {
            if from == to {
                continue;
            }
            matrix[from][to] = if from == 0 {
                start.distance_to(&points[to - 1])
            } else if to == 0 {
                points[from - 1].distance_to(&finish)
            } else {
                points[from - 1].distance_to(&points[to - 1])
            };
        }
    }

    matrix
}

/// Random scores in [0, 1) for a matrix of the given dimension
pub fn random_scores(rng: &mut StdRng, size: usize) -> Vec<Score> {
    (1..size).map(|_| rng.gen::<Score>()).collect()
}

/// Generates a random directed graph with `num_vertices` vertices (keys
/// 0..n), around five edge attempts per vertex with weights in [0, 5),
/// and marks each vertex a point of interest with 10% probability.
pub fn random_graph(
    rng: &mut StdRng,
    num_vertices: u32,
) -> (WeightedGraph<u32>, Vec<VertexIdx>) {
    const POI_CHANCE: f64 = 0.1;

    let mut graph = WeightedGraph::new();
    for id in 0..num_vertices {
        graph.add_vertex(id);
    }

    let mut poi_vertices = Vec::new();
    for vertex in 0..num_vertices as usize {
        if rng.gen::<f64>() <= POI_CHANCE {
            poi_vertices.push(vertex);
        }
    }

    for _ in 0..num_vertices * 5 {
        let v1 = rng.gen_range(0..num_vertices);
        let v2 = rng.gen_range(0..num_vertices);

        if v1 != v2 {
            let exists = graph
                .vertex(v1 as usize)
                .adj()
                .iter()
                .any(|edge| edge.dest == v2 as usize);

            if !exists {
                let weight = rng.gen::<f64>() * 5.0;
                graph.add_edge(&v1, &v2, weight);
            }
        }
    }

    (graph, poi_vertices)
}

/// Wraps the vertex indices picked by `random_graph` into uniformly
/// scored points of interest
pub fn pois_from_vertices(vertices: &[VertexIdx]) -> Vec<PointOfInterest> {
    vertices
        .iter()
        .map(|&vertex| PointOfInterest::with_score(vertex, PoiCategory::Attraction, 1.0))
        .collect()
}
