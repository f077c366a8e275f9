// Reduction step: collapses the road network into a compact distance
// matrix over the start vertex and the points of interest

use crate::models::{Cost, PointOfInterest, VertexIdx};
use crate::utils::graph::WeightedGraph;
use crate::utils::shortest_path::{dijkstra, floyd_warshall};

/// Compact (k+1) x (k+1) distance matrix consumed by the tour search.
///
/// Row and column 0 play a double role: `matrix[0][j]` is the distance
/// from the start vertex to point of interest j, while `matrix[i][0]` is
/// the distance from point of interest i to the finish vertex. This lets
/// the search swap the return leg of a tour in constant time when it
/// extends the tour by one stop. Rows 1..=k follow the order of the point
/// of interest list. Unreachable pairs hold +infinity.
pub type ReductionMatrix = Vec<Vec<Cost>>;

/// Algorithm used to build the reduction matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReductionStrategy {
    /// One single-source search from the start vertex and one per point of
    /// interest; cheap for few points of interest on large graphs
    Dijkstra,

    /// One all-pairs computation, then a filter down to the relevant rows
    /// and columns; pays off when k is large relative to the graph
    FloydWarshall,
}

impl ReductionStrategy {
    /// Builds the reduction matrix for the given start/finish pair and
    /// points of interest. Both strategies produce the same matrix up to
    /// floating-point rounding.
    pub fn build_matrix<T: PartialEq>(
        &self,
        graph: &WeightedGraph<T>,
        pois: &[PointOfInterest],
        start: VertexIdx,
        finish: VertexIdx,
    ) -> ReductionMatrix {
        match self {
            ReductionStrategy::Dijkstra => build_with_dijkstra(graph, pois, start, finish),
            ReductionStrategy::FloydWarshall => {
                build_with_floyd_warshall(graph, pois, start, finish)
            }
        }
    }
}

fn build_with_dijkstra<T: PartialEq>(
    graph: &WeightedGraph<T>,
    pois: &[PointOfInterest],
    start: VertexIdx,
    finish: VertexIdx,
) -> ReductionMatrix {
    let mut matrix = Vec::with_capacity(pois.len() + 1);

    // Row 0: distances from the start vertex
    let labels = dijkstra(graph, start);
    let mut row = Vec::with_capacity(pois.len() + 1);
    row.push(labels.dist[start]);
    for poi in pois {
        row.push(labels.dist[poi.vertex]);
    }
    matrix.push(row);

    // One search per point of interest; column 0 holds the leg back to
    // the finish vertex
    for poi in pois {
        let labels = dijkstra(graph, poi.vertex);

        let mut row = Vec::with_capacity(pois.len() + 1);
        row.push(labels.dist[finish]);
        for other in pois {
            row.push(labels.dist[other.vertex]);
        }
        matrix.push(row);
    }

    matrix
}

fn build_with_floyd_warshall<T: PartialEq>(
    graph: &WeightedGraph<T>,
    pois: &[PointOfInterest],
    start: VertexIdx,
    finish: VertexIdx,
) -> ReductionMatrix {
    let table = floyd_warshall(graph);
    let mut matrix = Vec::with_capacity(pois.len() + 1);

    let mut row = Vec::with_capacity(pois.len() + 1);
    row.push(0.0);
    for poi in pois {
        row.push(table.dist[start][poi.vertex]);
    }
    matrix.push(row);

    for poi in pois {
        let mut row = Vec::with_capacity(pois.len() + 1);
        row.push(table.dist[poi.vertex][finish]);
        for other in pois {
            row.push(table.dist[poi.vertex][other.vertex]);
        }
        matrix.push(row);
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PoiCategory;

    fn line_graph() -> WeightedGraph<u32> {
        // 0 -> 1 -> 2 -> 3, plus a shortcut 0 -> 2
        let mut graph = WeightedGraph::new();
        for id in 0..4u32 {
            graph.add_vertex(id);
        }
        graph.add_edge(&0, &1, 1.0);
        graph.add_edge(&1, &2, 1.0);
        graph.add_edge(&2, &3, 1.0);
        graph.add_edge(&0, &2, 1.5);
        graph
    }

    fn line_pois() -> Vec<PointOfInterest> {
        vec![
            PointOfInterest::with_score(1, PoiCategory::Attraction, 1.0),
            PointOfInterest::with_score(2, PoiCategory::Museum, 2.0),
        ]
    }

    #[test]
    fn test_matrix_layout() {
        let graph = line_graph();
        let pois = line_pois();

        let matrix = ReductionStrategy::Dijkstra.build_matrix(&graph, &pois, 0, 3);

        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix[0], vec![0.0, 1.0, 1.5]);
        // Row 1: vertex 1 -> finish 3, then to each point of interest
        assert_eq!(matrix[1], vec![2.0, 0.0, 1.0]);
        // Row 2: vertex 2 -> finish 3
        assert_eq!(matrix[2][0], 1.0);
    }

    #[test]
    fn test_strategies_agree() {
        let graph = line_graph();
        let pois = line_pois();

        let with_dijkstra = ReductionStrategy::Dijkstra.build_matrix(&graph, &pois, 0, 3);
        let with_floyd = ReductionStrategy::FloydWarshall.build_matrix(&graph, &pois, 0, 3);

        assert_eq!(with_dijkstra.len(), with_floyd.len());
        for (row_d, row_f) in with_dijkstra.iter().zip(&with_floyd) {
            for (a, b) in row_d.iter().zip(row_f) {
                assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
            }
        }
    }

    #[test]
    fn test_unreachable_pair_keeps_sentinel() {
        // The line graph has no edges back, so POIs cannot reach each
        // other in reverse
        let graph = line_graph();
        let pois = line_pois();

        let matrix = ReductionStrategy::Dijkstra.build_matrix(&graph, &pois, 0, 3);

        // vertex 2 -> vertex 1 has no path
        assert_eq!(matrix[2][1], f64::INFINITY);
    }
}
