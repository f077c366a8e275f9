// Shortest-path searches over the weighted graph: single-source Dijkstra
// and all-pairs Floyd-Warshall

use std::cmp::Reverse;

use priority_queue::PriorityQueue;

use crate::models::{Cost, VertexIdx};
use crate::utils::graph::WeightedGraph;

// Custom wrapper to make f64 costs usable as priorities
#[derive(PartialEq, Copy, Clone, Debug)]
pub(crate) struct MinCost(pub f64);

impl Eq for MinCost {}

impl PartialOrd for MinCost {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Ord for MinCost {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.partial_cmp(other).unwrap_or(std::cmp::Ordering::Equal)
    }
}

/// Distance and predecessor labels produced by one single-source search.
/// Owned by the caller; every invocation starts from fresh labels, so
/// searches never leak state into each other.
#[derive(Debug, Clone)]
pub struct SearchLabels {
    /// Best known distance from the source, by vertex index
    pub dist: Vec<Cost>,

    /// Predecessor on the best known path, by vertex index
    pub pred: Vec<Option<VertexIdx>>,
}

impl SearchLabels {
    fn new(vertex_count: usize) -> Self {
        Self {
            dist: vec![f64::INFINITY; vertex_count],
            pred: vec![None; vertex_count],
        }
    }

    pub fn is_reachable(&self, vertex: VertexIdx) -> bool {
        self.dist[vertex].is_finite()
    }

    /// Walks predecessor links back from `target` and returns the vertex
    /// chain in forward order. The search source itself is left out, so
    /// consecutive chains can be concatenated without duplicating stops.
    /// Unreachable targets yield an empty chain.
    pub fn chain_to(&self, target: VertexIdx) -> Vec<VertexIdx> {
        let mut chain = Vec::new();
        let mut current = Some(target);

        while let Some(vertex) = current {
            if self.pred[vertex].is_some() {
                chain.push(vertex);
            }
            current = self.pred[vertex];
        }

        chain.reverse();
        chain
    }
}

/// Single-source shortest paths with Dijkstra's algorithm.
///
/// Maintains a mutable min-priority queue over the frontier: vertices are
/// inserted on first discovery and have their key decreased when a shorter
/// path to them is found. Assumes non-negative edge weights.
pub fn dijkstra<T: PartialEq>(graph: &WeightedGraph<T>, source: VertexIdx) -> SearchLabels {
    let mut labels = SearchLabels::new(graph.vertex_count());
    let mut queue: PriorityQueue<VertexIdx, Reverse<MinCost>> = PriorityQueue::new();

    labels.dist[source] = 0.0;
    queue.push(source, Reverse(MinCost(0.0)));

    while let Some((vertex, _)) = queue.pop() {
        let dist = labels.dist[vertex];

        for edge in graph.vertex(vertex).adj() {
            let candidate = dist + edge.weight;

            if candidate < labels.dist[edge.dest] {
                let first_visit = labels.dist[edge.dest] == f64::INFINITY;

                labels.dist[edge.dest] = candidate;
                labels.pred[edge.dest] = Some(vertex);

                if first_visit {
                    queue.push(edge.dest, Reverse(MinCost(candidate)));
                } else {
                    // Decrease-key: push_increase only ever raises the
                    // priority, which under Reverse means a lower cost
                    queue.push_increase(edge.dest, Reverse(MinCost(candidate)));
                }
            }
        }
    }

    labels
}

/// All-pairs shortest-path result: distances plus predecessors for
/// reconstructing the path of any vertex pair
#[derive(Debug, Clone)]
pub struct DistanceTable {
    pub dist: Vec<Vec<Cost>>,
    pub pred: Vec<Vec<Option<VertexIdx>>>,
}

/// All-pairs shortest paths with the Floyd-Warshall algorithm.
///
/// The distance table starts at 0 on the diagonal and +infinity elsewhere,
/// seeded with direct edge weights; relaxations through an intermediate
/// vertex skip any leg still at the infinity sentinel. Assumes
/// non-negative edge weights.
pub fn floyd_warshall<T: PartialEq>(graph: &WeightedGraph<T>) -> DistanceTable {
    let n = graph.vertex_count();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    let mut pred: Vec<Vec<Option<VertexIdx>>> = vec![vec![None; n]; n];

    for i in 0..n {
        dist[i][i] = 0.0;
        pred[i][i] = Some(i);
    }

    for (i, vertex) in graph.vertices().iter().enumerate() {
        for edge in vertex.adj() {
            // Parallel edges: keep the lightest
            if edge.weight < dist[i][edge.dest] {
                dist[i][edge.dest] = edge.weight;
                pred[i][edge.dest] = Some(i);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            if dist[i][k] == f64::INFINITY {
                continue;
            }
            for j in 0..n {
                if dist[k][j] == f64::INFINITY {
                    continue;
                }

                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                    pred[i][j] = pred[k][j];
                }
            }
        }
    }

    DistanceTable { dist, pred }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond_graph() -> WeightedGraph<char> {
        // a -> b -> d and a -> c -> d, with the lower route cheaper
        let mut graph = WeightedGraph::new();
        for info in ['a', 'b', 'c', 'd', 'x'] {
            graph.add_vertex(info);
        }
        graph.add_edge(&'a', &'b', 1.0);
        graph.add_edge(&'b', &'d', 4.0);
        graph.add_edge(&'a', &'c', 2.0);
        graph.add_edge(&'c', &'d', 1.0);
        graph
    }

    #[test]
    fn test_dijkstra_distances() {
        let graph = diamond_graph();
        let labels = dijkstra(&graph, 0);

        assert_eq!(labels.dist[0], 0.0);
        assert_eq!(labels.dist[1], 1.0);
        assert_eq!(labels.dist[2], 2.0);
        assert_eq!(labels.dist[3], 3.0);
    }

    #[test]
    fn test_dijkstra_unreachable_vertex() {
        let graph = diamond_graph();
        let labels = dijkstra(&graph, 0);

        // 'x' has no incoming edges
        assert!(!labels.is_reachable(4));
        assert_eq!(labels.pred[4], None);
        assert!(labels.chain_to(4).is_empty());
    }

    #[test]
    fn test_dijkstra_prefers_cheaper_route() {
        let graph = diamond_graph();
        let labels = dijkstra(&graph, 0);

        // d is reached through c, not b
        assert_eq!(labels.pred[3], Some(2));
        assert_eq!(labels.chain_to(3), vec![2, 3]);
    }

    #[test]
    fn test_dijkstra_repeated_invocations_are_independent() {
        let graph = diamond_graph();

        let from_a = dijkstra(&graph, 0);
        let from_c = dijkstra(&graph, 2);

        assert_eq!(from_c.dist[3], 1.0);
        assert_eq!(from_c.dist[0], f64::INFINITY);
        // The first run keeps its own labels
        assert_eq!(from_a.dist[3], 3.0);
    }

    #[test]
    fn test_floyd_warshall_matches_dijkstra() {
        let graph = diamond_graph();
        let table = floyd_warshall(&graph);

        for source in 0..graph.vertex_count() {
            let labels = dijkstra(&graph, source);
            for target in 0..graph.vertex_count() {
                assert_eq!(
                    table.dist[source][target], labels.dist[target],
                    "disagreement for pair ({}, {})",
                    source, target
                );
            }
        }
    }

    #[test]
    fn test_floyd_warshall_sentinel_survives() {
        let graph = diamond_graph();
        let table = floyd_warshall(&graph);

        assert_eq!(table.dist[0][4], f64::INFINITY);
        assert_eq!(table.pred[0][4], None);
    }
}
