// Trip planning pipeline: feasibility pre-check, reduction, tour search
// and full route reconstruction

use crate::algorithms::SearchStrategy;
use crate::models::{Cost, PointOfInterest, Score, SearchOutcome, TripPlan, VertexIdx};
use crate::utils::graph::WeightedGraph;
use crate::utils::reduction::ReductionStrategy;
use crate::utils::shortest_path::dijkstra;

/// Plans a budget-constrained sightseeing trip.
///
/// Collapses the graph into a reduction matrix over start, finish and the
/// points of interest, searches it for the best-scoring tour within
/// budget, and expands the tour back into the full vertex-level route.
/// Returns the empty plan when start or finish is missing from the graph,
/// or when the finish cannot be reached from the start within budget
/// (checked with one shortest-path run before any reduction work).
///
/// `scores` carries one score per point of interest, in list order.
pub fn plan_trip<T: PartialEq + Clone>(
    graph: &WeightedGraph<T>,
    pois: &[PointOfInterest],
    scores: &[Score],
    start: &T,
    finish: &T,
    budget: Cost,
    reduction: ReductionStrategy,
    search: SearchStrategy,
) -> TripPlan<T> {
    let (start_idx, finish_idx) = match (graph.find_vertex(start), graph.find_vertex(finish)) {
        (Some(s), Some(f)) => (s, f),
        _ => return TripPlan::empty(),
    };

    // Fast feasibility pre-check: a trip only exists if the direct
    // start-to-finish path already fits the budget
    let labels = dijkstra(graph, start_idx);
    if labels.dist[finish_idx] > budget {
        return TripPlan::empty();
    }

    let matrix = reduction.build_matrix(graph, pois, start_idx, finish_idx);
    let outcome = search.run(&matrix, scores, budget);

    reconstruct_route(graph, pois, start_idx, finish_idx, &outcome)
}

/// Expands an index-level tour into the full vertex-level route by
/// re-running the single-source search from each stop and walking the
/// predecessor labels back from the next one. Fragment sources are left
/// out of each chain, so shared endpoints appear exactly once. A tour of
/// length 1 yields the direct start-to-finish path.
///
/// Panics if the tour does not begin with the anchor index 0.
pub fn reconstruct_route<T: PartialEq + Clone>(
    graph: &WeightedGraph<T>,
    pois: &[PointOfInterest],
    start: VertexIdx,
    finish: VertexIdx,
    outcome: &SearchOutcome,
) -> TripPlan<T> {
    let tour = &outcome.tour;
    assert!(
        tour.stops.first() == Some(&0),
        "tour must begin with the anchor index 0"
    );

    let mut stops = vec![graph.vertex(start).info().clone()];
    let mut labels = dijkstra(graph, start);

    for &idx in tour.stops.iter().skip(1) {
        let poi = &pois[idx - 1];

        for vertex in labels.chain_to(poi.vertex) {
            stops.push(graph.vertex(vertex).info().clone());
        }

        labels = dijkstra(graph, poi.vertex);
    }

    // Final hop from the last stop to the finish vertex
    for vertex in labels.chain_to(finish) {
        stops.push(graph.vertex(vertex).info().clone());
    }

    TripPlan {
        stops,
        total_cost: outcome.total_cost,
        total_score: outcome.total_score,
    }
}
