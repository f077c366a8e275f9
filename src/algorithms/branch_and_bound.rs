// Exhaustive tour search: breadth-first exploration of partial tours
// under the budget constraint

use std::collections::VecDeque;

use crate::algorithms::{validate_inputs, TourSearch};
use crate::models::{Cost, Score, SearchOutcome, Tour};
use crate::utils::reduction::ReductionMatrix;

/// Breadth-first search over the tree of partial tours. Children are kept
/// only while the round-trip cost fits the budget; the best-scoring state
/// dequeued so far is the incumbent. The search stops as soon as a fully
/// extended tour (one with no unused points of interest left) is dequeued
/// and returns the incumbent at that moment, so it does not drain the
/// remaining queue.
pub struct BranchAndBound;

// Node of the search tree: a partial tour plus its accumulated metrics
#[derive(Debug, Clone)]
struct TourCandidate {
    stops: Vec<usize>,
    unused: Vec<usize>,
    cost: Cost,
    score: Score,
}

impl TourCandidate {
    fn root(size: usize) -> Self {
        Self {
            stops: vec![0],
            unused: (1..size).collect(),
            cost: 0.0,
            score: 0.0,
        }
    }

    fn is_complete(&self) -> bool {
        self.unused.is_empty()
    }

    // Extends the tour by each unused index whose round-trip cost stays
    // within budget. The cost update swaps the old tail's return leg for
    // the detour through the candidate, keeping the extension O(1).
    fn feasible_children(
        &self,
        matrix: &ReductionMatrix,
        scores: &[Score],
        budget: Cost,
    ) -> Vec<TourCandidate> {
        let mut children = Vec::new();
        let last = *self.stops.last().unwrap();

        for (pos, &idx) in self.unused.iter().enumerate() {
            let new_cost = self.cost - matrix[last][0] + matrix[last][idx] + matrix[idx][0];

            if new_cost <= budget {
                let mut stops = self.stops.clone();
                let mut unused = self.unused.clone();
                stops.push(idx);
                unused.remove(pos);

                children.push(TourCandidate {
                    stops,
                    unused,
                    cost: new_cost,
                    score: self.score + scores[idx - 1],
                });
            }
        }

        children
    }
}

impl TourSearch for BranchAndBound {
    fn search(&self, matrix: &ReductionMatrix, scores: &[Score], budget: Cost) -> SearchOutcome {
        validate_inputs(matrix, scores);

        let mut best = TourCandidate::root(matrix.len());

        let mut queue = VecDeque::new();
        queue.push_back(best.clone());

        while let Some(candidate) = queue.pop_front() {
            if candidate.score > best.score {
                best = candidate.clone();
            }

            // The first fully extended tour ends the search
            if candidate.is_complete() {
                break;
            }

            for child in candidate.feasible_children(matrix, scores, budget) {
                queue.push_back(child);
            }
        }

        SearchOutcome {
            tour: Tour { stops: best.stops },
            total_cost: best.cost,
            total_score: best.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Two points of interest on a line: both fit a generous budget, only
    // the near one fits a tight budget
    fn two_poi_matrix() -> ReductionMatrix {
        vec![
            vec![0.0, 2.0, 5.0],
            vec![3.0, 0.0, 3.0],
            vec![1.0, 3.0, 0.0],
        ]
    }

    #[test]
    fn test_empty_poi_set_returns_trivial_tour() {
        let matrix = vec![vec![0.0]];
        let outcome = BranchAndBound.search(&matrix, &[], 10.0);

        assert_eq!(outcome.tour, Tour::trivial());
        assert_eq!(outcome.total_cost, 0.0);
        assert_eq!(outcome.total_score, 0.0);
    }

    #[test]
    fn test_tight_budget_prunes_expensive_poi() {
        let matrix = two_poi_matrix();

        // Visiting 1 costs 2 + 3 = 5; visiting 2 costs 5 + 1 = 6
        let outcome = BranchAndBound.search(&matrix, &[1.0, 4.0], 5.0);

        assert_eq!(outcome.tour.stops, vec![0, 1]);
        assert_eq!(outcome.total_cost, 5.0);
        assert_eq!(outcome.total_score, 1.0);
    }

    #[test]
    fn test_generous_budget_collects_both() {
        let matrix = two_poi_matrix();

        // 0 -> 1 -> 2 costs 2 + 3 + 1 = 6
        let outcome = BranchAndBound.search(&matrix, &[1.0, 4.0], 6.0);

        assert_eq!(outcome.tour.stops, vec![0, 1, 2]);
        assert_eq!(outcome.total_cost, 6.0);
        assert_eq!(outcome.total_score, 5.0);
    }

    #[test]
    fn test_zero_budget_stays_home() {
        let matrix = two_poi_matrix();
        let outcome = BranchAndBound.search(&matrix, &[1.0, 4.0], 0.0);

        assert_eq!(outcome.tour, Tour::trivial());
        assert_eq!(outcome.total_score, 0.0);
    }

    #[test]
    fn test_unreachable_poi_is_never_selected() {
        let matrix = vec![
            vec![0.0, f64::INFINITY],
            vec![f64::INFINITY, 0.0],
        ];
        let outcome = BranchAndBound.search(&matrix, &[9.0], 100.0);

        assert_eq!(outcome.tour, Tour::trivial());
    }

    #[test]
    fn test_score_weakly_monotonic_in_budget() {
        let matrix = two_poi_matrix();
        let scores = [1.0, 4.0];

        let mut previous = 0.0;
        for budget in [0.0, 4.0, 5.0, 6.0, 7.0, 20.0] {
            let outcome = BranchAndBound.search(&matrix, &scores, budget);
            assert!(
                outcome.total_score >= previous,
                "score dropped from {} to {} at budget {}",
                previous,
                outcome.total_score,
                budget
            );
            previous = outcome.total_score;
        }
    }
}
