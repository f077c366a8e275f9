// Greedy tour search: repeatedly visit the point of interest with the
// best score-per-distance ratio that still fits the budget

use crate::algorithms::{validate_inputs, TourSearch};
use crate::models::{Cost, Score, SearchOutcome, Tour};
use crate::utils::reduction::ReductionMatrix;

/// Single-pass nearest-neighbour heuristic. At every step the candidate
/// maximizing `score / forward distance` among the budget-feasible ones
/// is committed; the pass stops when no candidate with a positive ratio
/// fits. Runs in O(k^2) where the exhaustive search is exponential, at
/// the price of optimality. The selection ratio deliberately uses the
/// forward leg alone, while feasibility checks the full round-trip delta.
pub struct NearestNeighbour;

impl TourSearch for NearestNeighbour {
    fn search(&self, matrix: &ReductionMatrix, scores: &[Score], budget: Cost) -> SearchOutcome {
        validate_inputs(matrix, scores);

        let mut stops = vec![0];
        let mut unused: Vec<usize> = (1..matrix.len()).collect();
        let mut cost = 0.0;
        let mut score = 0.0;

        while !unused.is_empty() {
            let last = *stops.last().unwrap();

            let mut best_ratio = 0.0;
            let mut best_pos = None;

            for (pos, &idx) in unused.iter().enumerate() {
                let new_cost = cost - matrix[last][0] + matrix[last][idx] + matrix[idx][0];
                let ratio = scores[idx - 1] / matrix[last][idx];

                if new_cost <= budget && ratio > best_ratio {
                    best_ratio = ratio;
                    best_pos = Some(pos);
                }
            }

            match best_pos {
                Some(pos) => {
                    let idx = unused.remove(pos);
                    cost = cost - matrix[last][0] + matrix[last][idx] + matrix[idx][0];
                    score += scores[idx - 1];
                    stops.push(idx);
                }
                // No remaining candidate has a positive ratio within budget
                None => break,
            }
        }

        SearchOutcome {
            tour: Tour { stops },
            total_cost: cost,
            total_score: score,
        }
    }
}
