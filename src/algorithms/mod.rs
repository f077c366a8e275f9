pub mod branch_and_bound;
pub mod nearest_neighbour;
pub mod planner;

use crate::models::{Cost, Score, SearchOutcome};
use crate::utils::reduction::ReductionMatrix;

pub use self::branch_and_bound::BranchAndBound;
pub use self::nearest_neighbour::NearestNeighbour;

/// Trait for budget-constrained tour search strategies
pub trait TourSearch {
    /// Picks an ordered subset of points of interest and a visiting order
    /// maximizing the collected score while the round-trip cost stays
    /// within budget. The returned tour always begins with the anchor
    /// index 0.
    fn search(&self, matrix: &ReductionMatrix, scores: &[Score], budget: Cost) -> SearchOutcome;
}

/// Tour search algorithm selected by the planner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Exhaustive breadth-first search over partial tours
    BranchAndBound,

    /// Greedy score-per-distance heuristic, much faster but not optimal
    NearestNeighbour,
}

impl SearchStrategy {
    pub fn run(&self, matrix: &ReductionMatrix, scores: &[Score], budget: Cost) -> SearchOutcome {
        match self {
            SearchStrategy::BranchAndBound => BranchAndBound.search(matrix, scores, budget),
            SearchStrategy::NearestNeighbour => NearestNeighbour.search(matrix, scores, budget),
        }
    }
}

// Shared precondition check: a mis-sized score vector or a non-square
// matrix is a caller bug, not a runtime condition
pub(crate) fn validate_inputs(matrix: &ReductionMatrix, scores: &[Score]) {
    let size = matrix.len();

    assert!(
        scores.len() + 1 == size,
        "score vector length {} does not match matrix dimension {}",
        scores.len(),
        size
    );

    for (i, row) in matrix.iter().enumerate() {
        assert!(
            row.len() == size,
            "reduction matrix is not square: row {} has {} entries, expected {}",
            i,
            row.len(),
            size
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "score vector length")]
    fn test_score_length_mismatch_panics() {
        let matrix = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        validate_inputs(&matrix, &[1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "not square")]
    fn test_non_square_matrix_panics() {
        let matrix = vec![vec![0.0, 1.0], vec![1.0]];
        validate_inputs(&matrix, &[1.0]);
    }

    #[test]
    fn test_valid_inputs_pass() {
        let matrix = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        validate_inputs(&matrix, &[1.0]);
    }
}
