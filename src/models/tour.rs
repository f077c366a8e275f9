// Tour models for representing search results at both index and vertex level

use serde::{Deserialize, Serialize};

use crate::models::{Cost, Score};

/// Ordered sequence of reduction-matrix indices defining the visiting order.
/// Index 0 is the anchor (the start vertex); indices 1..=k identify points of
/// interest in list order. A tour always begins with the anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    pub stops: Vec<usize>,
}

impl Tour {
    /// The trivial tour visiting no points of interest
    pub fn trivial() -> Self {
        Self { stops: vec![0] }
    }

    /// Number of points of interest visited (the anchor does not count)
    pub fn poi_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }
}

/// Result of a tour search: the tour plus the metrics accumulated while
/// extending it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub tour: Tour,

    /// Total round-trip travel cost of the tour
    pub total_cost: Cost,

    /// Total score collected by the tour
    pub total_score: Score,
}

/// Full vertex-level trip plan from start to finish. An empty plan means no
/// trip within budget exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan<T> {
    /// Every vertex on the route, in travel order, start and finish included
    pub stops: Vec<T>,

    /// Total travel cost of the tour the route was reconstructed from
    pub total_cost: Cost,

    /// Total score collected along the route
    pub total_score: Score,
}

impl<T> TripPlan<T> {
    /// The "no trip possible" result
    pub fn empty() -> Self {
        Self {
            stops: Vec::new(),
            total_cost: 0.0,
            total_score: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
