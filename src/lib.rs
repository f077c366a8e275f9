// Public modules
pub mod algorithms;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::planner::{plan_trip, reconstruct_route};
pub use algorithms::{BranchAndBound, NearestNeighbour, SearchStrategy, TourSearch};
pub use models::{
    Location, PoiCategory, PointOfInterest, Preferences, SearchOutcome, Tour, TripPlan,
};
pub use utils::graph::WeightedGraph;
pub use utils::reduction::{ReductionMatrix, ReductionStrategy};
