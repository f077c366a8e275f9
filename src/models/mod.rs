// Models module - exports all model types

mod location;
mod poi;
mod tour;

// Re-export model types
pub use self::location::Location;
pub use self::poi::{PoiCategory, PointOfInterest, Preferences};
pub use self::tour::{SearchOutcome, Tour, TripPlan};

// Common type aliases for improved code readability
pub type VertexIdx = usize;
pub type Cost = f64;
pub type Score = f64;
