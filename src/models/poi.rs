// Point of interest model with category-based scoring

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Score, VertexIdx};

/// Categories a point of interest can be tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoiCategory {
    Information,
    Hotel,
    Attraction,
    Viewpoint,
    GuestHouse,
    PicnicSite,
    Artwork,
    CampSite,
    Museum,
}

impl PoiCategory {
    /// Parses a map tag such as `tourism=museum` into a category
    pub fn from_tag(tag: &str) -> Option<Self> {
        let name = tag.strip_prefix("tourism=").unwrap_or(tag);

        match name {
            "information" => Some(PoiCategory::Information),
            "hotel" => Some(PoiCategory::Hotel),
            "attraction" => Some(PoiCategory::Attraction),
            "viewpoint" => Some(PoiCategory::Viewpoint),
            "guest_house" => Some(PoiCategory::GuestHouse),
            "picnic_site" => Some(PoiCategory::PicnicSite),
            "artwork" => Some(PoiCategory::Artwork),
            "camp_site" => Some(PoiCategory::CampSite),
            "museum" => Some(PoiCategory::Museum),
            _ => None,
        }
    }
}

/// Per-category preference weights supplied by the user
#[derive(Debug, Clone, Default)]
pub struct Preferences {
    weights: HashMap<PoiCategory, Score>,
}

impl Preferences {
    /// Creates an empty preference table; unlisted categories weigh 1.0
    pub fn new() -> Self {
        Self {
            weights: HashMap::new(),
        }
    }

    /// Sets the weight of a single category
    pub fn set(&mut self, category: PoiCategory, weight: Score) {
        self.weights.insert(category, weight);
    }

    /// Score of a category under these preferences
    pub fn score(&self, category: PoiCategory) -> Score {
        *self.weights.get(&category).unwrap_or(&1.0)
    }
}

/// A scored, visitable vertex of the road network
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    /// Index of the vertex this point of interest sits on
    pub vertex: VertexIdx,

    /// Category the point of interest is tagged with
    pub category: PoiCategory,

    /// Relative score; only meaningful compared to other points of interest
    pub score: Score,
}

impl PointOfInterest {
    /// Creates a point of interest, scoring it from the given preferences
    pub fn new(vertex: VertexIdx, category: PoiCategory, preferences: &Preferences) -> Self {
        Self {
            vertex,
            category,
            score: preferences.score(category),
        }
    }

    /// Creates a point of interest with an explicit score
    pub fn with_score(vertex: VertexIdx, category: PoiCategory, score: Score) -> Self {
        Self {
            vertex,
            category,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_tag() {
        assert_eq!(
            PoiCategory::from_tag("tourism=museum"),
            Some(PoiCategory::Museum)
        );
        assert_eq!(PoiCategory::from_tag("viewpoint"), Some(PoiCategory::Viewpoint));
        assert_eq!(PoiCategory::from_tag("tourism=zoo"), None);
    }

    #[test]
    fn test_preferences_default_weight() {
        let preferences = Preferences::new();
        assert_eq!(preferences.score(PoiCategory::Hotel), 1.0);
    }

    #[test]
    fn test_preferences_override() {
        let mut preferences = Preferences::new();
        preferences.set(PoiCategory::Museum, 4.0);

        assert_eq!(preferences.score(PoiCategory::Museum), 4.0);
        assert_eq!(preferences.score(PoiCategory::Artwork), 1.0);
    }

    #[test]
    fn test_poi_scored_from_preferences() {
        let mut preferences = Preferences::new();
        preferences.set(PoiCategory::Viewpoint, 2.5);

        let poi = PointOfInterest::new(7, PoiCategory::Viewpoint, &preferences);
        assert_eq!(poi.vertex, 7);
        assert_eq!(poi.score, 2.5);
    }
}
