// Distance calculation utilities

use crate::models::Location;

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate the Euclidean distance between two points
pub fn euclidean_distance(p1: &Location, p2: &Location) -> f64 {
    ((p1.x - p2.x).powi(2) + (p1.y - p2.y).powi(2)).sqrt()
}

/// Calculate the great-circle distance between two points with the
/// haversine formula, interpreting x as latitude and y as longitude, in
/// degrees. Result is in meters.
pub fn haversine_distance(p1: &Location, p2: &Location) -> f64 {
    let from_lat = p1.x.to_radians();
    let from_lon = p1.y.to_radians();
    let to_lat = p2.x.to_radians();
    let to_lon = p2.y.to_radians();

    let lat_diff = to_lat - from_lat;
    let lon_diff = to_lon - from_lon;

    2.0 * EARTH_RADIUS_M
        * ((lat_diff / 2.0).sin().powi(2)
            + from_lat.cos() * to_lat.cos() * (lon_diff / 2.0).sin().powi(2))
        .sqrt()
        .asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_distance() {
        let p1 = Location::new(0.0, 0.0);
        let p2 = Location::new(3.0, 4.0);

        assert_eq!(euclidean_distance(&p1, &p2), 5.0);
    }

    #[test]
    fn test_haversine_zero_distance() {
        let p = Location::new(41.15, -8.61);
        assert_eq!(haversine_distance(&p, &p), 0.0);
    }

    #[test]
    fn test_haversine_one_degree_of_latitude() {
        // One degree of latitude is roughly 111 km anywhere on the globe
        let p1 = Location::new(41.0, -8.61);
        let p2 = Location::new(42.0, -8.61);

        let distance = haversine_distance(&p1, &p2);
        assert!((distance - 111_195.0).abs() < 100.0, "got {}", distance);
    }
}
