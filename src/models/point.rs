//! Geographic point.

/// A geographic location in degrees.
///
/// # Examples
///
/// ```
/// use cvrp_swarm::models::Point;
///
/// let p = Point::new(-23.55, -46.63);
/// assert_eq!(p.lat, -23.55);
/// assert_eq!(p.lng, -46.63);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl Point {
    /// Creates a point from latitude and longitude.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let p = Point::new(1.5, -2.5);
        assert_eq!(p.lat, 1.5);
        assert_eq!(p.lng, -2.5);
        assert_eq!(p, Point { lat: 1.5, lng: -2.5 });
    }
}
