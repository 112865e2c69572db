//! Offline distance services.

use super::DistanceService;
use crate::models::Point;

/// Mean Earth radius used by [`GreatCircle`].
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// Great-circle (haversine) distance in meters.
///
/// Ignores the road network, so it underestimates driving distance, but it
/// needs no external service.
///
/// # Examples
///
/// ```
/// use cvrp_swarm::distance::{DistanceService, GreatCircle};
/// use cvrp_swarm::models::Point;
///
/// let d = GreatCircle.distance(&Point::new(0.0, 0.0), &Point::new(0.0, 1.0));
/// assert!((d - 111_195.0).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreatCircle;

impl DistanceService for GreatCircle {
    fn distance(&self, origin: &Point, destination: &Point) -> f64 {
        let (lat1, lat2) = (origin.lat.to_radians(), destination.lat.to_radians());
        let dlat = lat2 - lat1;
        let dlng = (destination.lng - origin.lng).to_radians();

        let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_METERS * h.sqrt().min(1.0).asin()
    }
}

/// Straight-line distance treating `(lat, lng)` as planar coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl DistanceService for Euclidean {
    fn distance(&self, origin: &Point, destination: &Point) -> f64 {
        let dx = origin.lat - destination.lat;
        let dy = origin.lng - destination.lng;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean() {
        let d = Euclidean.distance(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_great_circle_zero() {
        let p = Point::new(-23.55, -46.63);
        assert_eq!(GreatCircle.distance(&p, &p), 0.0);
    }

    #[test]
    fn test_great_circle_symmetric() {
        let a = Point::new(-23.55, -46.63);
        let b = Point::new(-22.90, -43.17);
        let ab = GreatCircle.distance(&a, &b);
        let ba = GreatCircle.distance(&b, &a);
        assert!((ab - ba).abs() < 1e-6);
        // Sao Paulo to Rio de Janeiro, roughly 360 km.
        assert!(ab > 340_000.0 && ab < 380_000.0, "got {ab}");
    }

    #[test]
    fn test_closure_service() {
        let constant = |_: &Point, _: &Point| 7.0;
        assert_eq!(constant.distance(&Point::new(0.0, 0.0), &Point::new(1.0, 1.0)), 7.0);
    }
}
