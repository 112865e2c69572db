//! Core trait for distance queries.

use crate::models::Point;

/// Answers "how far is it from `origin` to `destination`?" in meters.
///
/// Contract assumed by the objective:
///
/// - the result is non-negative;
/// - the call never panics or fails; a failed query logs a diagnostic and
///   returns `0.0`;
/// - `0.0` between two distinct points means "unknown", not free travel.
///
/// Every evaluation issues one query per directed leg; nothing is cached.
///
/// Closures implement this trait, which makes deterministic test doubles
/// trivial:
///
/// ```
/// use cvrp_swarm::distance::DistanceService;
/// use cvrp_swarm::models::Point;
///
/// let manhattan = |a: &Point, b: &Point| (a.lat - b.lat).abs() + (a.lng - b.lng).abs();
/// assert_eq!(manhattan.distance(&Point::new(0.0, 0.0), &Point::new(1.0, 2.0)), 3.0);
/// ```
pub trait DistanceService {
    /// Travel distance from `origin` to `destination`.
    fn distance(&self, origin: &Point, destination: &Point) -> f64;
}

impl<F> DistanceService for F
where
    F: Fn(&Point, &Point) -> f64,
{
    fn distance(&self, origin: &Point, destination: &Point) -> f64 {
        self(origin, destination)
    }
}
