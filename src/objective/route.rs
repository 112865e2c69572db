//! Route distance via an external distance service.

use tracing::warn;

use crate::distance::DistanceService;
use crate::models::{CvrpSolution, CvrpSolutionVehicle, Point};

/// Distance driven by one vehicle: depot, every delivery in order, depot.
///
/// A vehicle with no deliveries travels `0.0`. Issues one query per leg.
pub fn vehicle_distance_traveled<D: DistanceService + ?Sized>(
    vehicle: &CvrpSolutionVehicle,
    service: &D,
) -> f64 {
    legs(vehicle).map(|(a, b)| service.distance(a, b)).sum()
}

/// Sum of [`vehicle_distance_traveled`] over all vehicles.
///
/// # Examples
///
/// ```
/// use cvrp_swarm::distance::Euclidean;
/// use cvrp_swarm::models::{CvrpSolution, CvrpSolutionVehicle, Delivery, Point};
/// use cvrp_swarm::objective::total_distance;
///
/// let depot = Point::new(0.0, 0.0);
/// let route = vec![
///     Delivery::new("a", Point::new(3.0, 0.0), 1),
///     Delivery::new("b", Point::new(3.0, 4.0), 1),
/// ];
/// let sol = CvrpSolution::new("s", vec![CvrpSolutionVehicle::new(depot, route)]);
/// assert!((total_distance(&sol, &Euclidean) - 12.0).abs() < 1e-12);
/// ```
pub fn total_distance<D: DistanceService + ?Sized>(solution: &CvrpSolution, service: &D) -> f64 {
    solution
        .vehicles
        .iter()
        .map(|v| vehicle_distance_traveled(v, service))
        .sum()
}

/// Route distance together with how many legs came back unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceReport {
    /// Sum of all leg distances (unknown legs contribute `0.0`).
    pub total: f64,
    /// Number of legs queried.
    pub legs: usize,
    /// Legs between distinct points for which the service returned `0.0`.
    pub failed_legs: usize,
}

impl DistanceReport {
    /// Returns `true` if every leg had a usable distance.
    pub fn is_complete(&self) -> bool {
        self.failed_legs == 0
    }
}

/// Like [`total_distance`], but also counts legs whose distance is unknown.
///
/// Logs a warning when any leg came back as `0.0`, since the total then
/// underestimates the real route length.
pub fn route_report<D: DistanceService + ?Sized>(
    solution: &CvrpSolution,
    service: &D,
) -> DistanceReport {
    let report = measure(solution, service);
    if !report.is_complete() {
        warn!(
            solution = %solution.name,
            failed_legs = report.failed_legs,
            legs = report.legs,
            "distance service returned 0.0 for distinct points; total is a lower bound"
        );
    }
    report
}

/// Sums every leg and counts the unknown ones, without logging.
pub(crate) fn measure<D: DistanceService + ?Sized>(
    solution: &CvrpSolution,
    service: &D,
) -> DistanceReport {
    let mut report = DistanceReport {
        total: 0.0,
        legs: 0,
        failed_legs: 0,
    };
    for (a, b) in solution.vehicles.iter().flat_map(legs) {
        let d = service.distance(a, b);
        report.total += d;
        report.legs += 1;
        if d == 0.0 && a != b {
            report.failed_legs += 1;
        }
    }
    report
}

/// Directed legs of a round trip: depot → d1 → … → dk → depot.
fn legs(vehicle: &CvrpSolutionVehicle) -> impl Iterator<Item = (&Point, &Point)> {
    let stops = vehicle.deliveries.iter().map(|d| &d.point);
    let (head, tail) = if vehicle.deliveries.is_empty() {
        (None, None)
    } else {
        (Some(&vehicle.origin), Some(&vehicle.origin))
    };
    let path: Vec<&Point> = head.into_iter().chain(stops).chain(tail).collect();
    (0..path.len().saturating_sub(1)).map(move |i| (path[i], path[i + 1]))
}
