//! Decoded routing solution.

use super::{Delivery, Point};

/// One vehicle's route: depot origin plus deliveries in visiting order.
///
/// The route implicitly starts and ends at `origin`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CvrpSolutionVehicle {
    /// Depot shared by every vehicle of the instance.
    pub origin: Point,
    /// Deliveries in visiting order.
    pub deliveries: Vec<Delivery>,
}

impl CvrpSolutionVehicle {
    /// Creates a vehicle route.
    pub fn new(origin: Point, deliveries: Vec<Delivery>) -> Self {
        Self { origin, deliveries }
    }

    /// Returns `true` if this vehicle serves no deliveries.
    pub fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }

    /// Number of deliveries on this route.
    pub fn len(&self) -> usize {
        self.deliveries.len()
    }
}

/// A complete assignment of deliveries to vehicles.
///
/// # Examples
///
/// ```
/// use cvrp_swarm::models::{CvrpSolution, CvrpSolutionVehicle, Point};
///
/// let depot = Point::new(0.0, 0.0);
/// let sol = CvrpSolution::new(
///     "tiny",
///     vec![CvrpSolutionVehicle::new(depot, vec![]), CvrpSolutionVehicle::new(depot, vec![])],
/// );
/// assert_eq!(sol.num_vehicles(), 2);
/// assert_eq!(sol.num_served(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CvrpSolution {
    /// Name of the instance this solution belongs to.
    pub name: String,
    /// One entry per vehicle, including vehicles with no deliveries.
    pub vehicles: Vec<CvrpSolutionVehicle>,
}

impl CvrpSolution {
    /// Creates a solution.
    pub fn new(name: impl Into<String>, vehicles: Vec<CvrpSolutionVehicle>) -> Self {
        Self {
            name: name.into(),
            vehicles,
        }
    }

    /// Number of vehicles (`M`), empty ones included.
    pub fn num_vehicles(&self) -> usize {
        self.vehicles.len()
    }

    /// Total number of deliveries served across all vehicles.
    pub fn num_served(&self) -> usize {
        self.vehicles.iter().map(|v| v.len()).sum()
    }

    /// Number of vehicles with at least one delivery.
    pub fn num_active_vehicles(&self) -> usize {
        self.vehicles.iter().filter(|v| !v.is_empty()).count()
    }
}
