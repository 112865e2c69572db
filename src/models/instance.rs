//! Problem instance and delivery records.

use super::Point;

/// A single delivery to be served by some vehicle.
///
/// `id` and `size` are opaque payload carried through to the solution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delivery {
    /// Delivery identifier.
    pub id: String,
    /// Where the delivery is dropped off.
    pub point: Point,
    /// Package size. Not used by the objective.
    pub size: u32,
}

impl Delivery {
    /// Creates a delivery.
    pub fn new(id: impl Into<String>, point: Point, size: u32) -> Self {
        Self {
            id: id.into(),
            point,
            size,
        }
    }
}

/// A named routing instance: one depot and an ordered list of deliveries.
///
/// Instances are read-only inputs to the decoder and the objective.
///
/// # Examples
///
/// ```
/// use cvrp_swarm::models::{CvrpInstance, Delivery, Point};
///
/// let instance = CvrpInstance::new(
///     "tiny",
///     Point::new(0.0, 0.0),
///     vec![
///         Delivery::new("a", Point::new(1.0, 0.0), 1),
///         Delivery::new("b", Point::new(0.0, 1.0), 1),
///     ],
/// );
/// assert_eq!(instance.num_deliveries(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CvrpInstance {
    /// Instance name, copied into decoded solutions.
    pub name: String,
    /// Depot every vehicle starts from and returns to.
    pub origin: Point,
    /// Deliveries in input order.
    pub deliveries: Vec<Delivery>,
}

impl CvrpInstance {
    /// Creates an instance.
    pub fn new(name: impl Into<String>, origin: Point, deliveries: Vec<Delivery>) -> Self {
        Self {
            name: name.into(),
            origin,
            deliveries,
        }
    }

    /// Number of deliveries (`N`).
    pub fn num_deliveries(&self) -> usize {
        self.deliveries.len()
    }
}
