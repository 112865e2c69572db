//! Domain model types for distance-only vehicle routing.
//!
//! An instance is a depot plus an ordered list of deliveries; a solution
//! assigns every delivery to exactly one vehicle route.

mod instance;
mod point;
mod solution;

pub use instance::{CvrpInstance, Delivery};
pub use point::Point;
pub use solution::{CvrpSolution, CvrpSolutionVehicle};
