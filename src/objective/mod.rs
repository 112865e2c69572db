//! Objective functions.
//!
//! - [`Objective`]: the contract between the optimizers and a problem
//! - [`total_distance`] / [`vehicle_distance_traveled`]: round-trip route length
//! - [`CvrpObjective`]: decode a candidate vector, then sum route lengths

mod cvrp;
mod route;
mod types;

pub use cvrp::CvrpObjective;
pub use route::{route_report, total_distance, vehicle_distance_traveled, DistanceReport};
pub use types::Objective;
