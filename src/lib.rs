//! Capacitated vehicle routing by continuous metaheuristics.
//!
//! Candidate routings are encoded as real vectors of length `N + 2M` for
//! `N` deliveries and `M` vehicles:
//!
//! - **Priority keys** (first `N` entries): deliveries are processed in
//!   ascending key order.
//! - **Reference points** (last `2M` entries): one normalized point per
//!   vehicle. Each delivery joins the vehicle whose reference point is
//!   nearest to its normalized position.
//!
//! The [`decoder`] turns such a vector into a [`models::CvrpSolution`], the
//! [`objective`] measures it as total closed-tour distance through a
//! [`distance::DistanceService`], and two optimizers search the vector space:
//!
//! - **PSO** ([`pso`]): global-best particle swarm with a linearly
//!   decreasing inertia weight.
//! - **Random walk** ([`rw`]): truncate-and-refill baseline.
//!
//! Repeated runs can be aggregated with [`convergence::ConvergenceSummary`].
//!
//! # Example
//!
//! ```
//! use cvrp_swarm::distance::Euclidean;
//! use cvrp_swarm::models::{CvrpInstance, Delivery, Point};
//! use cvrp_swarm::objective::CvrpObjective;
//! use cvrp_swarm::pso::{PsoConfig, PsoRunner};
//!
//! let instance = CvrpInstance::new(
//!     "demo",
//!     Point::new(0.0, 0.0),
//!     vec![
//!         Delivery::new("a", Point::new(1.0, 0.0), 1),
//!         Delivery::new("b", Point::new(0.0, 1.0), 1),
//!         Delivery::new("c", Point::new(1.0, 1.0), 1),
//!     ],
//! );
//! let objective = CvrpObjective::new(&instance, 2, &Euclidean).unwrap();
//! let config = PsoConfig::default()
//!     .with_num_particles(10)
//!     .with_max_iterations(20)
//!     .with_seed(7);
//!
//! let result = PsoRunner::run(&objective, &config).unwrap();
//! let solution = objective.solution(result.best.position()).unwrap();
//! assert_eq!(solution.num_served(), 3);
//! ```

pub mod bounds;
pub mod convergence;
pub mod decoder;
pub mod distance;
pub mod error;
pub mod models;
pub mod objective;
pub mod pso;
pub mod rw;
