//! Particle Swarm Optimization (PSO).
//!
//! A population of particles moves through `[range_low, range_high]^d`.
//! Each particle is pulled toward its own best position and the swarm's
//! best position, with an inertia weight that decays linearly over the
//! run. Velocities and positions are hard-clamped after every move.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle swarm optimization"
//! - Shi & Eberhart (1998), "A modified particle swarm optimizer"

mod config;
mod runner;
mod types;

pub use config::{InertiaSchedule, PsoConfig};
pub use runner::{PsoResult, PsoRunner};
pub use types::{Particle, Swarm};
