//! Random walk baseline.
//!
//! Truncation selection over a re-sampled population: every generation the
//! better half survives and the rest is replaced by fresh uniform samples.
//! Useful as a yardstick for the PSO runner on the same objective.

mod config;
mod runner;
mod types;

pub use config::RandomWalkConfig;
pub use runner::{RandomWalkResult, RandomWalkRunner};
pub use types::Individual;
