//! Error types.
//!
//! Degraded distance data is not represented here: distance services log
//! and return `0.0` instead of failing.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type CvrpResult<T> = Result<T, CvrpError>;

/// Errors raised by decoding, bounds handling and the optimizers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CvrpError {
    /// An axis has a minimum above its maximum.
    #[error("invalid bounds on {axis} axis: min {min} > max {max}")]
    InvalidBounds {
        /// Axis name (`lat` or `lng`).
        axis: &'static str,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// A value fell outside the interval it was required to lie in.
    #[error("value {value} outside [{low}, {high}]")]
    OutOfBounds {
        /// Offending value.
        value: f64,
        /// Interval start.
        low: f64,
        /// Interval end.
        high: f64,
    },

    /// The instance has no deliveries.
    #[error("instance has no deliveries")]
    EmptyInstance,

    /// A candidate vector does not have the `N + 2M` layout with `M >= 1`.
    #[error("vector of length {actual} does not encode {customers} customers plus at least one vehicle")]
    InvalidVectorLength {
        /// Number of deliveries in the instance.
        customers: usize,
        /// Length of the supplied vector.
        actual: usize,
    },

    /// Optimizer configuration rejected by `validate()`.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No convergence traces were supplied.
    #[error("no convergence traces supplied")]
    EmptyConvergence,

    /// Convergence traces of different lengths cannot be aggregated.
    #[error("convergence trace {run} has {actual} iterations, expected {expected}")]
    MismatchedConvergence {
        /// Length of the first trace.
        expected: usize,
        /// Length of the offending trace.
        actual: usize,
        /// Index of the offending trace.
        run: usize,
    },
}
