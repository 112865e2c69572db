//! Core trait shared by the PSO and random walk runners.

use crate::error::CvrpResult;

/// A minimization objective over real-valued vectors.
///
/// The runners only see positions; decoding and distance lookups are the
/// implementation's business. Errors abort the run that triggered them.
///
/// # Examples
///
/// ```
/// use cvrp_swarm::error::CvrpResult;
/// use cvrp_swarm::objective::Objective;
///
/// struct Sphere(usize);
///
/// impl Objective for Sphere {
///     fn dimensions(&self) -> usize { self.0 }
///     fn evaluate(&self, position: &[f64]) -> CvrpResult<f64> {
///         Ok(position.iter().map(|x| x * x).sum())
///     }
/// }
///
/// assert_eq!(Sphere(2).evaluate(&[3.0, 4.0]).unwrap(), 25.0);
/// ```
pub trait Objective {
    /// Length of the vectors this objective accepts.
    fn dimensions(&self) -> usize;

    /// Fitness of `position`. Lower is better.
    fn evaluate(&self, position: &[f64]) -> CvrpResult<f64>;
}
