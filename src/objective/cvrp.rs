//! Decode-then-measure objective for routing instances.

use super::route::measure;
use super::types::Objective;
use crate::decoder::{vector_length, ParticleDecoder};
use crate::distance::DistanceService;
use crate::error::{CvrpError, CvrpResult};
use crate::models::{CvrpInstance, CvrpSolution};
use tracing::debug;

/// Total round-trip distance of the decoded candidate vector.
///
/// Positions have `N + 2M` dimensions: `N` customer priorities and `M`
/// reference points.
///
/// # Examples
///
/// ```
/// use cvrp_swarm::distance::Euclidean;
/// use cvrp_swarm::models::{CvrpInstance, Delivery, Point};
/// use cvrp_swarm::objective::{CvrpObjective, Objective};
///
/// let instance = CvrpInstance::new(
///     "tiny",
///     Point::new(0.0, 0.0),
///     vec![
///         Delivery::new("a", Point::new(1.0, 0.0), 1),
///         Delivery::new("b", Point::new(0.0, 1.0), 1),
///     ],
/// );
/// let objective = CvrpObjective::new(&instance, 1, &Euclidean).unwrap();
/// assert_eq!(objective.dimensions(), 4);
///
/// let d = objective.evaluate(&[0.1, 0.9, 0.5, 0.5]).unwrap();
/// assert!((d - (2.0 + 2f64.sqrt())).abs() < 1e-12);
/// ```
pub struct CvrpObjective<'a, D: DistanceService + ?Sized> {
    decoder: ParticleDecoder<'a>,
    num_vehicles: usize,
    service: &'a D,
}

impl<'a, D: DistanceService + ?Sized> CvrpObjective<'a, D> {
    /// Creates the objective for `num_vehicles` vehicles.
    ///
    /// Fails for an instance without deliveries or for zero vehicles.
    pub fn new(instance: &'a CvrpInstance, num_vehicles: usize, service: &'a D) -> CvrpResult<Self> {
        if num_vehicles == 0 {
            return Err(CvrpError::InvalidConfig(
                "num_vehicles must be at least 1".into(),
            ));
        }
        Ok(Self {
            decoder: ParticleDecoder::new(instance)?,
            num_vehicles,
            service,
        })
    }

    /// Number of vehicles `M`.
    pub fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    /// The decoder used for every evaluation.
    pub fn decoder(&self) -> &ParticleDecoder<'a> {
        &self.decoder
    }

    /// Decodes `position` without measuring it.
    pub fn solution(&self, position: &[f64]) -> CvrpResult<CvrpSolution> {
        self.check_len(position)?;
        self.decoder.decode(position)
    }

    fn check_len(&self, position: &[f64]) -> CvrpResult<()> {
        if position.len() == self.dimensions() {
            Ok(())
        } else {
            Err(CvrpError::InvalidVectorLength {
                customers: self.decoder.num_customers(),
                actual: position.len(),
            })
        }
    }
}

impl<D: DistanceService + ?Sized> Objective for CvrpObjective<'_, D> {
    fn dimensions(&self) -> usize {
        vector_length(self.decoder.num_customers(), self.num_vehicles)
    }

    fn evaluate(&self, position: &[f64]) -> CvrpResult<f64> {
        let solution = self.solution(position)?;
        let report = measure(&solution, self.service);
        if !report.is_complete() {
            debug!(
                solution = %solution.name,
                failed_legs = report.failed_legs,
                legs = report.legs,
                "unknown legs counted as 0.0"
            );
        }
        Ok(report.total)
    }
}
