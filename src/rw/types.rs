//! Random walk individual.

use rand::Rng;

use crate::error::CvrpResult;
use crate::objective::Objective;

/// A candidate vector with its fitness.
///
/// Fitness is `f64::INFINITY` until [`evaluate`](Self::evaluate) is called.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    values: Vec<f64>,
    fitness: f64,
}

impl Individual {
    /// Samples every component uniformly from `[0, 1)`.
    pub fn random<R: Rng>(dimensions: usize, rng: &mut R) -> Self {
        Self::new((0..dimensions).map(|_| rng.random_range(0.0..1.0)).collect())
    }

    /// Wraps an unevaluated candidate vector.
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            fitness: f64::INFINITY,
        }
    }

    /// Scores the candidate with `objective`.
    pub fn evaluate<O: Objective + ?Sized>(&mut self, objective: &O) -> CvrpResult<()> {
        self.fitness = objective.evaluate(&self.values)?;
        Ok(())
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }
}
