//! Random walk execution loop.

use super::config::RandomWalkConfig;
use super::types::Individual;
use crate::error::{CvrpError, CvrpResult};
use crate::objective::Objective;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};
use u_numflow::random::create_rng;

/// Result of a random walk run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomWalkResult {
    /// Lowest-fitness individual of the final population.
    pub best: Individual,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Number of completed generations.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Population minimum after each generation's refill.
    pub convergence: Vec<f64>,
}

/// Executes the random walk baseline.
pub struct RandomWalkRunner;

impl RandomWalkRunner {
    /// Runs the random walk for `config.max_generations` generations.
    pub fn run<O: Objective + ?Sized>(
        objective: &O,
        config: &RandomWalkConfig,
    ) -> CvrpResult<RandomWalkResult> {
        Self::run_with_cancel(objective, config, None)
    }

    /// Runs the random walk with an optional cancellation token.
    pub fn run_with_cancel<O: Objective + ?Sized>(
        objective: &O,
        config: &RandomWalkConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> CvrpResult<RandomWalkResult> {
        config.validate().map_err(CvrpError::InvalidConfig)?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let n = config.population_size;
        let dims = objective.dimensions();

        info!(
            population = n,
            generations = config.max_generations,
            dimensions = dims,
            "starting random walk"
        );

        let mut population = Vec::with_capacity(n);
        for _ in 0..n {
            let mut ind = Individual::random(dims, &mut rng);
            ind.evaluate(objective)?;
            population.push(ind);
        }

        let mut convergence = Vec::with_capacity(config.max_generations);
        let mut cancelled = false;

        for generation in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Stable sort: equal fitness keeps the older individual first.
            population.sort_by(|a, b| a.fitness().total_cmp(&b.fitness()));
            population.truncate(config.survivors());

            while population.len() < n {
                let mut ind = Individual::random(dims, &mut rng);
                ind.evaluate(objective)?;
                population.push(ind);
            }

            let generation_best = population
                .iter()
                .map(Individual::fitness)
                .fold(f64::INFINITY, f64::min);
            convergence.push(generation_best);

            debug!(generation, best = generation_best, "random walk generation");
        }

        let best = best_of(&population).clone();

        info!(
            best = best.fitness(),
            generations = convergence.len(),
            cancelled,
            "random walk finished"
        );

        Ok(RandomWalkResult {
            best_fitness: best.fitness(),
            best,
            generations: convergence.len(),
            cancelled,
            convergence,
        })
    }
}

/// First individual with the lowest fitness. `population` is never empty.
fn best_of(population: &[Individual]) -> &Individual {
    let mut best = &population[0];
    for ind in &population[1..] {
        if ind.fitness() < best.fitness() {
            best = ind;
        }
    }
    best
}
