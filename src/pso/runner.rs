//! PSO execution loop.

use super::config::PsoConfig;
use super::types::{Particle, Swarm};
use crate::error::{CvrpError, CvrpResult};
use crate::objective::Objective;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};
use u_numflow::random::create_rng;

/// Result of a PSO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoResult {
    /// Snapshot of the global best particle.
    pub best: Particle,

    /// Fitness of the global best (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Number of completed iterations.
    pub iterations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Global best fitness after each completed iteration.
    pub convergence: Vec<f64>,

    /// The swarm as it stood when the run ended.
    pub swarm: Swarm,
}

impl PsoResult {
    /// Mean fitness of the final swarm.
    pub fn final_average_fitness(&self) -> f64 {
        self.swarm.average_fitness()
    }

    /// Sample standard deviation of the final swarm's fitness.
    pub fn final_stddev_fitness(&self) -> f64 {
        self.swarm.stddev_fitness(None)
    }
}

/// Executes the PSO algorithm.
///
/// # Usage
///
/// ```
/// use cvrp_swarm::error::CvrpResult;
/// use cvrp_swarm::objective::Objective;
/// use cvrp_swarm::pso::{PsoConfig, PsoRunner};
///
/// struct Bowl;
///
/// impl Objective for Bowl {
///     fn dimensions(&self) -> usize { 2 }
///     fn evaluate(&self, x: &[f64]) -> CvrpResult<f64> {
///         Ok((x[0] - 0.3).powi(2) + (x[1] - 0.6).powi(2))
///     }
/// }
///
/// let config = PsoConfig::default().with_num_particles(10).with_max_iterations(30).with_seed(1);
/// let result = PsoRunner::run(&Bowl, &config).unwrap();
/// assert_eq!(result.convergence.len(), 30);
/// assert!(result.best_fitness < 0.05);
/// ```
pub struct PsoRunner;

impl PsoRunner {
    /// Runs PSO for `config.max_iterations` iterations.
    ///
    /// Fails on an invalid configuration or when the objective fails; no
    /// partial result is returned in that case.
    pub fn run<O: Objective + ?Sized>(objective: &O, config: &PsoConfig) -> CvrpResult<PsoResult> {
        Self::run_with_cancel(objective, config, None)
    }

    /// Runs PSO with an optional cancellation token.
    ///
    /// If `cancel` is set, the run stops before the next iteration and
    /// returns the best particle found so far.
    pub fn run_with_cancel<O: Objective + ?Sized>(
        objective: &O,
        config: &PsoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> CvrpResult<PsoResult> {
        config.validate().map_err(CvrpError::InvalidConfig)?;
        if objective.dimensions() == 0 {
            return Err(CvrpError::InvalidConfig(
                "objective must have at least one dimension".into(),
            ));
        }

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        info!(
            particles = config.num_particles,
            iterations = config.max_iterations,
            dimensions = objective.dimensions(),
            "starting PSO"
        );

        let swarm = Swarm::new(
            objective,
            config.num_particles,
            config.range_low,
            config.range_high,
            &mut rng,
        )?;

        Self::evolve(objective, config, swarm, &mut rng, cancel)
    }

    /// Iterates an already evaluated swarm for `config.max_iterations`.
    fn evolve<O: Objective + ?Sized, R: Rng>(
        objective: &O,
        config: &PsoConfig,
        mut swarm: Swarm,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> CvrpResult<PsoResult> {
        let best_index = swarm
            .best_index()
            .ok_or_else(|| CvrpError::InvalidConfig("swarm is empty".into()))?;
        let mut global_best = swarm.particles()[best_index].clone();

        let mut convergence = Vec::with_capacity(config.max_iterations);
        let mut cancelled = false;

        for t in 0..config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let inertia = config.inertia_at(t);
            sweep(objective, &mut swarm, &mut global_best, inertia, config, rng)?;
            convergence.push(global_best.fitness);

            debug!(
                iteration = t,
                inertia,
                best = global_best.fitness,
                mean = swarm.average_fitness(),
                stddev = swarm.stddev_fitness(None),
                "PSO iteration"
            );
        }

        info!(
            best = global_best.fitness,
            iterations = convergence.len(),
            cancelled,
            "PSO finished"
        );

        Ok(PsoResult {
            best_fitness: global_best.fitness,
            best: global_best,
            iterations: convergence.len(),
            cancelled,
            convergence,
            swarm,
        })
    }
}

/// Moves every particle once, in swarm order, with inertia weight `inertia`.
fn sweep<O: Objective + ?Sized, R: Rng>(
    objective: &O,
    swarm: &mut Swarm,
    global_best: &mut Particle,
    inertia: f64,
    config: &PsoConfig,
    rng: &mut R,
) -> CvrpResult<()> {
    for particle in swarm.particles_mut() {
        update_velocity(particle, global_best, inertia, config, rng);
        move_particle(particle, config);
        particle.evaluate(objective)?;
        update_bests(particle, global_best);
    }
    Ok(())
}

/// `v = w*v + c1*r1*(pbest - x) + c2*r2*(gbest - x)`, then clamp to
/// `±max_velocity`. `r1` and `r2` are drawn per dimension.
fn update_velocity<R: Rng>(
    particle: &mut Particle,
    global_best: &Particle,
    inertia: f64,
    config: &PsoConfig,
    rng: &mut R,
) {
    let max_velocity = config.max_velocity();
    for j in 0..particle.velocity.len() {
        let r1: f64 = rng.random();
        let r2: f64 = rng.random();
        let x = particle.position[j];
        let v = inertia * particle.velocity[j]
            + config.cognitive * r1 * (particle.personal_best[j] - x)
            + config.social * r2 * (global_best.position[j] - x);
        particle.velocity[j] = v.clamp(-max_velocity, max_velocity);
    }
}

/// `x += v`, then clamp every component to the search range.
fn move_particle(particle: &mut Particle, config: &PsoConfig) {
    for (x, v) in particle.position.iter_mut().zip(&particle.velocity) {
        *x = (*x + v).clamp(config.range_low, config.range_high);
    }
}

/// Personal best on `<=`; the global best is only challenged by a particle
/// that just improved its own best.
fn update_bests(particle: &mut Particle, global_best: &mut Particle) {
    if particle.update_personal_best() && particle.fitness <= global_best.fitness {
        global_best.position.clone_from(&particle.position);
        global_best.fitness = particle.fitness;
        global_best.personal_best.clone_from(&particle.position);
        global_best.personal_best_fitness = particle.fitness;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;

    /// Sphere centred at 0.3 in every dimension.
    struct ShiftedSphere(usize);

    impl Objective for ShiftedSphere {
        fn dimensions(&self) -> usize {
            self.0
        }
        fn evaluate(&self, x: &[f64]) -> CvrpResult<f64> {
            Ok(x.iter().map(|v| (v - 0.3).powi(2)).sum())
        }
    }

    /// Rewards running off the upper edge, so the clamps get exercised.
    struct Ramp(usize);

    impl Objective for Ramp {
        fn dimensions(&self) -> usize {
            self.0
        }
        fn evaluate(&self, x: &[f64]) -> CvrpResult<f64> {
            Ok(-x.iter().map(|v| 100.0 * v).sum::<f64>())
        }
    }

    struct Counting {
        dims: usize,
        calls: Cell<usize>,
        fail_after: Option<usize>,
    }

    impl Objective for Counting {
        fn dimensions(&self) -> usize {
            self.dims
        }
        fn evaluate(&self, x: &[f64]) -> CvrpResult<f64> {
            let n = self.calls.get() + 1;
            self.calls.set(n);
            if self.fail_after.is_some_and(|limit| n > limit) {
                return Err(CvrpError::InvalidVectorLength {
                    customers: 0,
                    actual: x.len(),
                });
            }
            Ok(x.iter().sum())
        }
    }

    fn small_config() -> PsoConfig {
        PsoConfig::default()
            .with_num_particles(20)
            .with_max_iterations(50)
            .with_seed(42)
    }

    #[test]
    fn test_pso_sphere() {
        let result = PsoRunner::run(&ShiftedSphere(3), &small_config()).unwrap();
        assert!(
            result.best_fitness < 0.05,
            "expected near-zero cost, got {}",
            result.best_fitness
        );
        assert_eq!(result.best.fitness(), result.best_fitness);
        assert_eq!(result.iterations, 50);
        assert!(!result.cancelled);
    }

    #[test]
    fn test_pso_convergence_non_increasing() {
        let result = PsoRunner::run(&ShiftedSphere(4), &small_config()).unwrap();
        assert_eq!(result.convergence.len(), 50);
        for window in result.convergence.windows(2) {
            assert!(
                window[1] <= window[0],
                "convergence should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
        assert_eq!(*result.convergence.last().unwrap(), result.best_fitness);
    }

    #[test]
    fn test_pso_global_best_is_min_personal_best() {
        let result = PsoRunner::run(&ShiftedSphere(3), &small_config()).unwrap();
        let min_pbest = result
            .swarm
            .particles()
            .iter()
            .map(|p| p.personal_best_fitness())
            .fold(f64::INFINITY, f64::min);
        assert_eq!(result.best_fitness, min_pbest);
        let recomputed = ShiftedSphere(3).evaluate(result.best.position()).unwrap();
        assert!((recomputed - result.best_fitness).abs() < 1e-12);
    }

    #[test]
    fn test_pso_reproducible() {
        let a = PsoRunner::run(&ShiftedSphere(3), &small_config()).unwrap();
        let b = PsoRunner::run(&ShiftedSphere(3), &small_config()).unwrap();
        assert_eq!(a.convergence, b.convergence);
        assert_eq!(a.best.position(), b.best.position());
    }

    #[test]
    fn test_pso_evaluation_count() {
        let objective = Counting {
            dims: 2,
            calls: Cell::new(0),
            fail_after: None,
        };
        let config = PsoConfig::default()
            .with_num_particles(6)
            .with_max_iterations(4)
            .with_seed(3);
        PsoRunner::run(&objective, &config).unwrap();
        // Initial evaluation plus one per particle per iteration.
        assert_eq!(objective.calls.get(), 6 + 6 * 4);
    }

    #[test]
    fn test_pso_objective_error_aborts() {
        let objective = Counting {
            dims: 2,
            calls: Cell::new(0),
            fail_after: Some(10),
        };
        let config = PsoConfig::default()
            .with_num_particles(5)
            .with_max_iterations(10)
            .with_seed(3);
        let err = PsoRunner::run(&objective, &config).unwrap_err();
        assert!(matches!(err, CvrpError::InvalidVectorLength { actual: 2, .. }));
        assert_eq!(objective.calls.get(), 11);
    }

    #[test]
    fn test_pso_invalid_config() {
        let config = PsoConfig::default().with_num_particles(0);
        assert!(matches!(
            PsoRunner::run(&ShiftedSphere(2), &config),
            Err(CvrpError::InvalidConfig(_))
        ));
        assert!(matches!(
            PsoRunner::run(&ShiftedSphere(0), &PsoConfig::default()),
            Err(CvrpError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_pso_cancellation() {
        // Set before running so the outcome does not depend on timing.
        let cancel = Arc::new(AtomicBool::new(true));
        let result =
            PsoRunner::run_with_cancel(&ShiftedSphere(3), &small_config(), Some(cancel)).unwrap();
        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
        assert!(result.convergence.is_empty());
        let initial_min = result
            .swarm
            .particles()
            .iter()
            .map(|p| p.fitness())
            .fold(f64::INFINITY, f64::min);
        assert_eq!(result.best_fitness, initial_min);
    }

    #[test]
    fn test_pso_single_particle() {
        let config = PsoConfig::default()
            .with_num_particles(1)
            .with_max_iterations(5)
            .with_seed(9);
        let result = PsoRunner::run(&ShiftedSphere(2), &config).unwrap();
        assert_eq!(result.swarm.len(), 1);
        assert_eq!(result.final_stddev_fitness(), 0.0);
        assert_eq!(result.final_average_fitness(), result.swarm.particles()[0].fitness());
    }

    #[test]
    fn test_pso_ramp_reaches_upper_corner() {
        let config = PsoConfig::default()
            .with_num_particles(10)
            .with_max_iterations(20)
            .with_seed(5);
        let result = PsoRunner::run(&Ramp(3), &config).unwrap();
        assert!(result.best.position().iter().all(|&x| x <= 1.0));
        assert!(result.best_fitness >= -300.0);
        assert!(result.best_fitness < -230.0, "got {}", result.best_fitness);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_result_derives_serde() {
        fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}
        assert_serde::<PsoResult>();
    }

    #[test]
    fn test_update_bests_equal_fitness_replaces_global_best() {
        let mut global_best = Particle::with_fitness(vec![0.1, 0.1], 2.0);
        let mut particle = Particle::with_fitness(vec![0.9, 0.9], 5.0);
        particle.position = vec![0.6, 0.4];
        particle.fitness = 2.0;

        update_bests(&mut particle, &mut global_best);

        assert_eq!(particle.personal_best(), &[0.6, 0.4]);
        assert_eq!(global_best.position(), &[0.6, 0.4]);
        assert_eq!(global_best.personal_best(), &[0.6, 0.4]);
        assert_eq!(global_best.fitness(), 2.0);
    }

    #[test]
    fn test_update_bests_worse_fitness_keeps_global_best() {
        let mut global_best = Particle::with_fitness(vec![0.1, 0.1], 2.0);
        let mut particle = Particle::with_fitness(vec![0.9, 0.9], 3.0);
        particle.position = vec![0.6, 0.4];
        particle.fitness = 2.5;

        update_bests(&mut particle, &mut global_best);

        // Personal best improved, but 2.5 does not beat the global 2.0.
        assert_eq!(particle.personal_best(), &[0.6, 0.4]);
        assert_eq!(global_best.position(), &[0.1, 0.1]);
        assert_eq!(global_best.fitness(), 2.0);
    }

    #[test]
    fn test_sweep_applies_inertia_schedule() {
        // Without cognitive and social pulls, each sweep scales the velocity
        // by that iteration's inertia weight.
        let config = PsoConfig::default()
            .with_max_iterations(4)
            .with_coefficients(0.0, 0.0)
            .with_range(-10.0, 10.0);
        let objective = ShiftedSphere(1);
        let mut particle = Particle::with_fitness(vec![0.0], 0.09);
        particle.velocity = vec![1.0];
        let mut global_best = particle.clone();
        let mut swarm = Swarm::from_particles(vec![particle]);
        let mut rng = create_rng(11);

        let mut expected_velocity = 1.0;
        let mut expected_position = 0.0;
        for t in 0..config.max_iterations {
            let inertia = config.inertia_at(t);
            sweep(&objective, &mut swarm, &mut global_best, inertia, &config, &mut rng).unwrap();

            expected_velocity *= inertia;
            expected_position += expected_velocity;
            let p = &swarm.particles()[0];
            assert!(
                (p.velocity()[0] - expected_velocity).abs() < 1e-12,
                "iteration {}: velocity {} != {}",
                t,
                p.velocity()[0],
                expected_velocity
            );
            assert!((p.position()[0] - expected_position).abs() < 1e-12);
        }
        // 0.9 * 0.7333.. * 0.5666.. * 0.4
        assert!((expected_velocity - 0.9 * (0.9 - 0.5 / 3.0) * (0.9 - 1.0 / 3.0) * 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_run_decays_velocity_by_scheduled_inertia() {
        let config = PsoConfig::default()
            .with_max_iterations(4)
            .with_coefficients(0.0, 0.0)
            .with_range(-10.0, 10.0);
        let mut particle = Particle::with_fitness(vec![0.0], 0.09);
        particle.velocity = vec![1.0];
        let swarm = Swarm::from_particles(vec![particle]);
        let mut rng = create_rng(11);

        let result =
            PsoRunner::evolve(&ShiftedSphere(1), &config, swarm, &mut rng, None).unwrap();

        // Weights 0.9, 0.7333.., 0.5666.., 0.4 for a four-iteration run.
        let expected = 0.9 * (0.9 - 0.5 / 3.0) * (0.9 - 1.0 / 3.0) * 0.4;
        let v = result.swarm.particles()[0].velocity()[0];
        assert!((v - expected).abs() < 1e-12, "velocity {} != {}", v, expected);
        assert_eq!(result.iterations, 4);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_velocity_and_position_clamped(
            seed in any::<u64>(),
            low in -5.0f64..0.0,
            width in 0.1f64..5.0,
            iterations in 1usize..8,
        ) {
            let high = low + width;
            let config = PsoConfig::default()
                .with_num_particles(6)
                .with_max_iterations(iterations)
                .with_range(low, high)
                .with_seed(seed);
            let result = PsoRunner::run(&Ramp(4), &config).unwrap();
            let max_velocity = config.max_velocity();
            for p in result.swarm.particles() {
                prop_assert!(p.velocity().iter().all(|v| v.abs() <= max_velocity));
                prop_assert!(p.position().iter().all(|x| (low..=high).contains(x)));
                prop_assert!(p.personal_best().iter().all(|x| (low..=high).contains(x)));
            }
            for w in result.convergence.windows(2) {
                prop_assert!(w[1] <= w[0]);
            }
        }
    }
}
