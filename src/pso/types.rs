//! Particle and swarm state.

use rand::Rng;

use crate::error::CvrpResult;
use crate::objective::Objective;

/// One candidate solution moving through the search space.
///
/// Holds its current position and velocity, its current fitness, and the
/// best position it has ever visited. `Clone` produces a fully independent
/// copy; the runner relies on this for the global best snapshot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Particle {
    pub(super) position: Vec<f64>,
    pub(super) velocity: Vec<f64>,
    pub(super) personal_best: Vec<f64>,
    pub(super) personal_best_fitness: f64,
    pub(super) fitness: f64,
}

impl Particle {
    /// Creates a particle at a uniformly random position in `[low, high]`,
    /// evaluates it, and sets zero velocity. The initial position is also
    /// the personal best.
    pub fn new<O: Objective + ?Sized, R: Rng>(
        objective: &O,
        low: f64,
        high: f64,
        rng: &mut R,
    ) -> CvrpResult<Self> {
        let position: Vec<f64> = (0..objective.dimensions())
            .map(|_| rng.random_range(low..=high))
            .collect();
        let fitness = objective.evaluate(&position)?;
        Ok(Self::with_fitness(position, fitness))
    }

    /// Creates a particle at a known position with an already computed
    /// fitness. Velocity is zero and the personal best is `position`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cvrp_swarm::pso::Particle;
    ///
    /// let p = Particle::with_fitness(vec![0.2, 0.4], 3.0);
    /// assert_eq!(p.velocity(), &[0.0, 0.0]);
    /// assert_eq!(p.personal_best(), &[0.2, 0.4]);
    /// assert_eq!(p.personal_best_fitness(), 3.0);
    /// ```
    pub fn with_fitness(position: Vec<f64>, fitness: f64) -> Self {
        Self {
            velocity: vec![0.0; position.len()],
            personal_best: position.clone(),
            personal_best_fitness: fitness,
            position,
            fitness,
        }
    }

    /// Recomputes `fitness` from the current position.
    pub fn evaluate<O: Objective + ?Sized>(&mut self, objective: &O) -> CvrpResult<()> {
        self.fitness = objective.evaluate(&self.position)?;
        Ok(())
    }

    /// Current position.
    pub fn position(&self) -> &[f64] {
        &self.position
    }

    /// Current velocity.
    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    /// Best position this particle has visited.
    pub fn personal_best(&self) -> &[f64] {
        &self.personal_best
    }

    /// Fitness at [`personal_best`](Self::personal_best).
    pub fn personal_best_fitness(&self) -> f64 {
        self.personal_best_fitness
    }

    /// Fitness at the current position.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Number of dimensions.
    pub fn num_dimensions(&self) -> usize {
        self.position.len()
    }

    /// Records the current position as the personal best if it ties or
    /// improves on it. Returns `true` when the best was updated.
    pub(super) fn update_personal_best(&mut self) -> bool {
        if self.fitness <= self.personal_best_fitness {
            self.personal_best.clone_from(&self.position);
            self.personal_best_fitness = self.fitness;
            true
        } else {
            false
        }
    }
}

/// A fixed-size population of particles.
///
/// Particles are created once; the swarm never grows or shrinks.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swarm {
    particles: Vec<Particle>,
}

impl Swarm {
    /// Creates `num_particles` independently initialized particles.
    pub fn new<O: Objective + ?Sized, R: Rng>(
        objective: &O,
        num_particles: usize,
        low: f64,
        high: f64,
        rng: &mut R,
    ) -> CvrpResult<Self> {
        let particles = (0..num_particles)
            .map(|_| Particle::new(objective, low, high, rng))
            .collect::<CvrpResult<Vec<_>>>()?;
        Ok(Self { particles })
    }

    /// Wraps existing particles.
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub(super) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Index of the first particle with the lowest current fitness.
    pub fn best_index(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, p) in self.particles.iter().enumerate() {
            match best {
                Some((_, f)) if p.fitness >= f => {}
                _ => best = Some((i, p.fitness)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Arithmetic mean of current fitness values.
    pub fn average_fitness(&self) -> f64 {
        if self.particles.is_empty() {
            return 0.0;
        }
        self.particles.iter().map(|p| p.fitness).sum::<f64>() / self.particles.len() as f64
    }

    /// Sample standard deviation (`n - 1` denominator) of current fitness
    /// values around `average`, or around [`average_fitness`] when `None`.
    ///
    /// Returns `0.0` for fewer than two particles.
    ///
    /// # Examples
    ///
    /// ```
    /// use cvrp_swarm::pso::{Particle, Swarm};
    ///
    /// let swarm = Swarm::from_particles(
    ///     [1.0, 2.0, 3.0].iter().map(|&f| Particle::with_fitness(vec![0.0], f)).collect(),
    /// );
    /// assert_eq!(swarm.average_fitness(), 2.0);
    /// assert_eq!(swarm.stddev_fitness(None), 1.0);
    /// ```
    ///
    /// [`average_fitness`]: Self::average_fitness
    pub fn stddev_fitness(&self, average: Option<f64>) -> f64 {
        let n = self.particles.len();
        if n < 2 {
            return 0.0;
        }
        let mean = average.unwrap_or_else(|| self.average_fitness());
        let sum_sq: f64 = self.particles.iter().map(|p| (p.fitness - mean).powi(2)).sum();
        (sum_sq / (n - 1) as f64).sqrt()
    }
}
