//! PSO configuration and inertia schedule.

/// Linearly decaying inertia weight.
///
/// `w_t = start - (start - end) * t / (T - 1)`, so the first iteration uses
/// `start` and the last one uses `end`. A single-iteration run uses `start`.
///
/// Reference: Shi & Eberhart (1998)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InertiaSchedule {
    /// Weight at the first iteration.
    pub start: f64,
    /// Weight at the last iteration.
    pub end: f64,
}

impl Default for InertiaSchedule {
    fn default() -> Self {
        Self {
            start: 0.9,
            end: 0.4,
        }
    }
}

impl InertiaSchedule {
    /// Inertia weight for iteration `t` of `total` (0-based).
    ///
    /// # Examples
    ///
    /// ```
    /// use cvrp_swarm::pso::InertiaSchedule;
    ///
    /// let w = InertiaSchedule::default();
    /// assert_eq!(w.at(0, 11), 0.9);
    /// assert!((w.at(5, 11) - 0.65).abs() < 1e-12);
    /// assert!((w.at(10, 11) - 0.4).abs() < 1e-12);
    /// ```
    pub fn at(&self, t: usize, total: usize) -> f64 {
        if total <= 1 {
            return self.start;
        }
        let progress = t.min(total - 1) as f64 / (total - 1) as f64;
        self.start - (self.start - self.end) * progress
    }
}

/// Configuration for the PSO runner.
///
/// # Examples
///
/// ```
/// use cvrp_swarm::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_num_particles(40)
///     .with_max_iterations(200)
///     .with_seed(7);
/// assert_eq!(config.max_velocity(), 0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoConfig {
    /// Number of particles in the swarm.
    pub num_particles: usize,

    /// Number of iterations `T`. Each iteration moves every particle once.
    pub max_iterations: usize,

    /// Cognitive coefficient `c1` (pull toward the personal best).
    pub cognitive: f64,

    /// Social coefficient `c2` (pull toward the global best).
    pub social: f64,

    /// Inertia weight schedule.
    pub inertia: InertiaSchedule,

    /// Lower bound of every position component.
    pub range_low: f64,

    /// Upper bound of every position component.
    pub range_high: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            num_particles: 30,
            max_iterations: 100,
            cognitive: 2.05,
            social: 2.05,
            inertia: InertiaSchedule::default(),
            range_low: 0.0,
            range_high: 1.0,
            seed: None,
        }
    }
}

impl PsoConfig {
    /// Sets the swarm size.
    pub fn with_num_particles(mut self, n: usize) -> Self {
        self.num_particles = n;
        self
    }

    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the cognitive and social coefficients.
    pub fn with_coefficients(mut self, cognitive: f64, social: f64) -> Self {
        self.cognitive = cognitive;
        self.social = social;
        self
    }

    /// Sets the inertia schedule.
    pub fn with_inertia(mut self, start: f64, end: f64) -> Self {
        self.inertia = InertiaSchedule { start, end };
        self
    }

    /// Sets the position range.
    pub fn with_range(mut self, low: f64, high: f64) -> Self {
        self.range_low = low;
        self.range_high = high;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Velocity clamp: half the width of the position range.
    pub fn max_velocity(&self) -> f64 {
        (self.range_high - self.range_low) / 2.0
    }

    /// Inertia weight for iteration `t` of this run.
    pub fn inertia_at(&self, t: usize) -> f64 {
        self.inertia.at(t, self.max_iterations)
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_particles == 0 {
            return Err("num_particles must be at least 1".into());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if self.range_low >= self.range_high || self.range_low.is_nan() || self.range_high.is_nan() {
            return Err(format!(
                "range_low ({}) must be below range_high ({})",
                self.range_low, self.range_high
            ));
        }
        if self.cognitive < 0.0 || self.social < 0.0 {
            return Err("cognitive and social coefficients must be non-negative".into());
        }
        if !self.inertia.start.is_finite() || !self.inertia.end.is_finite() {
            return Err("inertia weights must be finite".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PsoConfig::default();
        assert_eq!(config.num_particles, 30);
        assert_eq!(config.max_iterations, 100);
        assert!((config.cognitive - 2.05).abs() < 1e-12);
        assert!((config.social - 2.05).abs() < 1e-12);
        assert_eq!(config.inertia, InertiaSchedule { start: 0.9, end: 0.4 });
        assert_eq!((config.range_low, config.range_high), (0.0, 1.0));
        assert!(config.seed.is_none());
        assert!((config.max_velocity() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PsoConfig::default()
            .with_num_particles(10)
            .with_max_iterations(5)
            .with_coefficients(1.5, 1.7)
            .with_inertia(0.8, 0.3)
            .with_range(-2.0, 2.0)
            .with_seed(42);
        assert_eq!(config.num_particles, 10);
        assert_eq!(config.max_iterations, 5);
        assert_eq!((config.cognitive, config.social), (1.5, 1.7));
        assert_eq!(config.inertia, InertiaSchedule { start: 0.8, end: 0.3 });
        assert_eq!(config.max_velocity(), 2.0);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_inertia_linear_decay() {
        let config = PsoConfig::default().with_max_iterations(6);
        assert_eq!(config.inertia_at(0), 0.9);
        assert!((config.inertia_at(5) - 0.4).abs() < 1e-12);
        let ws: Vec<f64> = (0..6).map(|t| config.inertia_at(t)).collect();
        for w in ws.windows(2) {
            assert!((w[0] - w[1] - 0.1).abs() < 1e-12);
        }
    }

    #[test]
    fn test_inertia_single_iteration() {
        assert_eq!(InertiaSchedule::default().at(0, 1), 0.9);
    }

    #[test]
    fn test_validate() {
        assert!(PsoConfig::default().validate().is_ok());
        assert!(PsoConfig::default().with_num_particles(0).validate().is_err());
        assert!(PsoConfig::default().with_max_iterations(0).validate().is_err());
        assert!(PsoConfig::default().with_range(1.0, 1.0).validate().is_err());
        assert!(PsoConfig::default()
            .with_coefficients(-1.0, 2.0)
            .validate()
            .is_err());
        assert!(PsoConfig::default()
            .with_inertia(f64::NAN, 0.4)
            .validate()
            .is_err());
    }
}
