//! Random walk configuration.

/// Configuration parameters for the random walk baseline.
///
/// # Examples
///
/// ```
/// use cvrp_swarm::rw::RandomWalkConfig;
///
/// let config = RandomWalkConfig::default()
///     .with_population_size(20)
///     .with_max_generations(50);
/// assert_eq!(config.population_size, 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomWalkConfig {
    /// Number of individuals kept after every refill.
    pub population_size: usize,
    /// Number of truncate-and-refill generations.
    pub max_generations: usize,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for RandomWalkConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            max_generations: 100,
            seed: None,
        }
    }
}

impl RandomWalkConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of individuals that survive truncation: `floor(n / 2)`.
    pub fn survivors(&self) -> usize {
        self.population_size / 2
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        Ok(())
    }
}
