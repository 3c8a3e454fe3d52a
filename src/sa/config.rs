//! Annealing configuration.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::ConfigError;

/// A temperature level counts towards stagnation when fewer than this
/// fraction of its trials were accepted.
pub const STAGNATION_ACCEPTANCE_RATIO: f64 = 0.01;

/// Configuration for one simulated-annealing run at a fixed picker count.
///
/// Cooling is geometric: `T_{k+1} = alpha * T_k`.
///
/// # Examples
///
/// ```
/// use u_picking::sa::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_initial_temperature(25.0)
///     .with_alpha(0.9)
///     .with_iterations_per_temperature(50)
///     .with_stagnation_threshold(2)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealingConfig {
    /// Initial temperature `T0`.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1).
    pub alpha: f64,

    /// Neighbor trials at each temperature level.
    pub iterations_per_temperature: usize,

    /// Consecutive stagnant temperature levels that end the run.
    pub stagnation_threshold: usize,

    /// The run ends once the temperature drops below this.
    pub min_temperature: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            alpha: 0.95,
            iterations_per_temperature: 100,
            stagnation_threshold: 30,
            min_temperature: 0.01,
            seed: None,
        }
    }
}

impl AnnealingConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_stagnation_threshold(mut self, n: usize) -> Self {
        self.stagnation_threshold = n;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_temperature.is_nan() || self.initial_temperature <= 0.0 {
            return Err(ConfigError::InitialTemperature(self.initial_temperature));
        }
        if self.alpha.is_nan() || self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(ConfigError::Alpha(self.alpha));
        }
        if self.iterations_per_temperature == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if self.min_temperature.is_nan() || self.min_temperature <= 0.0 {
            return Err(ConfigError::MinTemperature(self.min_temperature));
        }
        Ok(())
    }

    /// Creates the random source for a run, seeded if a seed is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        }
    }
}
