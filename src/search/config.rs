//! Outer search configuration.

use crate::error::ConfigError;
use crate::sa::AnnealingConfig;

/// Configuration for [`PickerCountSearch`](super::PickerCountSearch).
///
/// # Examples
///
/// ```
/// use u_picking::sa::AnnealingConfig;
/// use u_picking::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_annealing(AnnealingConfig::default().with_stagnation_threshold(20))
///     .with_max_pickers(4)
///     .with_seed(42);
/// assert_eq!(config.max_pickers, Some(4));
/// assert_eq!(config.annealing.seed, Some(42));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Parameters shared by every annealing run.
    pub annealing: AnnealingConfig,

    /// Largest picker count to try; the instance's picker count if `None`.
    pub max_pickers: Option<usize>,
}

impl SearchConfig {
    pub fn with_annealing(mut self, annealing: AnnealingConfig) -> Self {
        self.annealing = annealing;
        self
    }

    pub fn with_max_pickers(mut self, max_pickers: usize) -> Self {
        self.max_pickers = Some(max_pickers);
        self
    }

    /// Seeds the single random source threaded through the whole search.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.annealing.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.annealing.validate()?;
        if self.max_pickers == Some(0) {
            return Err(ConfigError::ZeroPickers);
        }
        Ok(())
    }

    /// Resolves the picker upper bound against the instance's picker count.
    pub fn resolve_max_pickers(&self, instance_pickers: usize) -> usize {
        self.max_pickers.unwrap_or(instance_pickers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_instance_pickers() {
        let config = SearchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.resolve_max_pickers(7), 7);
    }

    #[test]
    fn test_explicit_max_pickers() {
        let config = SearchConfig::default().with_max_pickers(3);
        assert_eq!(config.resolve_max_pickers(7), 3);
    }

    #[test]
    fn test_zero_max_pickers_rejected() {
        let config = SearchConfig::default().with_max_pickers(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroPickers));
    }

    #[test]
    fn test_invalid_annealing_rejected() {
        let config =
            SearchConfig::default().with_annealing(AnnealingConfig::default().with_alpha(2.0));
        assert_eq!(config.validate(), Err(ConfigError::Alpha(2.0)));
    }
}
