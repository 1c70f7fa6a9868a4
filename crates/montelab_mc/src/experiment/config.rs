//! Experiment configuration.
//!
//! Configuration types and builder for the π estimation experiment, with
//! validation at build time.

use super::error::ConfigError;
use crate::rng::SEED_WORDS;

/// Maximum number of repeated experiments allowed.
pub const MAX_EXPERIMENTS: usize = 10_000;

/// Maximum number of sampled points per experiment allowed.
pub const MAX_POINTS: usize = 1_000_000_000;

/// Seed key of the classic lab experiment.
pub const DEFAULT_SEED_WORDS: [u32; SEED_WORDS] = [0x123, 0x234, 0x345, 0x456];

/// Degrees-of-freedom divisor used by the variance estimator.
///
/// The historical lab program divides the sum of squared deviations by
/// `n_points - 1`, conflating the per-experiment point count with the
/// number of experiments. That behaviour is preserved as the default;
/// the statistically conventional Bessel-corrected estimator is an
/// explicit opt-in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VarianceConvention {
    /// Divide by `n_points - 1`, the historical lab behaviour.
    ///
    /// Keeps a single-experiment run finite (zero deviations over a
    /// non-zero divisor). With `n_points = 1` the divisor is zero and the
    /// variance is non-finite whenever the samples disagree.
    #[default]
    PointCount,

    /// Divide by `n_experiments - 1`, the conventional sample-variance
    /// estimator over the experiment outcomes.
    ///
    /// Requires `n_experiments >= 2` at validation time.
    ExperimentCount,
}

/// π estimation experiment configuration.
///
/// Immutable parameters for one experiment run. Use
/// [`ExperimentConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use montelab_mc::experiment::{ExperimentConfig, VarianceConvention};
///
/// let config = ExperimentConfig::builder()
///     .n_experiments(5)
///     .n_points(10_000_000)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_experiments(), 5);
/// assert_eq!(config.convention(), VarianceConvention::PointCount);
/// ```
#[derive(Clone, Debug)]
pub struct ExperimentConfig {
    /// Number of repeated π estimations.
    n_experiments: usize,
    /// Number of coordinate pairs per estimation.
    n_points: usize,
    /// Seed key for the uniform generator.
    seed_words: [u32; SEED_WORDS],
    /// Variance divisor convention.
    convention: VarianceConvention,
}

impl ExperimentConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> ExperimentConfigBuilder {
        ExperimentConfigBuilder::default()
    }

    /// Returns the number of repeated experiments.
    #[inline]
    pub fn n_experiments(&self) -> usize {
        self.n_experiments
    }

    /// Returns the number of sampled points per experiment.
    #[inline]
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Returns the seed key for the uniform generator.
    #[inline]
    pub fn seed_words(&self) -> [u32; SEED_WORDS] {
        self.seed_words
    }

    /// Returns the variance divisor convention.
    #[inline]
    pub fn convention(&self) -> VarianceConvention {
        self.convention
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_experiments` is 0 or greater than [`MAX_EXPERIMENTS`]
    /// - `n_points` is 0 or greater than [`MAX_POINTS`]
    /// - the experiment-count convention is combined with fewer than two
    ///   experiments
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_experiments == 0 || self.n_experiments > MAX_EXPERIMENTS {
            return Err(ConfigError::InvalidExperimentCount(self.n_experiments));
        }
        if self.n_points == 0 || self.n_points > MAX_POINTS {
            return Err(ConfigError::InvalidPointCount(self.n_points));
        }
        if self.convention == VarianceConvention::ExperimentCount && self.n_experiments < 2 {
            return Err(ConfigError::InsufficientExperiments {
                got: self.n_experiments,
                need: 2,
            });
        }
        Ok(())
    }
}

/// Builder for [`ExperimentConfig`].
///
/// # Examples
///
/// ```rust
/// use montelab_mc::experiment::ExperimentConfig;
///
/// let config = ExperimentConfig::builder()
///     .n_experiments(10)
///     .n_points(1_000_000)
///     .seed_words(&[1, 2, 3, 4])
///     .build()
///     .expect("valid config");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ExperimentConfigBuilder {
    n_experiments: Option<usize>,
    n_points: Option<usize>,
    seed_words: Option<Vec<u32>>,
    convention: VarianceConvention,
}

impl ExperimentConfigBuilder {
    /// Sets the number of repeated experiments.
    #[inline]
    pub fn n_experiments(mut self, n_experiments: usize) -> Self {
        self.n_experiments = Some(n_experiments);
        self
    }

    /// Sets the number of sampled points per experiment.
    #[inline]
    pub fn n_points(mut self, n_points: usize) -> Self {
        self.n_points = Some(n_points);
        self
    }

    /// Sets the seed key from a dynamic slice.
    ///
    /// The length is validated at build time; exactly
    /// [`SEED_WORDS`](crate::rng::SEED_WORDS) words are required. When no
    /// key is given, [`DEFAULT_SEED_WORDS`] is used.
    #[inline]
    pub fn seed_words(mut self, words: &[u32]) -> Self {
        self.seed_words = Some(words.to_vec());
        self
    }

    /// Sets the variance divisor convention.
    #[inline]
    pub fn convention(mut self, convention: VarianceConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required parameter is missing, the seed
    /// key has the wrong length, or validation fails.
    pub fn build(self) -> Result<ExperimentConfig, ConfigError> {
        let n_experiments = self.n_experiments.ok_or(ConfigError::InvalidParameter {
            name: "n_experiments",
            value: "must be specified".to_string(),
        })?;

        let n_points = self.n_points.ok_or(ConfigError::InvalidParameter {
            name: "n_points",
            value: "must be specified".to_string(),
        })?;

        let seed_words = match self.seed_words {
            Some(words) => {
                <[u32; SEED_WORDS]>::try_from(words.as_slice()).map_err(|_| {
                    ConfigError::InvalidSeedLength {
                        got: words.len(),
                        need: SEED_WORDS,
                    }
                })?
            }
            None => DEFAULT_SEED_WORDS,
        };

        let config = ExperimentConfig {
            n_experiments,
            n_points,
            seed_words,
            convention: self.convention,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_valid() {
        let config = ExperimentConfig::builder()
            .n_experiments(5)
            .n_points(10_000_000)
            .build()
            .unwrap();

        assert_eq!(config.n_experiments(), 5);
        assert_eq!(config.n_points(), 10_000_000);
        assert_eq!(config.seed_words(), DEFAULT_SEED_WORDS);
        assert_eq!(config.convention(), VarianceConvention::PointCount);
    }

    #[test]
    fn test_builder_with_seed_words() {
        let config = ExperimentConfig::builder()
            .n_experiments(2)
            .n_points(100)
            .seed_words(&[9, 8, 7, 6])
            .build()
            .unwrap();

        assert_eq!(config.seed_words(), [9, 8, 7, 6]);
    }

    #[test]
    fn test_builder_with_convention() {
        let config = ExperimentConfig::builder()
            .n_experiments(2)
            .n_points(100)
            .convention(VarianceConvention::ExperimentCount)
            .build()
            .unwrap();

        assert_eq!(config.convention(), VarianceConvention::ExperimentCount);
    }

    #[test]
    fn test_zero_experiments_rejected() {
        let result = ExperimentConfig::builder()
            .n_experiments(0)
            .n_points(100)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidExperimentCount(0))));
    }

    #[test]
    fn test_too_many_experiments_rejected() {
        let result = ExperimentConfig::builder()
            .n_experiments(MAX_EXPERIMENTS + 1)
            .n_points(100)
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidExperimentCount(_))
        ));
    }

    #[test]
    fn test_zero_points_rejected() {
        let result = ExperimentConfig::builder()
            .n_experiments(5)
            .n_points(0)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidPointCount(0))));
    }

    #[test]
    fn test_single_experiment_allowed_by_default() {
        // Degenerate but defined: the point-count divisor keeps a
        // one-experiment variance finite.
        let config = ExperimentConfig::builder()
            .n_experiments(1)
            .n_points(100)
            .build();

        assert!(config.is_ok());
    }

    #[test]
    fn test_experiment_count_convention_needs_two_runs() {
        let result = ExperimentConfig::builder()
            .n_experiments(1)
            .n_points(100)
            .convention(VarianceConvention::ExperimentCount)
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::InsufficientExperiments { got: 1, need: 2 })
        ));
    }

    #[test]
    fn test_wrong_seed_length_rejected() {
        let result = ExperimentConfig::builder()
            .n_experiments(5)
            .n_points(100)
            .seed_words(&[1, 2, 3])
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidSeedLength { got: 3, need: 4 })
        ));
    }

    #[test]
    fn test_missing_parameters_rejected() {
        let result = ExperimentConfig::builder().n_points(100).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "n_experiments",
                ..
            })
        ));

        let result = ExperimentConfig::builder().n_experiments(5).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "n_points",
                ..
            })
        ));
    }

    #[test]
    fn test_convention_default() {
        assert_eq!(VarianceConvention::default(), VarianceConvention::PointCount);
    }
}
