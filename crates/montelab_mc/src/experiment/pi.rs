//! Monte Carlo π estimation engine.
//!
//! Orchestrates the estimation pipeline: repeated unit-circle sampling,
//! variance estimation over the sample set, and the Student's-t
//! confidence radius for the final estimate.

use montelab_core::stats::{mean, sum_squared_deviations, t_critical_value};
use tracing::debug;

use super::config::{ExperimentConfig, VarianceConvention};
use super::error::ConfigError;
use crate::rng::MtUniform;

/// Mean and sample variance of a set of π estimates.
///
/// The mean is primarily diagnostic; the variance feeds the confidence
/// radius computation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarianceEstimate {
    /// Mean of the π estimates.
    pub mean: f64,
    /// Sample variance under the configured divisor convention.
    pub variance: f64,
}

/// Result of a full confidence-radius computation.
///
/// The radius is the half-width of the two-sided 95% confidence interval;
/// the experiment's result reads `mean ± radius`.
///
/// # Examples
///
/// ```rust
/// use montelab_mc::experiment::ConfidenceReport;
///
/// let report = ConfidenceReport {
///     mean: 3.14159,
///     variance: 1.2e-8,
///     t_critical: 2.776,
///     radius: 5.0e-6,
/// };
///
/// let (lo, hi) = report.interval();
/// assert!(lo < report.mean && report.mean < hi);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfidenceReport {
    /// Mean of the π estimates.
    pub mean: f64,
    /// Sample variance under the configured divisor convention.
    pub variance: f64,
    /// Student's t critical value for the configured experiment count.
    pub t_critical: f64,
    /// Confidence-interval half-width.
    pub radius: f64,
}

impl ConfidenceReport {
    /// Returns the two-sided confidence interval `(mean - radius, mean + radius)`.
    #[inline]
    pub fn interval(&self) -> (f64, f64) {
        (self.mean - self.radius, self.mean + self.radius)
    }
}

/// Monte Carlo π estimation experiment.
///
/// Owns the configuration and the seeded uniform stream. All operations
/// consume the stream in strict sequence: one `estimate_pi` call draws
/// `2 × n_points` values, and successive calls continue where the previous
/// one stopped. Use [`PiExperiment::reset`] to restart the stream from the
/// configured seed.
///
/// # Examples
///
/// ```rust
/// use montelab_mc::experiment::{ExperimentConfig, PiExperiment};
///
/// let config = ExperimentConfig::builder()
///     .n_experiments(5)
///     .n_points(100_000)
///     .build()
///     .unwrap();
///
/// let mut experiment = PiExperiment::new(config).unwrap();
/// let report = experiment.confidence_radius();
///
/// println!("pi = {:.5} +/- {:.5}", report.mean, report.radius);
/// ```
pub struct PiExperiment {
    config: ExperimentConfig,
    rng: MtUniform,
}

impl PiExperiment {
    /// Creates a new experiment with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: ExperimentConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = MtUniform::from_seed_words(config.seed_words());
        Ok(Self { config, rng })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Restarts the uniform stream from the configured seed key.
    pub fn reset(&mut self) {
        self.rng = MtUniform::from_seed_words(self.config.seed_words());
    }

    /// Draws one Monte Carlo sample of π.
    ///
    /// Samples `n_points` coordinate pairs in the unit square and counts
    /// the pairs falling strictly inside the inscribed quarter circle;
    /// the estimate is `4 × inside / n_points`, always in [0, 4].
    pub fn estimate_pi(&mut self) -> f64 {
        let n_points = self.config.n_points();
        let mut inside: u64 = 0;

        for _ in 0..n_points {
            let x = self.rng.next_uniform();
            let y = self.rng.next_uniform();
            if x * x + y * y < 1.0 {
                inside += 1;
            }
        }

        4.0 * inside as f64 / n_points as f64
    }

    /// Estimates the mean and sample variance of the π estimator.
    ///
    /// Runs [`PiExperiment::estimate_pi`] exactly `n_experiments` times
    /// on the shared stream, then aggregates the sample set. The divisor
    /// for the variance follows the configured
    /// [`VarianceConvention`](super::VarianceConvention).
    pub fn estimate_variance(&mut self) -> VarianceEstimate {
        let n_experiments = self.config.n_experiments();

        let samples: Vec<f64> = (0..n_experiments)
            .map(|run| {
                let sample = self.estimate_pi();
                debug!("run {}: pi estimate {:.5}", run + 1, sample);
                sample
            })
            .collect();

        // The configuration guarantees at least one sample.
        let mean = mean(&samples).unwrap_or(0.0);
        let squared_deviations = sum_squared_deviations(&samples, mean);
        debug!(
            "sample mean {:.5}, squared deviations {:.7}",
            mean, squared_deviations
        );

        let divisor = match self.config.convention() {
            VarianceConvention::PointCount => self.config.n_points() - 1,
            VarianceConvention::ExperimentCount => n_experiments - 1,
        };

        VarianceEstimate {
            mean,
            variance: squared_deviations / divisor as f64,
        }
    }

    /// Computes the confidence radius for the π estimate.
    ///
    /// Combines the variance estimate with the Student's t critical value
    /// for the configured experiment count:
    /// `radius = t × sqrt(variance / n_points)`.
    pub fn confidence_radius(&mut self) -> ConfidenceReport {
        let estimate = self.estimate_variance();
        let t_critical = t_critical_value(self.config.n_experiments());
        let radius = t_critical * (estimate.variance / self.config.n_points() as f64).sqrt();

        ConfidenceReport {
            mean: estimate.mean,
            variance: estimate.variance,
            t_critical,
            radius,
        }
    }
}
