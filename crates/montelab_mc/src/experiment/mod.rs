//! The π estimation experiment.
//!
//! One [`PiExperiment`] owns an [`ExperimentConfig`] and a seeded
//! [`MtUniform`](crate::rng::MtUniform) stream and orchestrates the three
//! stages of the pipeline:
//!
//! 1. [`PiExperiment::estimate_pi`] — one Monte Carlo sample of π from
//!    `n_points` coordinate pairs
//! 2. [`PiExperiment::estimate_variance`] — `n_experiments` samples
//!    aggregated into mean and sample variance
//! 3. [`PiExperiment::confidence_radius`] — variance combined with the
//!    Student's t critical value into a confidence-interval half-width
//!
//! All stages consume the same uniform stream in strict sequence; nothing
//! reseeds between stages.

pub mod config;
pub mod error;
pub mod pi;

// Re-exports for convenient access
pub use config::{
    ExperimentConfig, ExperimentConfigBuilder, VarianceConvention, DEFAULT_SEED_WORDS,
    MAX_EXPERIMENTS, MAX_POINTS,
};
pub use error::ConfigError;
pub use pi::{ConfidenceReport, PiExperiment, VarianceEstimate};
