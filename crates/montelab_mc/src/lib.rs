//! # montelab_mc: Monte Carlo π Estimation Engine
//!
//! ## Layer 2 (Simulation) Role
//!
//! montelab_mc provides the stochastic simulation pipeline on top of the
//! montelab_core foundation:
//! - Seeded Mersenne-Twister uniform generation ([`rng`])
//! - The π estimation experiment: sampling, variance estimation and
//!   confidence-radius computation ([`experiment`])
//! - Frequency-counting and distribution-sampling utilities ([`sampling`])
//!
//! ## Pipeline
//!
//! ```text
//! PiExperiment
//! ├── ExperimentConfig   (experiment parameters, seed words)
//! ├── MtUniform          (MT19937 uniform stream)
//! └── Orchestration
//!     ├── estimate_pi()        one sample over n_points draws
//!     ├── estimate_variance()  n_experiments samples -> mean, variance
//!     └── confidence_radius()  variance + t critical value -> radius
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use montelab_mc::experiment::{ExperimentConfig, PiExperiment};
//!
//! let config = ExperimentConfig::builder()
//!     .n_experiments(5)
//!     .n_points(10_000)
//!     .build()
//!     .unwrap();
//!
//! let mut experiment = PiExperiment::new(config).unwrap();
//! let report = experiment.confidence_radius();
//!
//! println!("pi = {:.5} +/- {:.5}", report.mean, report.radius);
//! ```
//!
//! ## Reproducibility
//!
//! Every generator in this crate is explicitly seeded; the same seed words
//! always produce the same stream, so independent experiments (including
//! experiments running in parallel tests) cannot interfere with each other.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod experiment;
pub mod rng;
pub mod sampling;

// Re-export commonly used items for convenience
pub use experiment::{
    ConfidenceReport, ConfigError, ExperimentConfig, PiExperiment, VarianceConvention,
    VarianceEstimate,
};
pub use rng::MtUniform;
