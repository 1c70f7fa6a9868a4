//! Error types for experiment configuration.

use thiserror::Error;

/// Configuration error for the π estimation experiment.
///
/// These errors occur at build time when invalid parameters are provided;
/// a validated configuration cannot fail later in the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Experiment count outside the valid range.
    #[error("invalid experiment count {0}: must be in range [1, 10_000]")]
    InvalidExperimentCount(usize),

    /// Point count outside the valid range.
    #[error("invalid point count {0}: must be in range [1, 1_000_000_000]")]
    InvalidPointCount(usize),

    /// Seed key had the wrong number of 32-bit words.
    #[error("invalid seed length: got {got} words, need exactly {need}")]
    InvalidSeedLength {
        /// Number of words provided.
        got: usize,
        /// Number of words required.
        need: usize,
    },

    /// The experiment-count variance convention needs at least two samples.
    #[error("experiment-count variance requires at least {need} experiments, got {got}")]
    InsufficientExperiments {
        /// Number of experiments configured.
        got: usize,
        /// Minimum required for a defined variance.
        need: usize,
    },

    /// Invalid parameter value with name and description.
    #[error("invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidExperimentCount(0);
        assert!(err.to_string().contains("invalid experiment count 0"));

        let err = ConfigError::InvalidPointCount(0);
        assert!(err.to_string().contains("invalid point count 0"));

        let err = ConfigError::InvalidSeedLength { got: 3, need: 4 };
        assert!(err.to_string().contains("got 3 words"));

        let err = ConfigError::InvalidParameter {
            name: "n_points",
            value: "must be specified".to_string(),
        };
        assert!(err.to_string().contains("n_points"));
    }
}
