//! Error types for sampling utilities.

use thiserror::Error;

/// Errors raised by the sampling utilities.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplingError {
    /// A die must have at least one face.
    #[error("a die needs at least one face")]
    ZeroFaces,

    /// An empirical distribution needs at least one observation.
    #[error("cannot build a distribution from zero observations")]
    EmptyObservations,

    /// The exponential mean must be a positive finite value.
    #[error("exponential mean must be positive and finite, got {0}")]
    InvalidExponentialMean(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SamplingError::ZeroFaces.to_string(),
            "a die needs at least one face"
        );
        assert!(SamplingError::InvalidExponentialMean(-1.0)
            .to_string()
            .contains("-1"));
    }
}
