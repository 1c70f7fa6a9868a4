//! Error types for generator construction.

use thiserror::Error;

/// Errors raised when constructing a classic generator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// The linear congruential modulus was zero.
    #[error("modulus must be non-zero")]
    ZeroModulus,

    /// A parameter was not reduced modulo the generator's modulus.
    #[error("parameter '{name}' ({value}) must be below the modulus {modulus}")]
    ParameterOutOfRange {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: u64,
        /// The configured modulus.
        modulus: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            GeneratorError::ZeroModulus.to_string(),
            "modulus must be non-zero"
        );

        let err = GeneratorError::ParameterOutOfRange {
            name: "seed",
            value: 25,
            modulus: 23,
        };
        assert!(err.to_string().contains("seed"));
        assert!(err.to_string().contains("23"));
    }
}
