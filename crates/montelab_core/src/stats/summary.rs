//! Sample-set summary statistics.
//!
//! Generic over `T: Float` so the helpers work for `f64` and any other
//! float-like numeric type without duplication.

use num_traits::Float;

/// Arithmetic mean of a sample set.
///
/// Returns `None` for an empty slice; there is no meaningful mean to
/// report and callers must decide how to handle the degenerate case.
///
/// # Examples
///
/// ```rust
/// use montelab_core::stats::mean;
///
/// assert_eq!(mean::<f64>(&[]), None);
/// let m = mean::<f64>(&[1.0, 2.0, 3.0]).unwrap();
/// assert!((m - 2.0).abs() < 1e-12);
/// ```
pub fn mean<T: Float>(samples: &[T]) -> Option<T> {
    if samples.is_empty() {
        return None;
    }
    let sum = samples.iter().fold(T::zero(), |acc, &x| acc + x);
    Some(sum / T::from(samples.len()).unwrap())
}

/// Sum of squared deviations of a sample set around `centre`.
///
/// This is the raw accumulation fed to a variance estimator; the caller
/// owns the choice of degrees-of-freedom divisor.
pub fn sum_squared_deviations<T: Float>(samples: &[T], centre: T) -> T {
    samples
        .iter()
        .fold(T::zero(), |acc, &x| acc + (x - centre).powi(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_empty_is_none() {
        assert_eq!(mean::<f64>(&[]), None);
    }

    #[test]
    fn test_mean_single_sample() {
        assert_relative_eq!(mean(&[3.25]).unwrap(), 3.25);
    }

    #[test]
    fn test_mean_of_known_set() {
        let samples = [3.12, 3.16, 3.14];
        assert_relative_eq!(mean(&samples).unwrap(), 3.14, epsilon = 1e-12);
    }

    #[test]
    fn test_squared_deviations_constant_samples_are_zero() {
        let samples = [2.5_f64; 7];
        assert_eq!(sum_squared_deviations(&samples, 2.5), 0.0);
    }

    #[test]
    fn test_squared_deviations_known_value() {
        // deviations -1, 0, +1 around 2.0
        let samples = [1.0, 2.0, 3.0];
        assert_relative_eq!(sum_squared_deviations(&samples, 2.0), 2.0);
    }

    #[test]
    fn test_generic_over_f32() {
        let samples = [1.0_f32, 3.0];
        assert_relative_eq!(mean(&samples).unwrap(), 2.0_f32);
        assert_relative_eq!(sum_squared_deviations(&samples, 2.0), 2.0_f32);
    }
}
