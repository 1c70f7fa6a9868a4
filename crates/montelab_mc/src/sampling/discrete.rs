//! Discrete and continuous distribution sampling.

use rand::Rng;
use rand_distr::{Distribution, Exp};

use super::error::SamplingError;

/// Upper bound of the first class.
const CLASS_A_THRESHOLD: f64 = 0.5;
/// Upper bound of the second class.
const CLASS_B_THRESHOLD: f64 = 0.65;

/// Samples the fixed three-class discrete distribution `trials` times and
/// returns the per-class counts.
///
/// A uniform draw `u` lands in class 1 for `u <= 0.5`, class 2 for
/// `u <= 0.65` and class 3 otherwise, so the class probabilities are
/// 0.50 / 0.15 / 0.35.
pub fn discrete_counts<R: Rng>(rng: &mut R, trials: u64) -> [u64; 3] {
    let mut counts = [0u64; 3];
    for _ in 0..trials {
        let u: f64 = rng.gen();
        if u <= CLASS_A_THRESHOLD {
            counts[0] += 1;
        } else if u <= CLASS_B_THRESHOLD {
            counts[1] += 1;
        } else {
            counts[2] += 1;
        }
    }
    counts
}

/// Builds the empirical cumulative distribution over class counts.
///
/// Each entry is the cumulative share of observations up to and including
/// that class; the last entry is always 1.
///
/// # Errors
///
/// Returns [`SamplingError::EmptyObservations`] when the counts sum to
/// zero.
pub fn empirical_cdf(counts: &[u64]) -> Result<Vec<f64>, SamplingError> {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return Err(SamplingError::EmptyObservations);
    }

    let mut cumulative = 0u64;
    Ok(counts
        .iter()
        .map(|&count| {
            cumulative += count;
            cumulative as f64 / total as f64
        })
        .collect())
}

/// Draws one negative-exponential variate with the given mean.
///
/// # Errors
///
/// Returns [`SamplingError::InvalidExponentialMean`] unless the mean is
/// positive and finite.
pub fn neg_exp<R: Rng>(rng: &mut R, mean: f64) -> Result<f64, SamplingError> {
    if !mean.is_finite() || mean <= 0.0 {
        return Err(SamplingError::InvalidExponentialMean(mean));
    }

    let distribution =
        Exp::new(1.0 / mean).map_err(|_| SamplingError::InvalidExponentialMean(mean))?;
    Ok(distribution.sample(rng))
}
