//! Frequency counters over finite discrete outcome spaces.

use rand::Rng;

use super::error::SamplingError;

/// Head/tail counts of a coin-toss run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TossCounts {
    /// Number of heads observed.
    pub heads: u64,
    /// Number of tails observed.
    pub tails: u64,
}

impl TossCounts {
    /// Total number of tosses.
    #[inline]
    pub fn trials(&self) -> u64 {
        self.heads + self.tails
    }
}

/// Tosses a fair coin `trials` times and counts both outcomes.
pub fn coin_toss<R: Rng>(rng: &mut R, trials: u64) -> TossCounts {
    let mut counts = TossCounts::default();
    for _ in 0..trials {
        if rng.gen_bool(0.5) {
            counts.heads += 1;
        } else {
            counts.tails += 1;
        }
    }
    counts
}

/// Rolls a fair `faces`-sided die `trials` times and returns the count
/// per face (index 0 is the first face).
///
/// # Errors
///
/// Returns [`SamplingError::ZeroFaces`] if `faces` is zero.
pub fn dice_histogram<R: Rng>(
    rng: &mut R,
    trials: u64,
    faces: usize,
) -> Result<Vec<u64>, SamplingError> {
    if faces == 0 {
        return Err(SamplingError::ZeroFaces);
    }

    let mut counts = vec![0u64; faces];
    for _ in 0..trials {
        counts[rng.gen_range(0..faces)] += 1;
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_toss_counts_sum_to_trials() {
        let mut rng = StdRng::seed_from_u64(42);
        let counts = coin_toss(&mut rng, 10_000);
        assert_eq!(counts.trials(), 10_000);
    }

    #[test]
    fn test_tosses_are_roughly_balanced() {
        let mut rng = StdRng::seed_from_u64(42);
        let counts = coin_toss(&mut rng, 100_000);

        let heads_ratio = counts.heads as f64 / counts.trials() as f64;
        assert!(
            (heads_ratio - 0.5).abs() < 0.01,
            "heads ratio {} too far from 1/2",
            heads_ratio
        );
    }

    #[test]
    fn test_zero_tosses() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(coin_toss(&mut rng, 0), TossCounts::default());
    }

    #[test]
    fn test_histogram_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let counts = dice_histogram(&mut rng, 60_000, 6).unwrap();

        assert_eq!(counts.len(), 6);
        assert_eq!(counts.iter().sum::<u64>(), 60_000);
    }

    #[test]
    fn test_faces_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(7);
        let counts = dice_histogram(&mut rng, 60_000, 6).unwrap();

        for &count in &counts {
            // Expectation is 10 000 per face; allow a wide margin.
            assert!(
                (count as i64 - 10_000).abs() < 500,
                "face count {} too far from uniform",
                count
            );
        }
    }

    #[test]
    fn test_zero_faces_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            dice_histogram(&mut rng, 100, 0).unwrap_err(),
            SamplingError::ZeroFaces
        );
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        assert_eq!(
            dice_histogram(&mut rng1, 1_000, 10).unwrap(),
            dice_histogram(&mut rng2, 1_000, 10).unwrap()
        );
    }
}
