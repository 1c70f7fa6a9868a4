//! Distribution command implementation
//!
//! Samples the fixed three-class discrete distribution, derives the
//! empirical CDF over the class counts, then checks the
//! negative-exponential sampler against its target mean.

use tracing::info;

use montelab_mc::rng::MtUniform;
use montelab_mc::sampling::{discrete_counts, empirical_cdf, neg_exp};

use crate::{CliError, Result};

/// Seed key of the distribution lab run.
const DISTRIBUTION_SEED: [u32; 4] = [0x127, 0xE54, 0x94A5, 0x4F6];

/// Run the distribution command
pub fn run(trials: u64, mean: f64) -> Result<()> {
    if trials == 0 {
        return Err(CliError::InvalidArgument(
            "trials must be positive".to_string(),
        ));
    }

    info!("Sampling the three-class distribution {} times", trials);

    let mut rng = MtUniform::from_seed_words(DISTRIBUTION_SEED);
    let counts = discrete_counts(&mut rng, trials);

    for (class, count) in counts.iter().enumerate() {
        println!(
            "class {} probability            : {:.2}%",
            class + 1,
            *count as f64 / trials as f64 * 100.0
        );
    }

    let cdf = empirical_cdf(&counts)?;
    for (class, probability) in cdf.iter().enumerate() {
        println!(
            "class {} cumulative probability : {:.2}%",
            class + 1,
            probability * 100.0
        );
    }

    let mut sum = 0.0;
    for _ in 0..trials {
        sum += neg_exp(&mut rng, mean)?;
    }
    println!(
        "negative-exponential sample mean: {:.2} (target {:.2})",
        sum / trials as f64,
        mean
    );

    Ok(())
}
