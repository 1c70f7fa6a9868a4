//! Estimate-pi command implementation
//!
//! Runs the Monte Carlo π estimation pipeline and reports the mean,
//! variance estimate and Student's-t confidence radius.

use tracing::info;

use montelab_mc::experiment::{ExperimentConfig, PiExperiment, VarianceConvention};

use crate::{CliError, Result};

/// Run the estimate-pi command
pub fn run(
    experiments: usize,
    points: usize,
    seed: Option<&[u32]>,
    bessel: bool,
    format: &str,
) -> Result<()> {
    info!("Starting pi estimation...");
    info!("  Experiments: {}", experiments);
    info!("  Points per experiment: {}", points);

    let mut builder = ExperimentConfig::builder()
        .n_experiments(experiments)
        .n_points(points);
    if let Some(words) = seed {
        builder = builder.seed_words(words);
    }
    if bessel {
        builder = builder.convention(VarianceConvention::ExperimentCount);
    }
    let config = builder.build()?;

    let mut experiment = PiExperiment::new(config)?;
    let report = experiment.confidence_radius();

    match format {
        "text" => {
            let (lo, hi) = report.interval();
            println!("mean pi             : {:.5}", report.mean);
            println!("variance estimate   : {:.5}", report.variance);
            println!("t critical value    : {:.3}", report.t_critical);
            println!("confidence radius   : {:.5}", report.radius);
            println!("confidence interval : [{:.5}, {:.5}]", lo, hi);
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "unknown format: {}. Supported: text, json",
                other
            )));
        }
    }

    info!("Estimation complete");
    Ok(())
}
