//! Frequency-counting and distribution-sampling utilities.
//!
//! Independent lab utilities alongside the π estimation core: frequency
//! counters over finite discrete outcome spaces (coin toss, die rolls)
//! and discrete/continuous distribution sampling (fixed three-class
//! split, empirical CDF, negative-exponential variates).
//!
//! All samplers are generic over `R: Rng`, so any seeded generator can
//! feed them — [`MtUniform`](crate::rng::MtUniform) or a `rand` standard
//! generator alike.

mod discrete;
mod error;
mod frequency;

pub use discrete::{discrete_counts, empirical_cdf, neg_exp};
pub use error::SamplingError;
pub use frequency::{coin_toss, dice_histogram, TossCounts};
