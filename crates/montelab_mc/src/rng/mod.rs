//! Uniform random number generation for Monte Carlo estimation.
//!
//! The estimation pipeline needs a long-period generator with good
//! dimensional equidistribution; a naive linear congruential generator is
//! demonstrably too weak for Monte Carlo work. This module wraps the
//! MT19937 Mersenne Twister behind a small seeded type:
//!
//! - **Reproducibility**: the generator is always constructed from an
//!   explicit 4-word seed key; the same key yields the same stream
//! - **Explicit state**: the generator is an owned value threaded through
//!   the experiment, never a hidden module-level singleton
//! - **Efficiency**: zero-allocation batch generation via `&mut [f64]`
//!
//! ## Usage Example
//!
//! ```rust
//! use montelab_mc::rng::MtUniform;
//!
//! let mut rng = MtUniform::from_seed_words([0x123, 0x234, 0x345, 0x456]);
//!
//! // Uniform values in [0, 1)
//! let u = rng.next_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! // Batch generation into a pre-allocated buffer
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_uniform(&mut buffer);
//! ```

mod uniform;

pub use uniform::{MtUniform, SEED_WORDS};
