//! # montelab_core: Statistical Foundation for Monte Carlo Estimation
//!
//! ## Layer 1 (Foundation) Role
//!
//! montelab_core is the bottom layer of the workspace, providing:
//! - Student's t critical-value table and lookup (`stats::t_table`)
//! - Summary statistics over sample sets (`stats::summary`)
//! - Classic teaching generators: middle-square, linear congruential,
//!   4-bit shift register (`generators`)
//! - Error types for generator construction (`generators::GeneratorError`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other montelab_* crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//!
//! ## Usage Examples
//!
//! ```rust
//! use montelab_core::stats::{mean, t_critical_value};
//!
//! // Critical value for a 5-experiment run (df = 5 entry)
//! let t = t_critical_value(5);
//! assert!((t - 2.571).abs() < 1e-12);
//!
//! // Summary statistics
//! let samples = [3.14f64, 3.15, 3.13];
//! let m = mean(&samples).unwrap();
//! assert!((m - 3.14).abs() < 1e-10);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod generators;
pub mod stats;
