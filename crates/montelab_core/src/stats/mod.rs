//! Summary statistics and the Student's t critical-value table.
//!
//! These are the read-only statistical building blocks used by the
//! simulation layer: sample mean and squared-deviation accumulation over a
//! sample set, and the tiered lookup that maps an experiment count to a
//! two-tailed 95% Student's t critical value.

mod summary;
mod t_table;

pub use summary::{mean, sum_squared_deviations};
pub use t_table::{t_critical_value, T_VALUES};
