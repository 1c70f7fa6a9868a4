//! Student's t critical values for confidence-interval construction.
//!
//! The table holds the standard two-tailed 95% critical values for
//! degrees of freedom 1..=30, then 40, 80, 120 and the normal limit.
//! It is immutable process-wide data; the lookup maps an experiment count
//! onto a table entry through a fixed tiering policy.

/// Two-tailed 95% Student's t critical values.
///
/// Entries 0..30 correspond to degrees of freedom 1..=30; the tail entries
/// are the df = 40, 80, 120 and infinity rows of the published table.
pub const T_VALUES: [f64; 34] = [
    12.706, // df = 1
    4.303,  // df = 2
    3.182,  // df = 3
    2.776,  // df = 4
    2.571,  // df = 5
    2.447,  // df = 6
    2.365,  // df = 7
    2.308,  // df = 8
    2.262,  // df = 9
    2.228,  // df = 10
    2.201,  // df = 11
    2.179,  // df = 12
    2.160,  // df = 13
    2.145,  // df = 14
    2.131,  // df = 15
    2.120,  // df = 16
    2.110,  // df = 17
    2.101,  // df = 18
    2.093,  // df = 19
    2.086,  // df = 20
    2.080,  // df = 21
    2.074,  // df = 22
    2.069,  // df = 23
    2.064,  // df = 24
    2.060,  // df = 25
    2.056,  // df = 26
    2.052,  // df = 27
    2.048,  // df = 28
    2.045,  // df = 29
    2.042,  // df = 30
    2.021,  // df = 40
    2.000,  // df = 80
    1.980,  // df = 120
    1.960,  // df = infinity
];

/// Returns the two-tailed 95% Student's t critical value for a run of
/// `n_exp` experiments.
///
/// Tiering policy, first match wins:
/// - `1..=30`: the entry for exactly that degrees-of-freedom row, so the
///   overlap at `n_exp = 30` resolves to the df = 30 entry (2.042)
/// - `31..=39`: the df = 30 entry (2.042)
/// - `40..=79`: the df = 40 entry (2.021)
/// - `80..=119`: the df = 80 entry (2.000)
/// - everything else, including `0` and `n_exp >= 120`: the infinity
///   entry (1.960)
///
/// # Examples
///
/// ```rust
/// use montelab_core::stats::t_critical_value;
///
/// assert_eq!(t_critical_value(1), 12.706);
/// assert_eq!(t_critical_value(35), 2.042);
/// assert_eq!(t_critical_value(200), 1.960);
/// ```
#[inline]
pub fn t_critical_value(n_exp: usize) -> f64 {
    match n_exp {
        1..=30 => T_VALUES[n_exp - 1],
        31..=39 => T_VALUES[29],
        40..=79 => T_VALUES[30],
        80..=119 => T_VALUES[31],
        _ => T_VALUES[33],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_df_tier() {
        assert_eq!(t_critical_value(1), 12.706);
        assert_eq!(t_critical_value(2), 4.303);
        assert_eq!(t_critical_value(5), 2.571);
        assert_eq!(t_critical_value(29), 2.045);
        assert_eq!(t_critical_value(30), 2.042);
    }

    #[test]
    fn test_tier_boundaries() {
        // 30 < n < 40 pins to the df = 30 entry
        assert_eq!(t_critical_value(31), 2.042);
        assert_eq!(t_critical_value(35), 2.042);
        assert_eq!(t_critical_value(39), 2.042);

        // 40 <= n < 80 pins to the df = 40 entry
        assert_eq!(t_critical_value(40), 2.021);
        assert_eq!(t_critical_value(79), 2.021);

        // 80 <= n < 120 pins to the df = 80 entry
        assert_eq!(t_critical_value(80), 2.000);
        assert_eq!(t_critical_value(119), 2.000);

        // n >= 120 falls through to the normal limit
        assert_eq!(t_critical_value(120), 1.960);
        assert_eq!(t_critical_value(200), 1.960);
    }

    #[test]
    fn test_zero_experiments_falls_through() {
        assert_eq!(t_critical_value(0), 1.960);
    }

    #[test]
    fn test_table_is_decreasing_over_df() {
        for window in T_VALUES.windows(2) {
            assert!(
                window[0] >= window[1],
                "critical values must not increase with df: {} < {}",
                window[0],
                window[1]
            );
        }
    }

    proptest! {
        /// Every lookup lands inside the table's value range.
        #[test]
        fn prop_lookup_within_table_range(n in any::<usize>()) {
            let t = t_critical_value(n);
            prop_assert!((1.960..=12.706).contains(&t));
        }

        /// The lookup never selects a value below the normal limit.
        #[test]
        fn prop_large_n_reaches_normal_limit(n in 120usize..1_000_000) {
            prop_assert_eq!(t_critical_value(n), 1.960);
        }
    }
}
