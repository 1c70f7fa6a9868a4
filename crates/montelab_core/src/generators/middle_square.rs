//! Von Neumann's middle-square method.

/// Generates `rounds` successive values of the four-digit middle-square
/// recurrence: square the state, drop the last two digits, keep four.
///
/// The seed is reduced modulo 10 000 so the state always stays in the
/// four-digit domain. The method degenerates quickly (short cycles,
/// absorption at zero); it is kept for demonstration only.
///
/// # Examples
///
/// ```rust
/// use montelab_core::generators::middle_square;
///
/// assert_eq!(middle_square(3141, 3), vec![8658, 9609, 3328]);
/// ```
pub fn middle_square(seed: u64, rounds: usize) -> Vec<u64> {
    let mut state = seed % 10_000;
    let mut sequence = Vec::with_capacity(rounds);
    for _ in 0..rounds {
        state = (state * state / 100) % 10_000;
        sequence.push(state);
    }
    sequence
}
