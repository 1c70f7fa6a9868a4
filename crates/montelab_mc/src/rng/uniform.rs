//! Seeded MT19937 uniform generator.

use rand::{Error, Rng, RngCore};
use rand_mt::Mt;

/// Number of 32-bit words in a seed key.
pub const SEED_WORDS: usize = 4;

/// Mersenne-Twister uniform generator with an explicit 4-word seed key.
///
/// Wraps [`rand_mt::Mt`] (MT19937), initialised through the MT19937
/// key-array seeding procedure, so a given key reproduces the canonical
/// mt19937ar output stream.
///
/// The state advances on every draw and is never reset behind the
/// caller's back; use [`MtUniform::from_seed_words`] with the stored
/// [`MtUniform::seed_words`] to restart a stream.
///
/// # Examples
///
/// ```rust
/// use montelab_mc::rng::MtUniform;
///
/// let mut rng1 = MtUniform::from_seed_words([1, 2, 3, 4]);
/// let mut rng2 = MtUniform::from_seed_words([1, 2, 3, 4]);
///
/// // Same key, same stream
/// assert_eq!(rng1.next_uniform(), rng2.next_uniform());
/// ```
pub struct MtUniform {
    /// The underlying MT19937 engine.
    inner: Mt,
    /// The seed key used for initialisation, kept for reproducibility
    /// tracking.
    seed_words: [u32; SEED_WORDS],
}

impl MtUniform {
    /// Creates a generator initialised from the given seed key.
    ///
    /// The fixed-size array makes a wrong-length seed unrepresentable;
    /// dynamic seed input is validated upstream by the experiment
    /// configuration.
    #[inline]
    pub fn from_seed_words(seed_words: [u32; SEED_WORDS]) -> Self {
        Self {
            inner: Mt::new_with_key(seed_words.iter().copied()),
            seed_words,
        }
    }

    /// Returns the seed key used for initialisation.
    #[inline]
    pub fn seed_words(&self) -> [u32; SEED_WORDS] {
        self.seed_words
    }

    /// Returns the next uniform value in [0, 1).
    #[inline]
    pub fn next_uniform(&mut self) -> f64 {
        self.gen()
    }

    /// Fills the buffer with uniform values in [0, 1).
    ///
    /// Zero-allocation operation; an empty buffer is a no-op.
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.gen();
        }
    }
}

impl RngCore for MtUniform {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.inner.next_u32());
        let hi = u64::from(self.inner.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.inner.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
