use crate::Key;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Where keys come from. Tables and the experiment never pick keys themselves.
pub trait KeySource {
    /// A key in `[low, high)`.
    fn next_key(&mut self, low: Key, high: Key) -> Key;

    /// `count` keys in `[1, key_range)`. Duplicates are expected.
    ///
    /// Implementations may panic when `key_range < 2`.
    fn keys(&mut self, count: usize, key_range: Key) -> Vec<Key> {
        (0..count).map(|_| self.next_key(1, key_range)).collect()
    }
}

/// Uniform keys drawn from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomKeys<R> {
    rng: R,
}

impl<R: Rng> RandomKeys<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomKeys<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> KeySource for RandomKeys<R> {
    #[inline]
    fn next_key(&mut self, low: Key, high: Key) -> Key {
        self.rng.gen_range(low..high)
    }
}
