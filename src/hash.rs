use crate::Key;

/// Knuth's multiplicative constant, `(sqrt(5) - 1) / 2`.
pub const KNUTH: f64 = 0.618_033_988_749_894_9;

/// Multiplicative-method hash: `floor(frac(key * constant) * table_size)`.
///
/// The constant is not validated; anything outside `(0, 1)` still yields a
/// slot in range, just a poorly spread one.
///
/// # Panics
/// If `table_size == 0`.
#[inline]
pub fn primary_hash(key: Key, constant: f64, table_size: usize) -> usize {
    assert!(table_size > 0, "table size must be positive");
    let product = key as f64 * constant;
    let frac = product - product.floor();
    // frac < 1.0, but the product with a large table can still round up to table_size.
    ((frac * table_size as f64) as usize).min(table_size - 1)
}

/// Step for double hashing: `(key mod (table_size - 1)) + 1`, bumped until it
/// is coprime with `table_size`, so the probe sequence visits every slot.
///
/// # Panics
/// If `table_size < 2`.
#[inline]
pub fn secondary_hash(key: Key, table_size: usize) -> usize {
    assert!(table_size > 1, "double hashing needs at least two slots");
    let mut step = (key as usize % (table_size - 1)) + 1;
    while !is_coprime(step, table_size) {
        step += 1;
    }
    step
}

/// The `i`-th slot of the double-hashing probe sequence for `key`.
#[inline]
pub fn double_hash(key: Key, constant: f64, table_size: usize, i: usize) -> usize {
    KeyHash::from_key(key, constant, table_size).place(i)
}

pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[inline]
pub fn is_coprime(a: usize, b: usize) -> bool {
    gcd(a, b) == 1
}

/// Both hashes of one key, computed once and reused across probe attempts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyHash {
    start: usize, // primary hash
    step: usize,  // secondary hash, coprime with n
    n: usize,     // always >= 2
}

impl KeyHash {
    #[inline]
    pub fn from_key(key: Key, constant: f64, table_size: usize) -> Self {
        Self {
            start: primary_hash(key, constant, table_size),
            step: secondary_hash(key, table_size),
            n: table_size,
        }
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Position for probe attempt `i`:
    /// pos = (start + i * step) % n
    #[inline]
    pub fn place(&self, i: usize) -> usize {
        let n = self.n.max(1) as u128;
        ((self.start as u128 + i as u128 * self.step as u128) % n) as usize
    }
}
