//! hashlab — multiplicative hashing and three ways to resolve collisions.
//!
//! - `h(k) = floor(frac(k * A) * m)` with a tunable constant `A`.
//! - Separate chaining, linear probing and double hashing over fixed-size tables.
//! - A trial runner that pits two constants against each other by maximum chain length.

mod chain;
mod error;
mod experiment;
mod hash;
mod keys;
mod probe;

#[cfg(feature = "cli")]
pub mod config;

pub use chain::{ChainCell, ChainTable};
pub use error::{Result, TableError};
pub use experiment::{mix_seed, Experiment, ExperimentConfig, Tally};
pub use hash::{double_hash, gcd, is_coprime, primary_hash, secondary_hash, KeyHash, KNUTH};
pub use keys::{KeySource, RandomKeys};
pub use probe::{DoubleHashTable, ProbeTable};

/// Keys are positive integers drawn from `[1, key_range)`.
pub type Key = u32;
