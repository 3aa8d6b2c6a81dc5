use crate::chain::ChainTable;
use crate::error::{Result, TableError};
use crate::hash::KNUTH;
use crate::keys::KeySource;
use crate::Key;
use std::ops::{Add, AddAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for a constant-vs-constant comparison.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    /// Independent repetitions, each with a fresh key set.
    pub trials: usize,
    /// Keys drawn per trial.
    pub keys_per_trial: usize,
    /// Keys are drawn from `[1, key_range)`.
    pub key_range: Key,
    pub table_size: usize,
    /// Incumbent constant; wins ties.
    pub constant_a: f64,
    /// Challenger constant.
    pub constant_b: f64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            trials: 1000,
            keys_per_trial: 15,
            key_range: 100,
            table_size: 10,
            constant_a: KNUTH,
            constant_b: 0.83,
        }
    }
}

/// How many trials each constant won.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub a_better: usize,
    pub b_better: usize,
}

impl Tally {
    #[inline]
    pub fn trials(&self) -> usize {
        self.a_better + self.b_better
    }

    /// `"<label_b> vs <label_a>: <b> - <a>"`
    pub fn summary(&self, label_a: &str, label_b: &str) -> String {
        format!("{label_b} vs {label_a}: {} - {}", self.b_better, self.a_better)
    }
}

impl Add for Tally {
    type Output = Tally;

    fn add(self, rhs: Tally) -> Tally {
        Tally {
            a_better: self.a_better + rhs.a_better,
            b_better: self.b_better + rhs.b_better,
        }
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Tally) {
        *self = *self + rhs;
    }
}

pub struct Experiment {
    cfg: ExperimentConfig,
}

impl Experiment {
    /// Rejects configurations no trial could run with.
    pub fn new(cfg: ExperimentConfig) -> Result<Self> {
        if cfg.table_size == 0 {
            return Err(TableError::InvalidTableSize { size: 0, min: 1 });
        }
        if cfg.key_range < 2 {
            return Err(TableError::InvalidKeyRange { range: cfg.key_range });
        }
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.cfg
    }

    /// Run every trial sequentially, drawing keys from `source`.
    pub fn run<S: KeySource + ?Sized>(&self, source: &mut S) -> Result<Tally> {
        let mut tally = Tally::default();
        for _ in 0..self.cfg.trials {
            let keys = source.keys(self.cfg.keys_per_trial, self.cfg.key_range);
            tally += self.trial(&keys)?;
        }
        Ok(tally)
    }

    /// Same as [`run`](Self::run), with trials spread over the rayon pool.
    /// Trial `t` draws from its own generator seeded with `mix_seed(seed, t)`,
    /// so the result depends only on `seed`.
    #[cfg(feature = "parallel")]
    pub fn run_parallel(&self, seed: u64) -> Result<Tally> {
        use crate::keys::RandomKeys;
        use rayon::prelude::*;

        (0..self.cfg.trials)
            .into_par_iter()
            .map(|t| {
                let mut source = RandomKeys::seeded(mix_seed(seed, t as u64));
                let keys = source.keys(self.cfg.keys_per_trial, self.cfg.key_range);
                self.trial(&keys)
            })
            .try_reduce(Tally::default, |a, b| Ok(a + b))
    }

    /// One trial: the same keys under both constants. A wins ties.
    pub fn trial(&self, keys: &[Key]) -> Result<Tally> {
        let a = ChainTable::from_keys(self.cfg.table_size, keys, self.cfg.constant_a)?;
        let b = ChainTable::from_keys(self.cfg.table_size, keys, self.cfg.constant_b)?;
        Ok(if a.max_chain_length() <= b.max_chain_length() {
            Tally { a_better: 1, b_better: 0 }
        } else {
            Tally { a_better: 0, b_better: 1 }
        })
    }
}

/// Deterministically mix a base seed with a trial index.
pub fn mix_seed(base: u64, trial: u64) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf29ce484222325;
    const FNV_PRIME: u64 = 0x100000001b3;
    // Base and trial go through separate multiply rounds so `(b, t)` and `(b ^ t, 0)` differ.
    let mut h = (FNV_OFFSET ^ base).wrapping_mul(FNV_PRIME);
    h ^= trial;
    h = h.wrapping_mul(FNV_PRIME);
    h ^ (h >> 33)
}
