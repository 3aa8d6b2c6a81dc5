//! Open addressing: one key per cell, collisions resolved by walking a probe
//! sequence until an empty cell turns up.
//!
//! Both tables refuse to insert into a full table instead of probing forever.

use crate::error::{Result, TableError};
use crate::hash::{primary_hash, KeyHash};
use crate::Key;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cell storage shared by both probing strategies.
#[derive(Debug, Clone)]
struct Cells {
    slots: Vec<Option<Key>>,
    len: usize,
    probes: usize,
}

impl Cells {
    fn new(table_size: usize, min: usize) -> Result<Self> {
        if table_size < min {
            return Err(TableError::InvalidTableSize { size: table_size, min });
        }
        Ok(Self { slots: vec![None; table_size], len: 0, probes: 0 })
    }

    #[cfg(feature = "serde")]
    fn restore(snapshot: CellsSnapshot, min: usize) -> Result<Self> {
        let mut cells = Self::new(snapshot.slots.len(), min)?;
        cells.len = snapshot.slots.iter().filter(|c| c.is_some()).count();
        cells.slots = snapshot.slots;
        cells.probes = snapshot.probes;
        Ok(cells)
    }

    /// Put `key` into the first empty slot of `sequence`. The sequence must
    /// cover every slot within its first `n` positions.
    fn place<I>(&mut self, key: Key, sequence: I) -> Result<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        let n = self.slots.len();
        if self.len == n {
            return Err(TableError::TableFull { capacity: n });
        }
        for (visited, slot) in sequence.into_iter().take(n).enumerate() {
            if self.slots[slot].is_none() {
                self.slots[slot] = Some(key);
                self.len += 1;
                self.probes += visited;
                return Ok(slot);
            }
        }
        Err(TableError::TableFull { capacity: n })
    }
}

/// Serialized form of an open-addressing table; occupancy is recounted on load.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct CellsSnapshot {
    slots: Vec<Option<Key>>,
    probes: usize,
}

impl fmt::Display for Cells {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (slot, cell) in self.slots.iter().enumerate() {
            if slot > 0 {
                writeln!(f)?;
            }
            match cell {
                Some(key) => write!(f, "{slot}: {key}")?,
                None => write!(f, "{slot}: ")?,
            }
        }
        Ok(())
    }
}

macro_rules! open_table_accessors {
    ($ty:ident) => {
        impl $ty {
            /// Build a table and insert every key with the same constant.
            pub fn from_keys(table_size: usize, keys: &[Key], constant: f64) -> Result<Self> {
                let mut table = Self::new(table_size)?;
                for &key in keys {
                    table.insert(key, constant)?;
                }
                Ok(table)
            }

            /// Occupant of `slot`, `None` if empty or out of range.
            pub fn get(&self, slot: usize) -> Option<Key> {
                self.cells.slots.get(slot).copied().flatten()
            }

            pub fn slots(&self) -> &[Option<Key>] {
                &self.cells.slots
            }

            #[inline]
            pub fn table_size(&self) -> usize {
                self.cells.slots.len()
            }

            #[inline]
            pub fn len(&self) -> usize {
                self.cells.len
            }

            #[inline]
            pub fn is_empty(&self) -> bool {
                self.cells.len == 0
            }

            pub fn load_factor(&self) -> f64 {
                self.cells.len as f64 / self.cells.slots.len() as f64
            }

            /// Occupied cells stepped over before placement, summed over all inserts.
            pub fn probes(&self) -> usize {
                self.cells.probes
            }

            /// One `"<slot>: <key>"` line per slot; empty slots leave the key blank.
            pub fn report(&self) -> String {
                self.cells.to_string()
            }
        }

        #[cfg(feature = "serde")]
        impl From<$ty> for CellsSnapshot {
            fn from(table: $ty) -> Self {
                Self { slots: table.cells.slots, probes: table.cells.probes }
            }
        }

        #[cfg(feature = "serde")]
        impl TryFrom<CellsSnapshot> for $ty {
            type Error = TableError;

            fn try_from(snapshot: CellsSnapshot) -> Result<Self> {
                Ok(Self { cells: Cells::restore(snapshot, Self::MIN_SIZE)? })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.cells, f)
            }
        }
    };
}

/// Linear probing: try `start`, `start + 1`, ... wrapping at the table size.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "CellsSnapshot", try_from = "CellsSnapshot")
)]
#[derive(Debug, Clone)]
pub struct ProbeTable {
    cells: Cells,
}

impl ProbeTable {
    const MIN_SIZE: usize = 1;

    pub fn new(table_size: usize) -> Result<Self> {
        Ok(Self { cells: Cells::new(table_size, Self::MIN_SIZE)? })
    }

    /// Returns the slot the key landed in, or `TableFull`.
    pub fn insert(&mut self, key: Key, constant: f64) -> Result<usize> {
        let n = self.cells.slots.len();
        let start = primary_hash(key, constant, n);
        self.cells.place(key, (0..n).map(|j| (start + j) % n))
    }
}

open_table_accessors!(ProbeTable);

/// Double hashing: try `start + i * step` for `i = 0, 1, ...`, where the step
/// is coprime with the table size.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "CellsSnapshot", try_from = "CellsSnapshot")
)]
#[derive(Debug, Clone)]
pub struct DoubleHashTable {
    cells: Cells,
}

impl DoubleHashTable {
    /// The secondary hash works modulo `table_size - 1`.
    const MIN_SIZE: usize = 2;

    pub fn new(table_size: usize) -> Result<Self> {
        Ok(Self { cells: Cells::new(table_size, Self::MIN_SIZE)? })
    }

    /// Returns the slot the key landed in, or `TableFull`.
    pub fn insert(&mut self, key: Key, constant: f64) -> Result<usize> {
        let n = self.cells.slots.len();
        let kh = KeyHash::from_key(key, constant, n);
        self.cells.place(key, (0..n).map(|i| kh.place(i)))
    }
}

open_table_accessors!(DoubleHashTable);
