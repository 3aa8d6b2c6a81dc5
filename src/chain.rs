use crate::error::{Result, TableError};
use crate::hash::primary_hash;
use crate::Key;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One slot of a chaining table: every key that hashed here, in insertion order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainCell {
    pub slot: usize,
    pub chain: Vec<Key>,
}

/// Separate chaining over a fixed number of slots. Never resized.
///
/// Deserializing goes through the same size check as [`ChainTable::new`].
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "ChainSnapshot", try_from = "ChainSnapshot")
)]
#[derive(Debug, Clone)]
pub struct ChainTable {
    cells: Vec<ChainCell>,
    len: usize,
}

/// Serialized form: the cells alone, `len` is derived.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct ChainSnapshot {
    cells: Vec<ChainCell>,
}

#[cfg(feature = "serde")]
impl From<ChainTable> for ChainSnapshot {
    fn from(table: ChainTable) -> Self {
        Self { cells: table.cells }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<ChainSnapshot> for ChainTable {
    type Error = TableError;

    fn try_from(snapshot: ChainSnapshot) -> Result<Self> {
        let mut table = Self::new(snapshot.cells.len())?;
        for (cell, restored) in table.cells.iter_mut().zip(snapshot.cells) {
            if restored.slot != cell.slot {
                return Err(TableError::InvalidSnapshot("chain slots out of order"));
            }
            table.len += restored.chain.len();
            cell.chain = restored.chain;
        }
        Ok(table)
    }
}

impl ChainTable {
    pub fn new(table_size: usize) -> Result<Self> {
        if table_size == 0 {
            return Err(TableError::InvalidTableSize { size: 0, min: 1 });
        }
        let cells = (0..table_size)
            .map(|slot| ChainCell { slot, chain: Vec::new() })
            .collect();
        Ok(Self { cells, len: 0 })
    }

    /// Build a table and insert every key with the same constant.
    pub fn from_keys(table_size: usize, keys: &[Key], constant: f64) -> Result<Self> {
        let mut table = Self::new(table_size)?;
        for &key in keys {
            table.insert(key, constant);
        }
        Ok(table)
    }

    /// Append `key` to the chain at its primary hash. Returns that slot.
    pub fn insert(&mut self, key: Key, constant: f64) -> usize {
        let slot = primary_hash(key, constant, self.cells.len());
        self.cells[slot].chain.push(key);
        self.len += 1;
        slot
    }

    /// Longest chain; 0 for an empty table.
    pub fn max_chain_length(&self) -> usize {
        self.cells.iter().map(|c| c.chain.len()).max().unwrap_or(0)
    }

    pub fn chain(&self, slot: usize) -> Option<&[Key]> {
        self.cells.get(slot).map(|c| c.chain.as_slice())
    }

    pub fn cells(&self) -> &[ChainCell] {
        &self.cells
    }

    #[inline]
    pub fn table_size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.cells.len() as f64
    }

    /// One `"<slot>: <keys>"` line per slot, keys space-separated in insertion order.
    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ChainTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: ", cell.slot)?;
            let mut keys = cell.chain.iter();
            if let Some(first) = keys.next() {
                write!(f, "{first}")?;
                for key in keys {
                    write!(f, " {key}")?;
                }
            }
        }
        Ok(())
    }
}
