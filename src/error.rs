use crate::Key;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("table size {size} is too small (minimum {min})")]
    InvalidTableSize { size: usize, min: usize },
    #[error("table is full ({capacity} slots occupied)")]
    TableFull { capacity: usize },
    #[error("key range [1, {range}) is empty")]
    InvalidKeyRange { range: Key },
    #[error("invalid table snapshot: {0}")]
    InvalidSnapshot(&'static str),
}

pub type Result<T> = std::result::Result<T, TableError>;
