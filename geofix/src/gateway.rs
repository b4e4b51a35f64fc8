//! Datastore gateway port.
//!
//! The search core reads cell and area records through this trait and
//! never learns how they are stored. Failures are explicit values; the
//! calling strategy reports them and degrades that tier to "no data"
//! rather than failing the query.

use thiserror::Error;

use crate::cell::{AreaKey, AreaRecord, CellKey, CellRecord};

/// Failure reading from the backing datastore.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The datastore could not be reached at all.
    #[error("datastore unavailable: {0}")]
    Unavailable(String),
    /// The datastore rejected or failed the read.
    #[error("datastore query failed: {0}")]
    QueryFailed(String),
}

/// Which lookup tier a gateway call served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreTier {
    Cell,
    Area,
}

impl StoreTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreTier::Cell => "cell",
            StoreTier::Area => "area",
        }
    }
}

/// Read-only fetch of cell and area records by identity key.
///
/// Implementors must return only rows whose coordinates are present and
/// need only populate position data (`lat`, `lon`, `radius`) plus the
/// grouping key; an unknown key is simply absent from the result set.
pub trait CellStore: Send + Sync {
    fn query_cells(&self, keys: &[CellKey]) -> Result<Vec<CellRecord>, StoreError>;

    fn query_areas(&self, keys: &[AreaKey]) -> Result<Vec<AreaRecord>, StoreError>;
}
