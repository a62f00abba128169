//! Store collaborator contract and adapters
//!
//! The repository hands a built `Filter` to a `Store`; the store translates
//! it into its native query form and returns typed records. Two adapters
//! ship with the crate:
//! - `PostgresStore` renders filters to SQL via sea-query and executes
//!   over a `may_postgres` client.
//! - `MemoryStore` evaluates filters directly against in-memory rows and
//!   implements an observable identity/tracking scope; the reference
//!   semantics used by the test suites.

pub mod memory;
pub mod postgres;

#[doc(inline)]
pub use memory::MemoryStore;
#[doc(inline)]
pub use postgres::PostgresStore;

use crate::filter::Filter;
use crate::model::{DecodeError, FromRow, ModelTrait};
use std::fmt;

/// Whether a fetched record is registered with the store's change-tracking
/// (identity) scope
///
/// `Detached` reads are snapshots: the store hands the record out without
/// remembering it. Adapters without a tracking scope accept the mode and
/// ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Register the result with the store's tracking scope
    Tracked,
    /// Read-only snapshot, not registered anywhere
    Detached,
}

/// Store error type
#[derive(Debug)]
pub enum StoreError {
    /// `PostgreSQL` error from `may_postgres`
    Postgres(may_postgres::Error),
    /// Query construction or execution error
    Query(String),
    /// Row parsing/conversion error
    Parse(String),
    /// Other store errors
    Other(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Postgres(e) => {
                write!(f, "PostgreSQL error: {e}")
            }
            StoreError::Query(s) => {
                write!(f, "Query error: {s}")
            }
            StoreError::Parse(s) => {
                write!(f, "Parse error: {s}")
            }
            StoreError::Other(s) => {
                write!(f, "Store error: {s}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Postgres(e) => Some(e),
            _ => None,
        }
    }
}

impl From<may_postgres::Error> for StoreError {
    fn from(err: may_postgres::Error) -> Self {
        StoreError::Postgres(err)
    }
}

impl From<DecodeError> for StoreError {
    fn from(err: DecodeError) -> Self {
        StoreError::Parse(err.to_string())
    }
}

/// Trait for store implementations
///
/// One logical operation per call, one round-trip per operation; no
/// retries, no caching. A store handle is not safe for concurrent in-flight
/// operations from the same repository instance; callers serialize against
/// one handle, mirroring a single-writer persistence context.
pub trait Store {
    /// Return the first record matching the filter, or `None`
    ///
    /// The empty filter matches every record, so the first stored record is
    /// returned.
    fn fetch_one<M: ModelTrait + FromRow>(
        &self,
        filter: &Filter,
        mode: FetchMode,
    ) -> Result<Option<M>, StoreError>;

    /// Return all records matching the filter, in store order
    fn fetch_all<M: ModelTrait + FromRow>(
        &self,
        filter: &Filter,
        mode: FetchMode,
    ) -> Result<Vec<M>, StoreError>;

    /// Insert one record, committing immediately
    ///
    /// Returns the stored record with any store-generated fields (e.g. an
    /// auto-assigned key) populated.
    fn insert_one<M: ModelTrait + FromRow>(&self, model: &M) -> Result<M, StoreError>;

    /// Insert all records atomically, committing once
    ///
    /// Returns the stored records in input order. Either every record is
    /// persisted or none is.
    fn insert_many<M: ModelTrait + FromRow>(&self, models: &[M]) -> Result<Vec<M>, StoreError>;
}
