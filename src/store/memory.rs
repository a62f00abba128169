//! In-memory store adapter
//!
//! Keeps rows as canonical-name → value maps per table and evaluates
//! filters directly, making it the reference implementation of the store
//! contract. Unlike the Postgres adapter it has a real identity/tracking
//! scope: rows fetched in `Tracked` mode (and every inserted row) are
//! registered, `Detached` reads are not, and tests can observe the
//! difference through `tracked_len`.

use crate::filter::Filter;
use crate::model::{FromRow, ModelTrait};
use crate::store::{FetchMode, Store, StoreError};
use sea_query::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct TableData {
    rows: Vec<HashMap<String, Value>>,
    tracked: HashSet<usize>,
    next_key: i64,
}

#[derive(Debug, Default)]
struct Inner {
    tables: HashMap<&'static str, TableData>,
}

/// Shared-handle in-memory store
///
/// Cloning yields another handle to the same data, like cloning a database
/// client. Internally a mutex serializes operations; callers still treat a
/// handle as a single-writer context.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Other("store mutex poisoned".to_string()))
    }

    /// Number of rows currently registered with the tracking scope of a
    /// table
    pub fn tracked_len(&self, table: &str) -> usize {
        self.inner
            .lock()
            .map(|inner| {
                inner
                    .tables
                    .get(table)
                    .map(|t| t.tracked.len())
                    .unwrap_or(0)
            })
            .unwrap_or(0)
    }

    /// Number of persisted rows in a table
    pub fn row_count(&self, table: &str) -> usize {
        self.inner
            .lock()
            .map(|inner| inner.tables.get(table).map(|t| t.rows.len()).unwrap_or(0))
            .unwrap_or(0)
    }

    /// Prepare the stored row for a model, assigning the next key when the
    /// integer primary key was left at its default
    fn prepare_row<M: ModelTrait>(
        table: &mut TableData,
    ) -> impl FnMut(&M) -> HashMap<String, Value> + '_ {
        let pk = M::primary_key();
        move |model: &M| {
            let mut row: HashMap<String, Value> = model
                .to_values()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect();
            if let Some(pk) = pk {
                if let Some(value) = row.get(pk.name).cloned() {
                    match value {
                        Value::BigInt(Some(0)) | Value::BigInt(None) => {
                            table.next_key += 1;
                            row.insert(pk.name.to_string(), Value::BigInt(Some(table.next_key)));
                        }
                        Value::Int(Some(0)) | Value::Int(None) => {
                            table.next_key += 1;
                            row.insert(pk.name.to_string(), Value::Int(Some(table.next_key as i32)));
                        }
                        Value::BigInt(Some(n)) => {
                            table.next_key = table.next_key.max(n);
                        }
                        Value::Int(Some(n)) => {
                            table.next_key = table.next_key.max(i64::from(n));
                        }
                        _ => {}
                    }
                }
            }
            row
        }
    }
}

impl Store for MemoryStore {
    fn fetch_one<M: ModelTrait + FromRow>(
        &self,
        filter: &Filter,
        mode: FetchMode,
    ) -> Result<Option<M>, StoreError> {
        let mut inner = self.lock()?;
        let Some(table) = inner.tables.get_mut(M::TABLE) else {
            return Ok(None);
        };
        for (idx, row) in table.rows.iter().enumerate() {
            if filter.matches(row) {
                let model = M::from_values(row)?;
                if mode == FetchMode::Tracked {
                    table.tracked.insert(idx);
                }
                return Ok(Some(model));
            }
        }
        Ok(None)
    }

    fn fetch_all<M: ModelTrait + FromRow>(
        &self,
        filter: &Filter,
        mode: FetchMode,
    ) -> Result<Vec<M>, StoreError> {
        let mut inner = self.lock()?;
        let Some(table) = inner.tables.get_mut(M::TABLE) else {
            return Ok(Vec::new());
        };
        let mut results = Vec::new();
        let mut matched = Vec::new();
        for (idx, row) in table.rows.iter().enumerate() {
            if filter.matches(row) {
                results.push(M::from_values(row)?);
                matched.push(idx);
            }
        }
        if mode == FetchMode::Tracked {
            table.tracked.extend(matched);
        }
        Ok(results)
    }

    fn insert_one<M: ModelTrait + FromRow>(&self, model: &M) -> Result<M, StoreError> {
        let inserted = self.insert_many(std::slice::from_ref(model))?;
        inserted
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::Other("insert returned no record".to_string()))
    }

    fn insert_many<M: ModelTrait + FromRow>(&self, models: &[M]) -> Result<Vec<M>, StoreError> {
        let mut inner = self.lock()?;
        let table = inner.tables.entry(M::TABLE).or_default();

        // Materialize everything before touching the rows so a failing
        // record leaves the table untouched (all-or-nothing).
        let rows: Vec<HashMap<String, Value>> =
            models.iter().map(Self::prepare_row::<M>(table)).collect();
        let stored: Vec<M> = rows
            .iter()
            .map(|row| M::from_values(row).map_err(StoreError::from))
            .collect::<Result<_, _>>()?;

        for row in rows {
            let idx = table.rows.len();
            table.rows.push(row);
            table.tracked.insert(idx);
        }
        Ok(stored)
    }
}
