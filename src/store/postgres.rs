//! PostgreSQL store adapter over `may_postgres`
//!
//! Translates filters into SQL with sea-query and executes them on a
//! `may_postgres::Client`. Calls look blocking; inside a `may` coroutine
//! the client suspends the coroutine at the I/O boundary instead of
//! blocking the OS thread.
//!
//! A bare client has no identity map, so `FetchMode` is accepted and
//! ignored here: every read is effectively detached. The mode stays on the
//! trait so a session-scoped adapter can honor it.

use crate::config::DatabaseConfig;
use crate::connection::{connect, ConnectionError};
use crate::filter::Filter;
use crate::model::{FromRow, ModelTrait};
use crate::store::{FetchMode, Store, StoreError};
use may_postgres::types::ToSql;
use may_postgres::{Client, Row};
use sea_query::{Alias, Asterisk, Expr, PostgresQueryBuilder, Query};
use std::time::Instant;

#[cfg(feature = "metrics")]
use crate::metrics::METRICS;
#[cfg(feature = "tracing")]
use crate::metrics::tracing_helpers;

/// Store adapter executing against PostgreSQL
///
/// Wraps a `may_postgres::Client`. Cloning clones the client handle, which
/// shares the underlying connection.
#[derive(Clone)]
pub struct PostgresStore {
    client: Client,
}

impl PostgresStore {
    /// Create a store from an established client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Connect and create a store from a connection string
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError` if the string is malformed or the
    /// connection cannot be established.
    pub fn connect(connection_string: &str) -> Result<Self, ConnectionError> {
        Ok(Self::new(connect(connection_string)?))
    }

    /// Connect using a loaded `DatabaseConfig`
    pub fn from_config(config: &DatabaseConfig) -> Result<Self, ConnectionError> {
        Self::connect(&config.url)
    }

    /// Get a reference to the underlying client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Execute a SQL statement and return the number of rows affected
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query execution fails.
    pub fn execute(&self, query: &str, params: &[&dyn ToSql]) -> Result<u64, StoreError> {
        #[cfg(feature = "tracing")]
        let _span = tracing_helpers::query_span(query).entered();

        let start = Instant::now();
        let result = self.client.execute(query, params).map_err(|e| {
            #[cfg(feature = "metrics")]
            METRICS.record_query_error();
            StoreError::Postgres(e)
        });

        let duration = start.elapsed();
        #[cfg(feature = "metrics")]
        METRICS.record_query(duration);
        #[cfg(not(feature = "metrics"))]
        let _ = duration;

        result
    }

    /// Execute a query and return a single row
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if execution fails or the query does not
    /// produce exactly one row.
    pub fn query_one(&self, query: &str, params: &[&dyn ToSql]) -> Result<Row, StoreError> {
        #[cfg(feature = "tracing")]
        let _span = tracing_helpers::query_span(query).entered();

        let start = Instant::now();
        let result = self.client.query_one(query, params).map_err(|e| {
            #[cfg(feature = "metrics")]
            METRICS.record_query_error();
            StoreError::Postgres(e)
        });

        let duration = start.elapsed();
        #[cfg(feature = "metrics")]
        METRICS.record_query(duration);
        #[cfg(not(feature = "metrics"))]
        let _ = duration;

        result
    }

    /// Execute a query and return all rows
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query execution fails.
    pub fn query_all(&self, query: &str, params: &[&dyn ToSql]) -> Result<Vec<Row>, StoreError> {
        #[cfg(feature = "tracing")]
        let _span = tracing_helpers::query_span(query).entered();

        let start = Instant::now();
        let result = self.client.query(query, params).map_err(|e| {
            #[cfg(feature = "metrics")]
            METRICS.record_query_error();
            StoreError::Postgres(e)
        });

        let duration = start.elapsed();
        #[cfg(feature = "metrics")]
        METRICS.record_query(duration);
        #[cfg(not(feature = "metrics"))]
        let _ = duration;

        result
    }

    /// Check if the underlying connection is healthy
    ///
    /// Executes `SELECT 1` to verify the connection is alive.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the health check query fails.
    pub fn check_health(&self) -> Result<bool, StoreError> {
        let rows = self.query_all("SELECT 1", &[])?;
        Ok(!rows.is_empty())
    }
}

/// Render the SELECT for a filter; values are inlined by sea-query
fn select_sql<M: ModelTrait>(filter: &Filter, limit: Option<u64>) -> String {
    let mut query = Query::select();
    query
        .column(Asterisk)
        .from(Alias::new(M::TABLE))
        .cond_where(filter.to_condition());
    if let Some(limit) = limit {
        query.limit(limit);
    }
    query.to_string(PostgresQueryBuilder)
}

/// True when an integer primary key was left at its default and should be
/// generated by the database
fn pk_is_defaulted(value: &sea_query::Value) -> bool {
    matches!(
        value,
        sea_query::Value::BigInt(Some(0))
            | sea_query::Value::BigInt(None)
            | sea_query::Value::Int(Some(0))
            | sea_query::Value::Int(None)
    )
}

/// Render the multi-row INSERT .. RETURNING * for a batch of models
///
/// The primary-key column is omitted when every staged model leaves it at
/// its integer default, letting the database sequence assign keys.
fn insert_sql<M: ModelTrait>(models: &[M]) -> Result<String, StoreError> {
    let pk_name = M::primary_key().map(|pk| pk.name);
    let omit_pk = pk_name.is_some_and(|pk| {
        models
            .iter()
            .all(|m| m.get(pk).as_ref().is_some_and(pk_is_defaulted))
    });
    let skipped = |name: &str| omit_pk && pk_name == Some(name);

    let mut query = Query::insert();
    query.into_table(Alias::new(M::TABLE)).columns(
        M::FIELDS
            .iter()
            .filter(|f| !skipped(f.name))
            .map(|f| Alias::new(f.name)),
    );
    for model in models {
        query
            .values(
                model
                    .to_values()
                    .into_iter()
                    .filter(|(name, _)| !skipped(name))
                    .map(|(_, value)| Expr::val(value)),
            )
            .map_err(|e| StoreError::Query(format!("failed to bind insert values: {e}")))?;
    }
    query.returning_all();
    Ok(query.to_string(PostgresQueryBuilder))
}

fn decode_rows<M: FromRow>(rows: &[Row]) -> Result<Vec<M>, StoreError> {
    rows.iter()
        .map(|row| {
            M::from_row(row).map_err(|e| StoreError::Parse(format!("failed to parse row: {e}")))
        })
        .collect()
}

impl Store for PostgresStore {
    fn fetch_one<M: ModelTrait + FromRow>(
        &self,
        filter: &Filter,
        _mode: FetchMode,
    ) -> Result<Option<M>, StoreError> {
        let sql = select_sql::<M>(filter, Some(1));
        log::trace!("fetch_one: {sql}");
        let rows = self.query_all(&sql, &[])?;
        Ok(decode_rows::<M>(&rows)?.into_iter().next())
    }

    fn fetch_all<M: ModelTrait + FromRow>(
        &self,
        filter: &Filter,
        _mode: FetchMode,
    ) -> Result<Vec<M>, StoreError> {
        let sql = select_sql::<M>(filter, None);
        log::trace!("fetch_all: {sql}");
        let rows = self.query_all(&sql, &[])?;
        decode_rows::<M>(&rows)
    }

    fn insert_one<M: ModelTrait + FromRow>(&self, model: &M) -> Result<M, StoreError> {
        let sql = insert_sql(std::slice::from_ref(model))?;
        log::trace!("insert_one: {sql}");
        let row = self.query_one(&sql, &[])?;
        M::from_row(&row).map_err(|e| StoreError::Parse(format!("failed to parse row: {e}")))
    }

    fn insert_many<M: ModelTrait + FromRow>(&self, models: &[M]) -> Result<Vec<M>, StoreError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }
        let sql = insert_sql(models)?;
        log::trace!("insert_many: {sql}");
        // A single multi-row statement: PostgreSQL persists all rows or
        // none, and RETURNING preserves input order.
        let rows = self.query_all(&sql, &[])?;
        decode_rows::<M>(&rows)
    }
}
