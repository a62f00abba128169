//! Query-by-example repository
//!
//! `Repository<M>` ties the pieces together: the column resolver is built
//! once at construction, a fresh filter is built from the example on every
//! find call, and the resulting predicate is handed to a `Store`. Insert
//! operations pass models through to the store and hand back the stored
//! records with generated fields populated.
//!
//! Every operation has a `go_`-prefixed suspending variant with identical
//! semantics. The variant runs the store round-trip on a `may` coroutine
//! and joins it: called from inside a coroutine the caller is suspended at
//! the I/O boundary instead of blocking its OS thread; called from a plain
//! thread it degrades to a blocking call. Filter building always happens on
//! the caller, before the coroutine hop. No cancellation is threaded
//! through; propagating a cancel signal into a running operation would be
//! an additive change to the `Store` contract.

use crate::example::ExampleTrait;
use crate::filter::{Filter, FilterBuilder, FilterError};
use crate::model::{FromRow, ModelTrait};
use crate::resolver::{ColumnResolver, InitializationError};
use crate::store::{FetchMode, Store, StoreError};
use std::fmt;
use std::marker::PhantomData;

#[cfg(feature = "metrics")]
use crate::metrics::METRICS;
#[cfg(feature = "tracing")]
use crate::metrics::tracing_helpers;

/// Repository error type
#[derive(Debug)]
pub enum RepositoryError {
    /// Resolver construction failed at repository init
    Init(InitializationError),
    /// Filter construction failed (unknown field or unbuildable term)
    Filter(FilterError),
    /// The underlying store call failed; original cause preserved
    Store {
        operation: &'static str,
        source: StoreError,
    },
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::Init(e) => {
                write!(f, "repository initialization failed: {e}")
            }
            RepositoryError::Filter(e) => {
                write!(f, "filter error: {e}")
            }
            RepositoryError::Store { operation, source } => {
                write!(f, "store operation {operation} failed: {source}")
            }
        }
    }
}

impl std::error::Error for RepositoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RepositoryError::Init(e) => Some(e),
            RepositoryError::Filter(e) => Some(e),
            RepositoryError::Store { source, .. } => Some(source),
        }
    }
}

impl From<InitializationError> for RepositoryError {
    fn from(err: InitializationError) -> Self {
        RepositoryError::Init(err)
    }
}

impl From<FilterError> for RepositoryError {
    fn from(err: FilterError) -> Self {
        RepositoryError::Filter(err)
    }
}

/// Typed find/insert operations for one entity over a pluggable store
///
/// The repository is cheap to clone (it owns only the resolver) and is
/// generic over the store, so one instance can serve any number of store
/// handles, but each individual handle must see at most one in-flight
/// operation at a time.
#[derive(Debug, Clone)]
pub struct Repository<M>
where
    M: ModelTrait,
{
    resolver: ColumnResolver,
    _model: PhantomData<M>,
}

impl<M> Repository<M>
where
    M: ModelTrait,
{
    /// Construct the repository, building the column resolver from the
    /// entity's descriptor table
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Init` when the descriptor table is
    /// malformed (empty, or conflicting alias registrations).
    pub fn new() -> Result<Self, RepositoryError> {
        let resolver = ColumnResolver::for_model::<M>()?;
        Ok(Self {
            resolver,
            _model: PhantomData,
        })
    }

    /// The resolver built at construction time
    pub fn resolver(&self) -> &ColumnResolver {
        &self.resolver
    }

    /// Build the equality filter for an example
    ///
    /// Exposed so callers can inspect or log the predicate that a find
    /// operation would run. Filters are built fresh on every call.
    ///
    /// # Errors
    ///
    /// See [`FilterBuilder::build`].
    pub fn build_filter<X>(&self, example: &X, skip_validation: bool) -> Result<Filter, RepositoryError>
    where
        X: ExampleTrait<Model = M>,
    {
        let filter = FilterBuilder::new(&self.resolver).build(example, skip_validation)?;
        #[cfg(feature = "metrics")]
        METRICS.record_filter_built();
        Ok(filter)
    }

    /// Find the first record matching the example, registered with the
    /// store's tracking scope
    ///
    /// Returns `Ok(None)` when nothing matches. An example with no present
    /// fields matches everything, so the store's first record is returned.
    pub fn find_one<S, X>(
        &self,
        store: &S,
        example: &X,
        skip_validation: bool,
    ) -> Result<Option<M>, RepositoryError>
    where
        S: Store,
        X: ExampleTrait<Model = M>,
        M: FromRow,
    {
        let filter = self.build_filter(example, skip_validation)?;
        self.fetch_one_with(store, filter, FetchMode::Tracked, "find_one")
    }

    /// Find the first record matching the example as a detached snapshot
    ///
    /// The result is not registered with the store's tracking scope.
    pub fn find_one_detached<S, X>(
        &self,
        store: &S,
        example: &X,
        skip_validation: bool,
    ) -> Result<Option<M>, RepositoryError>
    where
        S: Store,
        X: ExampleTrait<Model = M>,
        M: FromRow,
    {
        let filter = self.build_filter(example, skip_validation)?;
        self.fetch_one_with(store, filter, FetchMode::Detached, "find_one_detached")
    }

    /// Find all records matching the example, registered with the store's
    /// tracking scope
    pub fn find_all<S, X>(
        &self,
        store: &S,
        example: &X,
        skip_validation: bool,
    ) -> Result<Vec<M>, RepositoryError>
    where
        S: Store,
        X: ExampleTrait<Model = M>,
        M: FromRow,
    {
        let filter = self.build_filter(example, skip_validation)?;
        self.fetch_all_with(store, filter, FetchMode::Tracked, "find_all")
    }

    /// Find all records matching the example as detached snapshots
    pub fn find_all_detached<S, X>(
        &self,
        store: &S,
        example: &X,
        skip_validation: bool,
    ) -> Result<Vec<M>, RepositoryError>
    where
        S: Store,
        X: ExampleTrait<Model = M>,
        M: FromRow,
    {
        let filter = self.build_filter(example, skip_validation)?;
        self.fetch_all_with(store, filter, FetchMode::Detached, "find_all_detached")
    }

    /// Insert one record, committed immediately
    ///
    /// Returns the stored record with store-generated fields (e.g. an
    /// auto-assigned key) populated.
    pub fn insert_one<S>(&self, store: &S, model: &M) -> Result<M, RepositoryError>
    where
        S: Store,
        M: FromRow,
    {
        #[cfg(feature = "tracing")]
        let _span = tracing_helpers::operation_span("insert_one", M::TABLE).entered();
        log::debug!("insert_one on {}", M::TABLE);
        store
            .insert_one(model)
            .map_err(|source| RepositoryError::Store {
                operation: "insert_one",
                source,
            })
    }

    /// Insert all records in one atomic store commit
    ///
    /// Returns the stored records in input order; either all are persisted
    /// or none.
    pub fn insert_many<S>(&self, store: &S, models: &[M]) -> Result<Vec<M>, RepositoryError>
    where
        S: Store,
        M: FromRow,
    {
        #[cfg(feature = "tracing")]
        let _span = tracing_helpers::operation_span("insert_many", M::TABLE).entered();
        log::debug!("insert_many on {}: {} records", M::TABLE, models.len());
        store
            .insert_many(models)
            .map_err(|source| RepositoryError::Store {
                operation: "insert_many",
                source,
            })
    }

    /// Suspending variant of [`find_one`](Self::find_one)
    ///
    /// The filter is built on the caller; only the store round-trip moves
    /// onto a coroutine.
    pub fn go_find_one<S, X>(
        &self,
        store: &S,
        example: &X,
        skip_validation: bool,
    ) -> Result<Option<M>, RepositoryError>
    where
        S: Store + Clone + Send + 'static,
        X: ExampleTrait<Model = M>,
        M: FromRow + 'static,
    {
        let filter = self.build_filter(example, skip_validation)?;
        let store = store.clone();
        run_on_coroutine("find_one", move || {
            fetch_one_raw::<M, S>(&store, &filter, FetchMode::Tracked, "find_one")
        })
    }

    /// Suspending variant of [`find_one_detached`](Self::find_one_detached)
    pub fn go_find_one_detached<S, X>(
        &self,
        store: &S,
        example: &X,
        skip_validation: bool,
    ) -> Result<Option<M>, RepositoryError>
    where
        S: Store + Clone + Send + 'static,
        X: ExampleTrait<Model = M>,
        M: FromRow + 'static,
    {
        let filter = self.build_filter(example, skip_validation)?;
        let store = store.clone();
        run_on_coroutine("find_one_detached", move || {
            fetch_one_raw::<M, S>(&store, &filter, FetchMode::Detached, "find_one_detached")
        })
    }

    /// Suspending variant of [`find_all`](Self::find_all)
    pub fn go_find_all<S, X>(
        &self,
        store: &S,
        example: &X,
        skip_validation: bool,
    ) -> Result<Vec<M>, RepositoryError>
    where
        S: Store + Clone + Send + 'static,
        X: ExampleTrait<Model = M>,
        M: FromRow + 'static,
    {
        let filter = self.build_filter(example, skip_validation)?;
        let store = store.clone();
        run_on_coroutine("find_all", move || {
            fetch_all_raw::<M, S>(&store, &filter, FetchMode::Tracked, "find_all")
        })
    }

    /// Suspending variant of [`find_all_detached`](Self::find_all_detached)
    pub fn go_find_all_detached<S, X>(
        &self,
        store: &S,
        example: &X,
        skip_validation: bool,
    ) -> Result<Vec<M>, RepositoryError>
    where
        S: Store + Clone + Send + 'static,
        X: ExampleTrait<Model = M>,
        M: FromRow + 'static,
    {
        let filter = self.build_filter(example, skip_validation)?;
        let store = store.clone();
        run_on_coroutine("find_all_detached", move || {
            fetch_all_raw::<M, S>(&store, &filter, FetchMode::Detached, "find_all_detached")
        })
    }

    /// Suspending variant of [`insert_one`](Self::insert_one)
    ///
    /// Takes the model by value; it moves onto the coroutine with the
    /// store handle.
    pub fn go_insert_one<S>(&self, store: &S, model: M) -> Result<M, RepositoryError>
    where
        S: Store + Clone + Send + 'static,
        M: FromRow + 'static,
    {
        log::debug!("insert_one on {}", M::TABLE);
        let store = store.clone();
        run_on_coroutine("insert_one", move || {
            store
                .insert_one(&model)
                .map_err(|source| RepositoryError::Store {
                    operation: "insert_one",
                    source,
                })
        })
    }

    /// Suspending variant of [`insert_many`](Self::insert_many)
    pub fn go_insert_many<S>(&self, store: &S, models: Vec<M>) -> Result<Vec<M>, RepositoryError>
    where
        S: Store + Clone + Send + 'static,
        M: FromRow + 'static,
    {
        log::debug!("insert_many on {}: {} records", M::TABLE, models.len());
        let store = store.clone();
        run_on_coroutine("insert_many", move || {
            store
                .insert_many(&models)
                .map_err(|source| RepositoryError::Store {
                    operation: "insert_many",
                    source,
                })
        })
    }

    fn fetch_one_with<S>(
        &self,
        store: &S,
        filter: Filter,
        mode: FetchMode,
        operation: &'static str,
    ) -> Result<Option<M>, RepositoryError>
    where
        S: Store,
        M: FromRow,
    {
        #[cfg(feature = "tracing")]
        let _span = tracing_helpers::operation_span(operation, M::TABLE).entered();
        log::debug!("{operation} on {}: {filter}", M::TABLE);
        fetch_one_raw::<M, S>(store, &filter, mode, operation)
    }

    fn fetch_all_with<S>(
        &self,
        store: &S,
        filter: Filter,
        mode: FetchMode,
        operation: &'static str,
    ) -> Result<Vec<M>, RepositoryError>
    where
        S: Store,
        M: FromRow,
    {
        #[cfg(feature = "tracing")]
        let _span = tracing_helpers::operation_span(operation, M::TABLE).entered();
        log::debug!("{operation} on {}: {filter}", M::TABLE);
        fetch_all_raw::<M, S>(store, &filter, mode, operation)
    }
}

fn fetch_one_raw<M, S>(
    store: &S,
    filter: &Filter,
    mode: FetchMode,
    operation: &'static str,
) -> Result<Option<M>, RepositoryError>
where
    M: ModelTrait + FromRow,
    S: Store,
{
    store
        .fetch_one(filter, mode)
        .map_err(|source| RepositoryError::Store { operation, source })
}

fn fetch_all_raw<M, S>(
    store: &S,
    filter: &Filter,
    mode: FetchMode,
    operation: &'static str,
) -> Result<Vec<M>, RepositoryError>
where
    M: ModelTrait + FromRow,
    S: Store,
{
    store
        .fetch_all(filter, mode)
        .map_err(|source| RepositoryError::Store { operation, source })
}

/// Run a repository job on a `may` coroutine and wait for it
///
/// Joining suspends the calling coroutine (or parks the calling thread)
/// until the job's store I/O completes.
fn run_on_coroutine<T, F>(operation: &'static str, job: F) -> Result<T, RepositoryError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, RepositoryError> + Send + 'static,
{
    let handle = may::go!(job);
    match handle.join() {
        Ok(result) => result,
        Err(e) => Err(RepositoryError::Store {
            operation,
            source: StoreError::Other(format!("coroutine failed: {e:?}")),
        }),
    }
}
