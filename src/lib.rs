//! # Specimen
//!
//! Query-by-example data access for PostgreSQL on the `may` runtime.
//!
//! Find criteria are expressed as a sparsely-populated example object
//! instead of a query string: present fields become equality comparisons,
//! ANDed together, and the resulting filter is handed to a store adapter.
//! Entity metadata, including per-field filter aliases via
//! `#[column_name = "..."]`, lives in compile-time descriptor tables
//! generated by the [`SpecimenModel`] derive.
//!
//! ```
//! use specimen::{MemoryStore, Repository, SpecimenModel};
//!
//! #[derive(SpecimenModel, Clone, Debug, PartialEq)]
//! #[table_name = "owners"]
//! pub struct Owner {
//!     #[primary_key]
//!     pub id: i64,
//!     pub name: String,
//!     #[column_name = "contact_email"]
//!     pub email: String,
//! }
//!
//! # fn main() -> Result<(), specimen::RepositoryError> {
//! let store = MemoryStore::new();
//! let repo: Repository<Owner> = Repository::new()?;
//!
//! let stored = repo.insert_one(
//!     &store,
//!     &Owner {
//!         id: 0,
//!         name: "Ada".to_string(),
//!         email: "ada@acm.org".to_string(),
//!     },
//! )?;
//! assert!(stored.id > 0);
//!
//! let example = OwnerExample {
//!     name: Some("Ada".to_string()),
//!     ..OwnerExample::default()
//! };
//! let found = repo.find_one(&store, &example, false)?;
//! assert_eq!(found, Some(stored));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod connection;
pub mod example;
pub mod filter;
pub mod metrics;
pub mod model;
pub mod repository;
pub mod resolver;
pub mod store;
pub mod timefmt;

#[cfg(test)]
pub(crate) mod tests_cfg;

#[doc(inline)]
pub use config::DatabaseConfig;
#[doc(inline)]
pub use connection::{connect, ConnectionError};
#[doc(inline)]
pub use example::ExampleTrait;
#[doc(inline)]
pub use filter::{Filter, FilterBuilder, FilterError, FilterTerm};
#[doc(inline)]
pub use model::{decode_field, DecodeError, FieldDescriptor, FromRow, ModelTrait};
#[doc(inline)]
pub use repository::{Repository, RepositoryError};
#[doc(inline)]
pub use resolver::{ColumnResolver, InitializationError};
#[doc(inline)]
pub use store::{FetchMode, MemoryStore, PostgresStore, Store, StoreError};

pub use specimen_derive::SpecimenModel;

// Single source of truth for the value and row types the derive output
// references.
pub use may_postgres;
pub use sea_query;
