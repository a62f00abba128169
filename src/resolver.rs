//! Column-name resolution for filter building
//!
//! Maps the names an example object may use (a field's declared name or
//! the alias from its `#[column_name = "..."]` attribute) to the field's
//! canonical declared name. Built once per repository instance from the
//! entity's descriptor table and reused for every filter built afterwards.

use crate::model::{FieldDescriptor, ModelTrait};
use std::collections::HashMap;
use std::fmt;

/// Resolver construction error
///
/// The descriptor table is a compile-time literal, so the only way
/// construction can fail is a malformed table: no fields at all, or two
/// fields claiming the same lookup name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitializationError {
    /// The entity declares no fields
    EmptyDescriptorTable {
        table: &'static str,
    },
    /// Two different fields map the same name or alias
    DuplicateName {
        table: &'static str,
        name: &'static str,
        first: &'static str,
        second: &'static str,
    },
}

impl fmt::Display for InitializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitializationError::EmptyDescriptorTable { table } => {
                write!(f, "entity {table} declares no fields")
            }
            InitializationError::DuplicateName {
                table,
                name,
                first,
                second,
            } => {
                write!(
                    f,
                    "entity {table}: name {name} maps to both {first} and {second}"
                )
            }
        }
    }
}

impl std::error::Error for InitializationError {}

/// Maps alias and canonical field names to canonical field names
///
/// Every canonical field name is registered as a self-mapping, so the map
/// doubles as the validator for "is this a legitimate field of the entity".
/// Aliased fields additionally register `alias → canonical`.
///
/// # Example
///
/// ```ignore
/// let resolver = ColumnResolver::for_model::<Owner>()?;
/// assert_eq!(resolver.resolve("email"), Some("email"));
/// assert_eq!(resolver.resolve("contact_email"), Some("email"));
/// assert_eq!(resolver.resolve("nope"), None);
/// ```
#[derive(Debug, Clone)]
pub struct ColumnResolver {
    table: &'static str,
    map: HashMap<&'static str, &'static str>,
}

impl ColumnResolver {
    /// Build a resolver from an entity's descriptor table
    ///
    /// # Errors
    ///
    /// Returns `InitializationError` when the table is empty or two fields
    /// collide on a lookup name. An alias equal to its own field's name is
    /// redundant but not a collision.
    pub fn from_fields(
        table: &'static str,
        fields: &'static [FieldDescriptor],
    ) -> Result<Self, InitializationError> {
        if fields.is_empty() {
            return Err(InitializationError::EmptyDescriptorTable { table });
        }

        let mut map: HashMap<&'static str, &'static str> = HashMap::new();
        for field in fields {
            Self::register(table, &mut map, field.name, field.name)?;
            if let Some(alias) = field.column_name {
                Self::register(table, &mut map, alias, field.name)?;
            }
        }
        Ok(Self { table, map })
    }

    /// Build a resolver for a model type
    pub fn for_model<M: ModelTrait>() -> Result<Self, InitializationError> {
        Self::from_fields(M::TABLE, M::FIELDS)
    }

    fn register(
        table: &'static str,
        map: &mut HashMap<&'static str, &'static str>,
        name: &'static str,
        canonical: &'static str,
    ) -> Result<(), InitializationError> {
        if let Some(existing) = map.insert(name, canonical) {
            if existing != canonical {
                return Err(InitializationError::DuplicateName {
                    table,
                    name,
                    first: existing,
                    second: canonical,
                });
            }
        }
        Ok(())
    }

    /// Resolve a name (canonical or alias) to the canonical field name
    pub fn resolve(&self, name: &str) -> Option<&'static str> {
        self.map.get(name).copied()
    }

    /// Whether the name is a legitimate field name or alias of the entity
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// The entity table this resolver was built for
    pub fn table(&self) -> &'static str {
        self.table
    }

    /// Number of registered lookup names (canonical plus aliases)
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when no names are registered (cannot happen for a constructed
    /// resolver; present for completeness)
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
