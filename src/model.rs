//! Model trait and field metadata for specimen entities
//!
//! This module provides the `ModelTrait` which exposes an entity's declared
//! fields as a compile-time descriptor table, along with dynamic access to
//! field values. The descriptor table replaces runtime reflection: every
//! entity carries a `const FIELDS` mapping literal, normally generated by
//! the `SpecimenModel` derive.

use sea_query::Value;
use std::collections::HashMap;
use std::fmt;

/// Metadata for a single declared field of an entity
///
/// Stores the canonical (declared) field name, the optional alias carried
/// by a `#[column_name = "..."]` attribute, and whether the field is the
/// primary key. The alias is used purely for filter-name remapping; storage
/// naming stays canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// The name the field is declared with on the entity type
    pub name: &'static str,
    /// Alternate name accepted when building filters (if any)
    pub column_name: Option<&'static str>,
    /// Whether this field is the entity's primary key
    pub primary_key: bool,
}

impl FieldDescriptor {
    /// Descriptor for a plain field with no alias
    pub const fn plain(name: &'static str) -> Self {
        Self {
            name,
            column_name: None,
            primary_key: false,
        }
    }

    /// Descriptor for an aliased field
    pub const fn aliased(name: &'static str, column_name: &'static str) -> Self {
        Self {
            name,
            column_name: Some(column_name),
            primary_key: false,
        }
    }

    /// Mark this descriptor as the primary key
    pub const fn primary(mut self) -> Self {
        self.primary_key = true;
        self
    }
}

/// Error produced when a model cannot be rebuilt from stored values
///
/// Surfaces the table and field that failed so store adapters can report
/// decode failures with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    /// Table the model belongs to
    pub table: &'static str,
    /// Field that could not be decoded
    pub field: &'static str,
    /// Human-readable detail
    pub detail: String,
}

impl DecodeError {
    /// A field that was absent from the stored row
    pub fn missing(table: &'static str, field: &'static str) -> Self {
        Self {
            table,
            field,
            detail: "value missing from row".to_string(),
        }
    }

    /// A field whose stored value had an incompatible type
    pub fn type_mismatch(table: &'static str, field: &'static str) -> Self {
        Self {
            table,
            field,
            detail: "stored value has incompatible type".to_string(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to decode {}.{}: {}",
            self.table, self.field, self.detail
        )
    }
}

impl std::error::Error for DecodeError {}

/// Trait for entity model types
///
/// Implementations are normally generated by the `SpecimenModel` derive,
/// which turns the struct definition into the `TABLE`/`FIELDS` descriptor
/// table and the dynamic accessors below.
///
/// # Contract
///
/// * `FIELDS` lists every declared field, in declaration order.
/// * `get` and `to_values` produce `sea_query::Value`s using the same
///   conversions, so a value read from a model compares equal to the value
///   the model would be stored with.
/// * `from_values` is the inverse of `to_values` for rows produced by a
///   store adapter.
pub trait ModelTrait: Clone + Send + fmt::Debug + Sized {
    /// The table/collection name for this entity
    const TABLE: &'static str;

    /// Declared fields, in declaration order
    const FIELDS: &'static [FieldDescriptor];

    /// Get a field's value by its canonical name
    ///
    /// Returns `None` for names that are not declared fields. Alias names
    /// are not accepted here; resolution happens in the filter layer.
    fn get(&self, field: &str) -> Option<Value>;

    /// All field values in declaration order, paired with canonical names
    fn to_values(&self) -> Vec<(&'static str, Value)>;

    /// Rebuild a model from a canonical-name → value map
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` if a declared field is missing from `values`
    /// or its value cannot be converted back to the field's type.
    fn from_values(values: &HashMap<String, Value>) -> Result<Self, DecodeError>;

    /// Descriptor of the primary-key field, if one is declared
    fn primary_key() -> Option<&'static FieldDescriptor> {
        Self::FIELDS.iter().find(|f| f.primary_key)
    }
}

/// Trait for types that can be created from a database row
pub trait FromRow: Sized {
    fn from_row(row: &may_postgres::Row) -> Result<Self, may_postgres::Error>;
}

/// Decode one field out of a canonical-name → value map
///
/// Shared by `from_values` implementations (hand-written and generated by
/// the `SpecimenModel` derive).
///
/// # Errors
///
/// `DecodeError::missing` when the field is absent, `type_mismatch` when
/// the stored value cannot be converted to `T`.
pub fn decode_field<T: sea_query::ValueType>(
    values: &HashMap<String, Value>,
    table: &'static str,
    field: &'static str,
) -> Result<T, DecodeError> {
    let value = values
        .get(field)
        .ok_or_else(|| DecodeError::missing(table, field))?;
    T::try_from(value.clone()).map_err(|_| DecodeError::type_mismatch(table, field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests_cfg::{owner_fixture, Owner};

    #[test]
    fn test_field_descriptor_plain() {
        let d = FieldDescriptor::plain("name");
        assert_eq!(d.name, "name");
        assert_eq!(d.column_name, None);
        assert!(!d.primary_key);
    }

    #[test]
    fn test_field_descriptor_aliased_primary() {
        let d = FieldDescriptor::aliased("id", "owner_id").primary();
        assert_eq!(d.name, "id");
        assert_eq!(d.column_name, Some("owner_id"));
        assert!(d.primary_key);
    }

    #[test]
    fn test_fields_declaration_order() {
        let names: Vec<&str> = Owner::FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["id", "name", "email", "city"]);
    }

    #[test]
    fn test_get_known_and_unknown_field() {
        let owner = owner_fixture();
        assert_eq!(owner.get("name"), Some(Value::from("Ada".to_string())));
        assert_eq!(owner.get("no_such_field"), None);
        // Alias names are not accepted by get(); that's the resolver's job.
        assert_eq!(owner.get("contact_email"), None);
    }

    #[test]
    fn test_to_values_round_trips_through_from_values() {
        let owner = owner_fixture();
        let map: HashMap<String, Value> = owner
            .to_values()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        let rebuilt = Owner::from_values(&map).expect("round trip");
        assert_eq!(rebuilt, owner);
    }

    #[test]
    fn test_from_values_missing_field() {
        let map = HashMap::new();
        let err = Owner::from_values(&map).unwrap_err();
        assert_eq!(err.table, "owners");
        assert!(err.to_string().contains("owners."));
    }

    #[test]
    fn test_primary_key_descriptor() {
        let pk = Owner::primary_key().expect("owners has a primary key");
        assert_eq!(pk.name, "id");
    }
}
