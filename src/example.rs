//! Example objects for query-by-example filtering
//!
//! An example object is a sparsely-populated companion of an entity: each
//! field is either present (carries a comparison value) or absent. Presence
//! is explicit (fields are `Option`-wrapped), so an intentional zero value
//! is still a filter term, and there is no null-sentinel ambiguity.
//!
//! The `SpecimenModel` derive generates a `{Model}Example` companion struct
//! for every entity, but any type can implement `ExampleTrait`, e.g. to
//! express criteria under alias names that the resolver remaps.
//!
//! One consequence of the explicit-presence design is documented here
//! rather than hidden: a comparison against SQL `NULL` cannot be expressed.
//! An entity field of type `Option<T>` flattens to `Option<T>` in the
//! companion, so `None` always means "not filtered", never "equals NULL".

use crate::model::ModelTrait;
use sea_query::Value;

/// Trait for example objects used to build filters
pub trait ExampleTrait {
    /// The entity this example expresses criteria for
    type Model: ModelTrait;

    /// The example's fields, in declaration order
    ///
    /// Each entry pairs a field name (canonical or alias) with the
    /// comparison value, or `None` when the field does not participate in
    /// the filter. Values are captured here, at enumeration time.
    fn fields(&self) -> Vec<(&'static str, Option<Value>)>;

    /// Names of the present fields, in declaration order
    fn present(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter_map(|(name, value)| value.map(|_| name))
            .collect()
    }

    /// True when no field is present (the resulting filter matches all)
    fn is_blank(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests_cfg::OwnerCriteria;

    #[test]
    fn test_present_lists_only_set_fields() {
        let example = OwnerCriteria {
            name: Some("Ada".to_string()),
            city: Some("Lisbon".to_string()),
            ..OwnerCriteria::default()
        };
        assert_eq!(example.present(), vec!["name", "city"]);
    }

    #[test]
    fn test_blank_example() {
        let example = OwnerCriteria::default();
        assert!(example.is_blank());
        assert!(example.present().is_empty());
    }

    #[test]
    fn test_zero_value_is_present() {
        // An explicit zero is a real comparison value, not "absent".
        let example = OwnerCriteria {
            id: Some(0),
            ..OwnerCriteria::default()
        };
        assert!(!example.is_blank());
        assert_eq!(example.present(), vec!["id"]);
    }
}
