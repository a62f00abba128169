//! Filter construction from example objects
//!
//! The filter builder turns a sparse example object into a conjunctive
//! equality predicate: one `Equals` term per present field, combined with
//! logical AND, in declaration order. The predicate is a plain variant
//! tree; store adapters translate it into their native form, either a sea-query
//! condition (`to_condition`) for SQL stores or direct evaluation
//! (`matches`) for in-memory rows.
//!
//! Filters are built fresh on every call and never cached; caching compiled
//! predicates per field-set signature is a possible optimization, not
//! needed for correctness.

use crate::example::ExampleTrait;
use crate::resolver::ColumnResolver;
use crate::timefmt;
use sea_query::{Alias, Condition, Expr, ExprTrait, Value};
use std::collections::HashMap;
use std::fmt;

/// Error produced while building a filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The example referenced a name the resolver does not recognize and
    /// validation was not skipped
    InvalidField(String),
    /// Any other construction failure; the offending detail is preserved
    Build(String),
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::InvalidField(name) => {
                write!(f, "example references unknown field: {name}")
            }
            FilterError::Build(msg) => {
                write!(f, "filter construction failed: {msg}")
            }
        }
    }
}

impl std::error::Error for FilterError {}

/// A single comparison in a filter
#[derive(Debug, Clone, PartialEq)]
pub enum FilterTerm {
    /// `column = value`, against the canonical field name
    Equals {
        column: &'static str,
        value: Value,
    },
}

impl fmt::Display for FilterTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterTerm::Equals { column, value } => {
                write!(f, "{column} = {}", render_value(value))
            }
        }
    }
}

/// An AND-chain of equality comparisons over canonical field names
///
/// The empty filter is the empty conjunction: it matches every row. Callers
/// that need to distinguish "filter everything" from "no criteria" check
/// `is_empty()` before handing the filter to a store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    terms: Vec<FilterTerm>,
}

impl Filter {
    /// The empty filter (matches every row)
    pub fn empty() -> Self {
        Self::default()
    }

    /// The comparisons, in the order the example declared them
    pub fn terms(&self) -> &[FilterTerm] {
        &self.terms
    }

    /// Number of comparisons
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True for the empty conjunction
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Translate into a sea-query condition for SQL rendering
    ///
    /// The empty filter becomes an empty `Condition::all()`, which renders
    /// to no WHERE clause at all.
    pub fn to_condition(&self) -> Condition {
        let mut condition = Condition::all();
        for term in &self.terms {
            let FilterTerm::Equals { column, value } = term;
            condition = condition.add(Expr::col(Alias::new(*column)).eq(value.clone()));
        }
        condition
    }

    /// Evaluate against a stored row (canonical name → value map)
    ///
    /// A row missing a compared column does not match.
    pub fn matches(&self, row: &HashMap<String, Value>) -> bool {
        self.terms.iter().all(|term| {
            let FilterTerm::Equals { column, value } = term;
            row.get(*column) == Some(value)
        })
    }

    /// Evaluate against a model instance
    pub fn matches_model<M: crate::model::ModelTrait>(&self, model: &M) -> bool {
        self.terms.iter().all(|term| {
            let FilterTerm::Equals { column, value } = term;
            model.get(column).as_ref() == Some(value)
        })
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "(match all)");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

/// Builds filters from example objects against one resolver
///
/// Borrowed from the owning repository for the duration of a single find
/// call; the resolver outlives it, the produced filter does not outlive the
/// call.
pub struct FilterBuilder<'a> {
    resolver: &'a ColumnResolver,
}

impl<'a> FilterBuilder<'a> {
    pub fn new(resolver: &'a ColumnResolver) -> Self {
        Self { resolver }
    }

    /// Build the conjunctive equality filter for an example
    ///
    /// Enumerates the example's fields in declaration order. Absent fields
    /// are skipped. Present fields are resolved through the column
    /// resolver; an unresolvable name fails with
    /// `FilterError::InvalidField` unless `skip_validation` is set, in
    /// which case the field is silently excluded. No partial filter
    /// escapes a failed build.
    ///
    /// # Errors
    ///
    /// * `FilterError::InvalidField` for an unknown field name while
    ///   validation is on.
    /// * `FilterError::Build` when a present field carried a value the
    ///   predicate cannot express (a SQL NULL: null is the absent
    ///   sentinel, so null equality is unrepresentable).
    pub fn build<X: ExampleTrait>(
        &self,
        example: &X,
        skip_validation: bool,
    ) -> Result<Filter, FilterError> {
        let mut terms = Vec::new();
        for (name, value) in example.fields() {
            let Some(value) = value else {
                continue;
            };
            let Some(column) = self.resolver.resolve(name) else {
                if skip_validation {
                    continue;
                }
                return Err(FilterError::InvalidField(name.to_string()));
            };
            if is_null_value(&value) {
                return Err(FilterError::Build(format!(
                    "field {name} is present but carries NULL; null equality is not expressible"
                )));
            }
            terms.push(FilterTerm::Equals { column, value });
        }
        Ok(Filter { terms })
    }
}

/// True when the value is a typed NULL
fn is_null_value(value: &Value) -> bool {
    match value {
        Value::Bool(None)
        | Value::TinyInt(None)
        | Value::SmallInt(None)
        | Value::Int(None)
        | Value::BigInt(None)
        | Value::TinyUnsigned(None)
        | Value::SmallUnsigned(None)
        | Value::Unsigned(None)
        | Value::BigUnsigned(None)
        | Value::Float(None)
        | Value::Double(None)
        | Value::String(None)
        | Value::Bytes(None)
        | Value::Json(None) => true,
        _ => false,
    }
}

/// Render a value for filter display; timestamps use the canonical form
fn render_value(value: &Value) -> String {
    use sea_query::ValueType;

    if is_null_value(value) {
        return "NULL".to_string();
    }
    if let Ok(ts) = <chrono::DateTime<chrono::Utc> as ValueType>::try_from(value.clone()) {
        return timefmt::format_timestamp(&ts);
    }
    if let Ok(s) = <String as ValueType>::try_from(value.clone()) {
        return format!("'{s}'");
    }
    match value {
        Value::Bool(Some(b)) => b.to_string(),
        Value::TinyInt(Some(i)) => i.to_string(),
        Value::SmallInt(Some(i)) => i.to_string(),
        Value::Int(Some(i)) => i.to_string(),
        Value::BigInt(Some(i)) => i.to_string(),
        Value::TinyUnsigned(Some(u)) => u.to_string(),
        Value::SmallUnsigned(Some(u)) => u.to_string(),
        Value::Unsigned(Some(u)) => u.to_string(),
        Value::BigUnsigned(Some(u)) => u.to_string(),
        Value::Float(Some(v)) => v.to_string(),
        Value::Double(Some(v)) => v.to_string(),
        other => format!("{other:?}"),
    }
}
