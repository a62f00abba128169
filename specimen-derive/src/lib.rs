//! Procedural macros for the specimen query-by-example layer
//!
//! This crate provides the `SpecimenModel` derive.

mod attributes;
mod macros;
mod type_conversion;

use proc_macro::TokenStream;

/// Derive macro for specimen entities
///
/// Generates, for a named struct with a `#[table_name = "..."]` attribute:
/// - the `ModelTrait` implementation (compile-time `FIELDS` descriptor
///   table plus the `get`/`to_values`/`from_values` accessors),
/// - the `FromRow` implementation decoding a `may_postgres::Row` by
///   canonical field name,
/// - a `{Name}Example` companion struct whose fields are `Option`-wrapped,
///   with its `ExampleTrait` implementation and a `{Name}::example()`
///   convenience constructor.
///
/// # Field attributes
///
/// - `#[primary_key]` marks the primary-key field.
/// - `#[column_name = "alias"]` declares the alias accepted when building
///   filters; storage naming stays canonical.
///
/// See `specimen-derive/tests/test_derive.rs` for usage examples.
#[proc_macro_derive(SpecimenModel, attributes(table_name, primary_key, column_name))]
pub fn derive_specimen_model(input: TokenStream) -> TokenStream {
    macros::derive_specimen_model(input)
}
