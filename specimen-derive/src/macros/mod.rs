//! Macro implementations

mod model;

pub use model::derive_specimen_model;
