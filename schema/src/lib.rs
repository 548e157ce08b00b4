//! Strata Schema
//!
//! Field-level typing and validation for model tables.
//!
//! Responsibilities:
//! - Cast raw field maps into typed rows (`Schema::cast_values`)
//! - Gate proposed mutation field sets against the definition
//!   (`Schema::assert_allows_fields`)
//! - Describe models through the `ModelType` capability trait
//!
//! # Module Structure
//!
//! - `schema` - The Schema definition and its casting/validation operations
//! - `builder` - SchemaBuilder for constructing an immutable Schema
//! - `field` - Field kinds, definitions and typed field values
//! - `model` - The ModelType trait and the ready-made ModelDef
//! - `row` - The typed row produced by casting
//! - `error` - Validation error types

mod builder;
mod error;
mod field;
mod model;
mod row;
mod schema;

pub use builder::{SchemaBuilder, SchemaError};
pub use error::{ValidationError, ValidationResult};
pub use field::{FieldDef, FieldKind, FieldValue};
pub use model::{ModelDef, ModelType};
pub use row::Row;
pub use schema::{Schema, IDENTIFIER_FIELD};
