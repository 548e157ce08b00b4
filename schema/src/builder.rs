//! SchemaBuilder for constructing an immutable Schema.

use std::collections::BTreeMap;
use thiserror::Error;

use crate::field::FieldDef;
use crate::schema::{Schema, IDENTIFIER_FIELD};

/// Errors that can occur during schema construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Duplicate field name: {0}")]
    DuplicateFieldName(String),

    #[error("Field name '{0}' is reserved for the identifier")]
    ReservedFieldName(String),
}

/// Builder for constructing an immutable Schema.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    /// Fields in declaration order; validated on build.
    fields: Vec<FieldDef>,
}

impl SchemaBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field definition.
    pub fn field(mut self, def: FieldDef) -> Self {
        self.fields.push(def);
        self
    }

    /// Validate the definitions and build the schema.
    ///
    /// The identifier field is implicit on every row and may not be
    /// declared; duplicate names are rejected.
    pub fn build(self) -> Result<Schema, SchemaError> {
        let mut definition = BTreeMap::new();

        for def in self.fields {
            if def.name == IDENTIFIER_FIELD {
                return Err(SchemaError::ReservedFieldName(def.name));
            }
            if definition.contains_key(&def.name) {
                return Err(SchemaError::DuplicateFieldName(def.name));
            }
            definition.insert(def.name.clone(), def);
        }

        Ok(Schema::new(definition))
    }
}
