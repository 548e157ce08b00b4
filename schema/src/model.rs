//! The ModelType capability trait.
//!
//! A model type describes one named, schema-backed table: its display name
//! (used only in error text), its schema, and the state key under which its
//! table lives. The session consumes models exclusively through this trait.

use crate::schema::Schema;

/// Capability interface for one concrete model.
pub trait ModelType {
    /// Display name, used only in error messages.
    fn name(&self) -> &str;

    /// The model's schema.
    fn schema(&self) -> &Schema;

    /// The state key under which this model's table lives, if mapped.
    fn table_key(&self) -> Option<&str>;
}

/// Ready-made model type definition.
#[derive(Debug, Clone)]
pub struct ModelDef {
    name: String,
    schema: Schema,
    table_key: Option<String>,
}

impl ModelDef {
    /// Create a model with no table mapping.
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
            table_key: None,
        }
    }

    /// Map this model's table to a state key.
    pub fn with_table_key(mut self, key: impl Into<String>) -> Self {
        self.table_key = Some(key.into());
        self
    }
}

impl ModelType for ModelDef {
    fn name(&self) -> &str {
        &self.name
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn table_key(&self) -> Option<&str> {
        self.table_key.as_deref()
    }
}
