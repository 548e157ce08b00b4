//! The Schema - immutable field definitions and casting for one model.

use std::collections::BTreeMap;
use strata_core::{Fields, RecordId, Value};

use crate::builder::SchemaBuilder;
use crate::error::{ValidationError, ValidationResult};
use crate::field::FieldDef;
use crate::row::Row;

/// The identifier field name. It is implicit on every row and never a key
/// in a schema definition.
pub const IDENTIFIER_FIELD: &str = "id";

/// Field definitions for one model.
///
/// Constructed once per model at startup via [`Schema::builder`]; immutable
/// thereafter.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Field definitions by name. Never contains the identifier field.
    definition: BTreeMap<String, FieldDef>,
}

impl Schema {
    /// Start building a schema (use SchemaBuilder for construction).
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub(crate) fn new(definition: BTreeMap<String, FieldDef>) -> Self {
        Self { definition }
    }

    /// Get a field definition by name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.definition.get(name)
    }

    /// Check if this schema defines a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.definition.contains_key(name)
    }

    /// Get all defined field names.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.definition.keys().map(|s| s.as_str())
    }

    /// Get the number of defined fields, not counting the identifier.
    pub fn field_count(&self) -> usize {
        self.definition.len()
    }

    /// Cast a raw field map into a typed row.
    ///
    /// The map must carry a truthy identifier value. Every defined field is
    /// cast through its kind's rule; absent raw values are accepted or
    /// rejected by the field definition itself. Input keys outside the
    /// definition are silently dropped - rejecting them is the job of
    /// [`Schema::assert_allows_fields`].
    pub fn cast_values(&self, values: &Fields) -> ValidationResult<Row> {
        let id = self.cast_identifier(values)?;

        let mut fields = BTreeMap::new();
        for (name, def) in &self.definition {
            fields.insert(name.clone(), def.cast(values.get(name))?);
        }

        Ok(Row::new(id, fields))
    }

    /// Assert that every proposed field is either the identifier or defined
    /// by this schema.
    ///
    /// A gate, not a transform: the first offending field name is reported
    /// and nothing is returned on success. The empty field set passes.
    pub fn assert_allows_fields(&self, model_name: &str, fields: &Fields) -> ValidationResult<()> {
        let superfluous = fields
            .keys()
            .find(|key| key.as_str() != IDENTIFIER_FIELD && !self.has_field(key));

        match superfluous {
            Some(field) => Err(ValidationError::superfluous_field(model_name, field)),
            None => Ok(()),
        }
    }

    fn cast_identifier(&self, values: &Fields) -> ValidationResult<RecordId> {
        let raw = values
            .get(IDENTIFIER_FIELD)
            .filter(|value| value.is_truthy())
            .ok_or(ValidationError::IdentifierRequired)?;

        match raw {
            Value::Int(id) if *id > 0 => Ok(RecordId::new(*id as u64)),
            other => Err(ValidationError::invalid_identifier(other.to_string())),
        }
    }
}
