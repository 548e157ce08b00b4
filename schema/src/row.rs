//! The typed row produced by casting a raw field map.

use std::collections::BTreeMap;
use strata_core::RecordId;

use crate::field::FieldValue;

/// A typed table row.
///
/// Always carries its identifier, plus one typed value per schema-defined
/// field. Fields the schema does not define never appear here.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Row identifier.
    pub id: RecordId,
    /// Typed field values, one entry per schema-defined field.
    pub fields: BTreeMap<String, FieldValue>,
}

impl Row {
    /// Create a new row with the given identifier and typed fields.
    pub fn new(id: RecordId, fields: BTreeMap<String, FieldValue>) -> Self {
        Self { id, fields }
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Set a field value.
    pub fn set(&mut self, name: String, value: FieldValue) {
        self.fields.insert(name, value);
    }

    /// Number of typed fields, not counting the identifier.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}
