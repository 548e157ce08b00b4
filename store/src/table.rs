//! The Table contract and the in-memory reference implementation.

use std::collections::BTreeMap;
use strata_core::{Fields, RecordId};
use strata_schema::{Row, Schema, IDENTIFIER_FIELD};

use crate::error::{StoreError, StoreResult};

/// Keyed row store for one model table.
///
/// The mutation engine dispatches to these operations and never consumes
/// their results beyond failure; read accessors exist so collaborators can
/// observe effects without knowing the concrete store.
pub trait Table {
    /// Insert a new row from raw fields.
    fn insert_row(&mut self, fields: &Fields) -> StoreResult<()>;

    /// Insert a row, replacing any existing row with the same identifier.
    fn upsert_row(&mut self, fields: &Fields) -> StoreResult<()>;

    /// Merge raw fields into the row with the given identifier.
    fn update_row(&mut self, id: RecordId, fields: &Fields) -> StoreResult<()>;

    /// Delete the row with the given identifier.
    fn delete_row(&mut self, id: RecordId) -> StoreResult<()>;

    /// Delete every row.
    fn truncate(&mut self);

    /// Number of rows currently stored.
    fn row_count(&self) -> usize;

    /// Check whether a row with the given identifier exists.
    fn contains_row(&self, id: RecordId) -> bool;

    /// Get a row by identifier.
    fn get_row(&self, id: RecordId) -> Option<&Row>;
}

/// In-memory table keyed by row identifier.
///
/// Owns its model's schema and casts raw fields on the way in. Policy for
/// the cases the mutation engine leaves open: inserting a duplicate
/// identifier fails, updating a missing row fails, deleting a missing row
/// is a no-op.
#[derive(Debug)]
pub struct MemoryTable {
    /// Schema used to cast incoming fields.
    schema: Schema,
    /// Row storage.
    rows: BTreeMap<RecordId, Row>,
}

impl MemoryTable {
    /// Create an empty table for the given schema.
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            rows: BTreeMap::new(),
        }
    }

    /// The schema this table casts against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Iterate over all rows in identifier order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.values()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Table for MemoryTable {
    fn insert_row(&mut self, fields: &Fields) -> StoreResult<()> {
        let row = self.schema.cast_values(fields)?;
        if self.rows.contains_key(&row.id) {
            return Err(StoreError::duplicate_row(row.id));
        }

        self.rows.insert(row.id, row);
        Ok(())
    }

    fn upsert_row(&mut self, fields: &Fields) -> StoreResult<()> {
        let row = self.schema.cast_values(fields)?;
        self.rows.insert(row.id, row);
        Ok(())
    }

    fn update_row(&mut self, id: RecordId, fields: &Fields) -> StoreResult<()> {
        // Cast each supplied field before touching the row, so a failed
        // update leaves the row unchanged.
        let mut cast = Vec::with_capacity(fields.len());
        for (name, value) in fields {
            if name == IDENTIFIER_FIELD {
                continue;
            }
            // Fields outside the definition are dropped, as in a full cast.
            if let Some(def) = self.schema.field(name) {
                cast.push((name.clone(), def.cast(Some(value))?));
            }
        }

        let row = self
            .rows
            .get_mut(&id)
            .ok_or(StoreError::row_not_found(id))?;
        for (name, value) in cast {
            row.set(name, value);
        }
        Ok(())
    }

    fn delete_row(&mut self, id: RecordId) -> StoreResult<()> {
        // Deleting an absent row is a no-op.
        self.rows.remove(&id);
        Ok(())
    }

    fn truncate(&mut self) {
        self.rows.clear();
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn contains_row(&self, id: RecordId) -> bool {
        self.rows.contains_key(&id)
    }

    fn get_row(&self, id: RecordId) -> Option<&Row> {
        self.rows.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::fields;
    use strata_schema::{FieldDef, FieldKind, FieldValue, ValidationError};

    fn task_table() -> MemoryTable {
        let schema = Schema::builder()
            .field(FieldDef::new("title", FieldKind::Text).required())
            .field(FieldDef::new("priority", FieldKind::Integer))
            .build()
            .unwrap();
        MemoryTable::new(schema)
    }

    #[test]
    fn test_insert_and_get() {
        // GIVEN
        let mut table = task_table();

        // WHEN
        table
            .insert_row(&fields! { "id" => 1i64, "title" => "Write docs" })
            .unwrap();

        // THEN
        assert_eq!(table.row_count(), 1);
        let row = table.get_row(RecordId::new(1)).unwrap();
        assert_eq!(row.get("title"), Some(&FieldValue::Text("Write docs".into())));
        assert_eq!(row.get("priority"), Some(&FieldValue::Null));
    }

    #[test]
    fn test_insert_duplicate_identifier() {
        // GIVEN
        let mut table = task_table();
        table
            .insert_row(&fields! { "id" => 1i64, "title" => "First" })
            .unwrap();

        // WHEN
        let result = table.insert_row(&fields! { "id" => 1i64, "title" => "Second" });

        // THEN - the original row is untouched
        assert_eq!(
            result.unwrap_err(),
            StoreError::duplicate_row(RecordId::new(1))
        );
        let row = table.get_row(RecordId::new(1)).unwrap();
        assert_eq!(row.get("title"), Some(&FieldValue::Text("First".into())));
    }

    #[test]
    fn test_insert_missing_identifier() {
        // GIVEN
        let mut table = task_table();

        // WHEN
        let result = table.insert_row(&fields! { "title" => "No id" });

        // THEN
        assert_eq!(
            result.unwrap_err(),
            StoreError::Validation(ValidationError::IdentifierRequired)
        );
        assert!(table.is_empty());
    }

    #[test]
    fn test_upsert_replaces_wholesale() {
        // GIVEN
        let mut table = task_table();
        table
            .upsert_row(&fields! { "id" => 1i64, "title" => "First", "priority" => 3i64 })
            .unwrap();

        // WHEN - the second upsert omits priority
        table
            .upsert_row(&fields! { "id" => 1i64, "title" => "Second" })
            .unwrap();

        // THEN - the row is replaced, not merged
        assert_eq!(table.row_count(), 1);
        let row = table.get_row(RecordId::new(1)).unwrap();
        assert_eq!(row.get("title"), Some(&FieldValue::Text("Second".into())));
        assert_eq!(row.get("priority"), Some(&FieldValue::Null));
    }

    #[test]
    fn test_update_merges_fields() {
        // GIVEN
        let mut table = task_table();
        table
            .insert_row(&fields! { "id" => 1i64, "title" => "First", "priority" => 3i64 })
            .unwrap();

        // WHEN
        table
            .update_row(RecordId::new(1), &fields! { "priority" => 5i64 })
            .unwrap();

        // THEN - only the supplied field changes
        let row = table.get_row(RecordId::new(1)).unwrap();
        assert_eq!(row.get("title"), Some(&FieldValue::Text("First".into())));
        assert_eq!(row.get("priority"), Some(&FieldValue::Integer(5)));
    }

    #[test]
    fn test_update_missing_row() {
        // GIVEN
        let mut table = task_table();

        // WHEN
        let result = table.update_row(RecordId::new(9), &fields! { "priority" => 5i64 });

        // THEN
        assert_eq!(
            result.unwrap_err(),
            StoreError::row_not_found(RecordId::new(9))
        );
    }

    #[test]
    fn test_update_bad_value_leaves_row_unchanged() {
        // GIVEN
        let mut table = task_table();
        table
            .insert_row(&fields! { "id" => 1i64, "title" => "First", "priority" => 3i64 })
            .unwrap();

        // WHEN - title is valid, priority is not
        let result = table.update_row(
            RecordId::new(1),
            &fields! { "title" => "Changed", "priority" => "high" },
        );

        // THEN - neither field was applied
        assert!(result.is_err());
        let row = table.get_row(RecordId::new(1)).unwrap();
        assert_eq!(row.get("title"), Some(&FieldValue::Text("First".into())));
        assert_eq!(row.get("priority"), Some(&FieldValue::Integer(3)));
    }

    #[test]
    fn test_delete_row_and_missing_row() {
        // GIVEN
        let mut table = task_table();
        table
            .insert_row(&fields! { "id" => 1i64, "title" => "First" })
            .unwrap();

        // WHEN / THEN - delete removes, deleting again is a no-op
        table.delete_row(RecordId::new(1)).unwrap();
        assert!(!table.contains_row(RecordId::new(1)));
        table.delete_row(RecordId::new(1)).unwrap();
    }

    #[test]
    fn test_truncate() {
        // GIVEN
        let mut table = task_table();
        table
            .insert_row(&fields! { "id" => 1i64, "title" => "First" })
            .unwrap();
        table
            .insert_row(&fields! { "id" => 2i64, "title" => "Second" })
            .unwrap();

        // WHEN
        table.truncate();

        // THEN
        assert!(table.is_empty());
    }
}
