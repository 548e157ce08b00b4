//! Session manager.

use std::collections::HashMap;
use std::sync::Arc;
use strata_schema::ModelType;
use strata_store::Table;

use crate::error::{SessionResult, UnexpectedValueError};
use crate::mutation::{Mutation, MutationKind};

/// Session state: one table per state key.
pub type State = HashMap<String, Box<dyn Table>>;

/// A strata session.
///
/// Owns the process-scoped state and the registered model types, and
/// applies one mutation at a time. The caller serializes access; the
/// session provides no concurrency control of its own.
pub struct Session {
    /// Table storage by state key.
    state: State,
    /// Registered model types.
    models: Vec<Arc<dyn ModelType>>,
}

impl Session {
    /// Create a session over an initial state.
    pub fn new(state: State) -> Self {
        Self {
            state,
            models: Vec::new(),
        }
    }

    /// Get the session state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Get a table by state key.
    pub fn table(&self, key: &str) -> Option<&dyn Table> {
        self.state.get(key).map(|table| table.as_ref())
    }

    /// Get the registered model types.
    pub fn models(&self) -> &[Arc<dyn ModelType>] {
        &self.models
    }

    /// Register model types.
    pub fn add_models(&mut self, models: Vec<Arc<dyn ModelType>>) {
        self.models = models;
    }

    /// Shallow merge into the session state.
    ///
    /// Top-level keys from `partial` overwrite the current entries
    /// wholesale; nested table contents are never merged. Keys absent from
    /// `partial` are left untouched.
    pub fn merge_into_state(&mut self, partial: State) {
        self.state.extend(partial);
    }

    /// Apply one mutation: resolve the target table, validate the fields,
    /// then dispatch by kind.
    ///
    /// Validation completes before any table operation runs, so a failure
    /// leaves the table untouched.
    pub fn apply_mutation(&mut self, mutation: &Mutation) -> SessionResult<()> {
        let model = mutation.model();

        let table_key = model
            .table_key()
            .ok_or(UnexpectedValueError::MissingTablePointer)?;
        if !self.state.contains_key(table_key) {
            return Err(UnexpectedValueError::MissingTablePointer.into());
        }

        if let Some(fields) = mutation.fields() {
            model.schema().assert_allows_fields(model.name(), fields)?;
        }

        let Some(table) = self.state.get_mut(table_key) else {
            return Err(UnexpectedValueError::MissingTablePointer.into());
        };

        match mutation.kind() {
            MutationKind::Insert => Self::apply_insert(table.as_mut(), mutation),
            MutationKind::Upsert => Self::apply_upsert(table.as_mut(), mutation),
            MutationKind::Update => Self::apply_update(table.as_mut(), mutation),
            MutationKind::Delete => Self::apply_delete(table.as_mut(), mutation),
        }
    }

    fn apply_insert(table: &mut dyn Table, mutation: &Mutation) -> SessionResult<()> {
        match mutation.fields() {
            Some(fields) => Ok(table.insert_row(fields)?),
            None => Err(UnexpectedValueError::fields_required(MutationKind::Insert).into()),
        }
    }

    fn apply_upsert(table: &mut dyn Table, mutation: &Mutation) -> SessionResult<()> {
        match mutation.fields() {
            Some(fields) => Ok(table.upsert_row(fields)?),
            None => Err(UnexpectedValueError::fields_required(MutationKind::Upsert).into()),
        }
    }

    fn apply_update(table: &mut dyn Table, mutation: &Mutation) -> SessionResult<()> {
        // Fields are checked before the identifier: a mutation missing both
        // reports the fields error.
        let Some(fields) = mutation.fields() else {
            return Err(UnexpectedValueError::fields_required(MutationKind::Update).into());
        };
        let Some(id) = mutation.id() else {
            return Err(UnexpectedValueError::identifier_required(MutationKind::Update).into());
        };

        Ok(table.update_row(id, fields)?)
    }

    fn apply_delete(table: &mut dyn Table, mutation: &Mutation) -> SessionResult<()> {
        // The whole-table flag wins over the identifier.
        if mutation.applies_to_whole_table() {
            table.truncate();
            Ok(())
        } else if let Some(id) = mutation.id() {
            Ok(table.delete_row(id)?)
        } else {
            Err(UnexpectedValueError::identifier_required(MutationKind::Delete).into())
        }
    }
}
