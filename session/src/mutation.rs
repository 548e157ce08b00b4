//! Mutation kinds and the immutable Mutation description.

use std::fmt;
use std::sync::Arc;
use strata_core::{Fields, RecordId};
use strata_schema::ModelType;

/// The closed set of mutation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Insert,
    Upsert,
    Update,
    Delete,
}

impl MutationKind {
    /// Returns the wire name of this kind, as used in error text.
    pub fn name(&self) -> &'static str {
        match self {
            MutationKind::Insert => "INSERT",
            MutationKind::Upsert => "UPSERT",
            MutationKind::Update => "UPDATE",
            MutationKind::Delete => "DELETE",
        }
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Immutable description of one change against a model table.
///
/// Produced by a caller outside the engine; the engine only reads it.
/// The convenience constructors build shape-correct mutations; the general
/// [`Mutation::new`] accepts any combination, leaving shape enforcement to
/// the session.
#[derive(Clone)]
pub struct Mutation {
    kind: MutationKind,
    model: Arc<dyn ModelType>,
    id: Option<RecordId>,
    fields: Option<Fields>,
    whole_table: bool,
}

impl Mutation {
    /// Create a mutation from its parts.
    pub fn new(
        kind: MutationKind,
        model: Arc<dyn ModelType>,
        id: Option<RecordId>,
        fields: Option<Fields>,
        whole_table: bool,
    ) -> Self {
        Self {
            kind,
            model,
            id,
            fields,
            whole_table,
        }
    }

    /// Insert a new row with the given fields.
    pub fn insert(model: Arc<dyn ModelType>, fields: Fields) -> Self {
        Self::new(MutationKind::Insert, model, None, Some(fields), false)
    }

    /// Insert or replace a row with the given fields.
    pub fn upsert(model: Arc<dyn ModelType>, fields: Fields) -> Self {
        Self::new(MutationKind::Upsert, model, None, Some(fields), false)
    }

    /// Merge the given fields into the row with the given identifier.
    pub fn update(model: Arc<dyn ModelType>, id: RecordId, fields: Fields) -> Self {
        Self::new(MutationKind::Update, model, Some(id), Some(fields), false)
    }

    /// Delete the row with the given identifier.
    pub fn delete(model: Arc<dyn ModelType>, id: RecordId) -> Self {
        Self::new(MutationKind::Delete, model, Some(id), None, false)
    }

    /// Delete every row of the model's table.
    pub fn truncate(model: Arc<dyn ModelType>) -> Self {
        Self::new(MutationKind::Delete, model, None, None, true)
    }

    /// The mutation kind.
    pub fn kind(&self) -> MutationKind {
        self.kind
    }

    /// The target model type.
    pub fn model(&self) -> &dyn ModelType {
        self.model.as_ref()
    }

    /// The target row identifier, if any.
    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    /// The raw fields carried by this mutation, if any.
    pub fn fields(&self) -> Option<&Fields> {
        self.fields.as_ref()
    }

    /// Whether this mutation applies to the whole table.
    pub fn applies_to_whole_table(&self) -> bool {
        self.whole_table
    }
}

impl fmt::Debug for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mutation")
            .field("kind", &self.kind)
            .field("model", &self.model.name())
            .field("id", &self.id)
            .field("fields", &self.fields)
            .field("whole_table", &self.whole_table)
            .finish()
    }
}
