//! Session error types.

use strata_schema::ValidationError;
use strata_store::StoreError;
use thiserror::Error;

use crate::mutation::MutationKind;

/// Errors raised when the engine cannot proceed structurally: no table
/// pointer for a model, or a mutation missing the inputs its kind requires.
///
/// Terminal from the engine's perspective - these indicate a wiring or
/// caller bug, never a transient condition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnexpectedValueError {
    #[error("Cannot apply mutation to Model without table pointer.")]
    MissingTablePointer,

    #[error("Fields are required for {kind} MutationType.")]
    FieldsRequired { kind: MutationKind },

    #[error("Model ID cannot be null for {kind} MutationType.")]
    IdentifierRequired { kind: MutationKind },
}

impl UnexpectedValueError {
    pub fn fields_required(kind: MutationKind) -> Self {
        Self::FieldsRequired { kind }
    }

    pub fn identifier_required(kind: MutationKind) -> Self {
        Self::IdentifierRequired { kind }
    }
}

/// Errors that can abort mutation application.
///
/// The underlying kinds propagate unchanged: their message text is the
/// contract surface, so no prefix is added here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Schema validation rejected the mutation's fields.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The engine could not proceed structurally.
    #[error(transparent)]
    UnexpectedValue(#[from] UnexpectedValueError),

    /// The table operation itself failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
