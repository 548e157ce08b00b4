//! Store error types.

use strata_core::RecordId;
use strata_schema::ValidationError;
use thiserror::Error;

/// Result type for table operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during table operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Casting the supplied fields against the table's schema failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Insert of an identifier that is already present.
    #[error("Row already exists: {id}")]
    DuplicateRow { id: RecordId },

    /// Update of an identifier that is not present.
    #[error("Row not found: {id}")]
    RowNotFound { id: RecordId },
}

impl StoreError {
    pub fn duplicate_row(id: RecordId) -> Self {
        Self::DuplicateRow { id }
    }

    pub fn row_not_found(id: RecordId) -> Self {
        Self::RowNotFound { id }
    }
}
