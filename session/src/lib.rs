//! Strata Session
//!
//! Apply typed mutations to named model tables.
//!
//! Responsibilities:
//! - Resolve a mutation's target table from session state
//! - Gate mutation fields through schema validation
//! - Dispatch by mutation kind to the table operation
//!
//! Atomicity is per-mutation: validation completes before any table
//! operation runs, and a failure aborts the mutation entirely.
//!
//! # Module Structure
//!
//! - `session` - The Session and its dispatch-and-apply algorithm
//! - `mutation` - Mutation kinds and the immutable Mutation description
//! - `error` - Error types for mutation application failures

mod error;
mod mutation;
mod session;

pub use error::{SessionError, SessionResult, UnexpectedValueError};
pub use mutation::{Mutation, MutationKind};
pub use session::{Session, State};
