//! Strata Store
//!
//! Keyed row storage behind the `Table` contract.
//!
//! The session consumes tables exclusively through the `Table` trait; the
//! concrete store is supplied by the surrounding application. `MemoryTable`
//! is the in-memory reference implementation, casting raw fields against
//! its model's schema on the way in.
//!
//! # Module Structure
//!
//! - `table` - The Table trait and the MemoryTable implementation
//! - `error` - Error types for store failures

mod error;
mod table;

pub use error::{StoreError, StoreResult};
pub use table::{MemoryTable, Table};
