//! Strata Core Types
//!
//! This crate provides the foundational types used throughout the strata
//! system:
//! - Identity types (RecordId)
//! - Raw value types (the Value enum with all scalar types)
//! - The Fields map and `fields!` construction macro

mod id;
mod value;

pub use id::*;
pub use value::*;
