//! Shared data model for SmartAI content: storage rows and catalog snapshots.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_catalog};
