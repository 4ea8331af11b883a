//! Record storage
//!
//! This module holds the user record type, the in-memory store keyed by
//! record id, and the JSON file persistence for that store.

pub mod collection;
pub mod persist;
pub mod record;

// Re-export main types
pub use collection::*;
pub use persist::*;
pub use record::*;
