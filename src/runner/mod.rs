//! Operation execution
//!
//! This module runs one requested operation against the record store.

pub mod context;
pub mod dispatch;

// Re-export main types
pub use context::*;
pub use dispatch::*;
