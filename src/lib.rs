//! Recman - a JSON-file backed record manager
//!
//! Recman loads user records from a JSON file, applies a single add, remove,
//! list or find operation, and writes the store back when it changed.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod store;

// Re-export commonly used types
pub use error::{RecmanError, Result};

/// Current version of Recman
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
