//! Invocation configuration
//!
//! This module turns command-line tokens into the flag map and the typed
//! invocation handed to the dispatcher.

pub mod args;
pub mod types;

// Re-export main types
pub use args::*;
pub use types::*;
