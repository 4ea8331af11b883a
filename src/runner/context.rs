//! Execution context for a single invocation
//!
//! The context carries the diagnostic verbosity and the policy for
//! reading a store file that does not parse.

use colored::Colorize;

/// Verbosity levels for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

/// How to treat a store file whose contents are not valid JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Fail with a decoding error
    #[default]
    Strict,
    /// Warn and start from an empty store
    Lenient,
}

/// Execution context for one invocation
#[derive(Debug, Clone)]
pub struct Context {
    /// Verbosity level
    pub verbosity: Verbosity,

    /// Handling of malformed store files
    pub load_policy: LoadPolicy,
}

impl Context {
    /// Create a new context with default settings
    pub fn new() -> Self {
        Context {
            verbosity: Verbosity::Normal,
            load_policy: LoadPolicy::Strict,
        }
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set the load policy
    pub fn with_load_policy(mut self, policy: LoadPolicy) -> Self {
        self.load_policy = policy;
        self
    }

    /// Print info message
    pub fn print_info(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{} {}", "[INFO]".green(), message);
        }
    }

    /// Print warning message
    pub fn print_warn(&self, message: &str) {
        if self.verbosity >= Verbosity::Quiet {
            eprintln!("{} {}", "[WARN]".yellow(), message);
        }
    }

    /// Print error message
    pub fn print_error(&self, message: &str) {
        if self.verbosity >= Verbosity::Quiet {
            eprintln!("{} {}", "[ERROR]".red(), message);
        }
    }

    /// Print debug message (only in verbose mode)
    pub fn print_debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("{} {}", "[DEBUG]".dimmed(), message);
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
