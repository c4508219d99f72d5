//! Error types for the cache
//!
//! Provides unified error handling using thiserror. Reads and writes on a
//! running cache never fail; errors only come from construction and from the
//! shell's command parsing.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the crate.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CacheError {
    /// Sweep interval of zero
    #[error("Invalid interval: the sweep interval must be greater than zero")]
    InvalidInterval,

    /// No tokio runtime to spawn the reaper on
    #[error("No runtime: {0}")]
    NoRuntime(String),

    /// Shell input with an unrecognized command word
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Shell command with missing arguments
    #[error("Usage: {0}")]
    Usage(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
