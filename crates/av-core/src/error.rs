//! Error types for `av-core`.

use thiserror::Error;

/// Errors produced by the core types.
///
/// Downstream crates define their own error enums and wrap or convert these
/// where they cross a crate boundary.
#[derive(Debug, Error)]
pub enum AvError {
    /// Invalid configuration value (e.g. a non-positive field dimension).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A textual value failed to parse (heading letter, command string).
    #[error("parse error: {0}")]
    Parse(String),
}

/// Convenience alias used throughout the workspace.
pub type AvResult<T> = Result<T, AvError>;
