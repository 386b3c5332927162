//! Actual Disk Usage Library
//!
//! This library reports the actual on-disk allocation of filesystem entries,
//! derived from the block count in their metadata rather than their logical
//! length. Sparse files report less than their apparent size; symbolic links
//! report the allocation of the link object itself, never the target's.

pub mod cli;
pub mod models;
pub mod services;

pub use models::{ErrorItem, UsageEntry};
pub use services::batch::{Summary, usage_summary};
pub use services::usage::{allocated_size, apparent_size};

use std::path::Path;
use std::result;

/// Error raised when the metadata lookup behind a query fails.
///
/// A single kind covers every failure mode (missing path, permission denied,
/// I/O error, broken intermediate component). The underlying system error
/// text is embedded verbatim, so callers that need to distinguish cases can
/// inspect the message.
#[derive(Debug, Clone)]
pub struct QueryError {
    message: String,
}

impl QueryError {
    /// Construct from a failed lookup, annotated with the offending path.
    pub(crate) fn lstat(err: &std::io::Error, path: &Path) -> Self {
        Self {
            message: format!("lstat failed: {err} ({})", path.display()),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for QueryError {}

pub type Result<T> = result::Result<T, QueryError>;
