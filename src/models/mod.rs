//! Data models for per-path usage reports and errors

use serde::{Deserialize, Serialize};

/// Usage report for a single path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageEntry {
    pub path: String,
    /// Bytes actually allocated on storage (block count * 512)
    pub allocated_bytes: u64,
    /// Logical byte length of the entry
    pub apparent_bytes: u64,
}

/// Represents a path whose query failed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorItem {
    pub path: String,
    pub message: String,
}
