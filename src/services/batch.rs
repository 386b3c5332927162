//! Parallel evaluation of usage queries over many paths

use crate::models::{ErrorItem, UsageEntry};
use crate::services::usage;
use rayon::prelude::*;

/// Result of querying a batch of paths.
///
/// Per-path failures never abort the batch; they are collected alongside the
/// successful entries. Both lists preserve the input order.
#[derive(Debug, Default)]
pub struct Summary {
    pub entries: Vec<UsageEntry>,
    pub errors: Vec<ErrorItem>,
}

impl Summary {
    /// Sum of allocated bytes across successful entries.
    #[must_use]
    pub fn total_allocated(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.allocated_bytes))
    }

    /// Sum of apparent bytes across successful entries.
    #[must_use]
    pub fn total_apparent(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.apparent_bytes))
    }
}

/// Query every path concurrently.
///
/// Each path is evaluated independently; there is no shared state between
/// queries beyond result collection, so ordering of execution is irrelevant
/// to the outcome.
#[must_use]
pub fn usage_summary(paths: &[String]) -> Summary {
    log::debug!("batch query over {} path(s)", paths.len());

    let results: Vec<_> = paths
        .par_iter()
        .map(|path| {
            usage::allocated_size(path).and_then(|allocated| {
                usage::apparent_size(path).map(|apparent| UsageEntry {
                    path: path.clone(),
                    allocated_bytes: allocated,
                    apparent_bytes: apparent,
                })
            })
        })
        .collect();

    let mut summary = Summary::default();
    for (path, result) in paths.iter().zip(results) {
        match result {
            Ok(entry) => summary.entries.push(entry),
            Err(err) => summary.errors.push(ErrorItem {
                path: path.clone(),
                message: err.to_string(),
            }),
        }
    }

    summary
}
