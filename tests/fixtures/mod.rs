//! Test fixtures for deterministic testing

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Create a file with `len` bytes fully written and synced to storage,
/// so block counts are stable under delayed allocation.
pub fn write_file_sync(dir: &Path, name: &str, len: usize) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    let mut file = fs::File::create(&path)?;
    file.write_all(&vec![b'a'; len])?;
    file.sync_all()?;
    Ok(path)
}

/// Create a sparse file: large logical length, no bytes written
#[cfg(unix)]
pub fn create_sparse_file(dir: &Path, name: &str, len: u64) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    let file = fs::File::create(&path)?;
    file.set_len(len)?;
    file.sync_all()?;
    Ok(path)
}
