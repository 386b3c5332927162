//! Integration test for concurrent queries

use crate::fixtures::write_file_sync;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn parallel_queries_match_sequential_baseline() {
    let temp = TempDir::new().unwrap();
    let paths: Vec<PathBuf> = (0..8)
        .map(|i| write_file_sync(temp.path(), &format!("file{i}.bin"), 4096 * (i + 1)).unwrap())
        .collect();

    let baseline: Vec<u64> = paths
        .iter()
        .map(|p| adu::allocated_size(p).unwrap())
        .collect();

    let concurrent: Vec<u64> = std::thread::scope(|s| {
        let handles: Vec<_> = paths
            .iter()
            .map(|p| s.spawn(move || adu::allocated_size(p).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(concurrent, baseline);
}

#[test]
fn batch_summary_matches_sequential_baseline() {
    let temp = TempDir::new().unwrap();
    let paths: Vec<String> = (0..8)
        .map(|i| {
            write_file_sync(temp.path(), &format!("batch{i}.bin"), 1024 * (i + 1))
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect();

    let summary = adu::usage_summary(&paths);

    assert!(summary.errors.is_empty());
    assert_eq!(summary.entries.len(), paths.len());
    for (entry, path) in summary.entries.iter().zip(&paths) {
        assert_eq!(&entry.path, path);
        assert_eq!(entry.allocated_bytes, adu::allocated_size(path).unwrap());
        assert_eq!(entry.apparent_bytes, adu::apparent_size(path).unwrap());
    }
}
