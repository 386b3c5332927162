//! Integration test for non-dereferencing symlink queries

use crate::fixtures::write_file_sync;
use std::os::unix::fs::symlink;
use tempfile::TempDir;

#[test]
fn symlink_reports_its_own_allocation_not_the_targets() {
    let temp = TempDir::new().unwrap();
    let target = write_file_sync(temp.path(), "target.bin", 1024 * 1024).unwrap();
    let link = temp.path().join("link");
    symlink(&target, &link).unwrap();

    let target_allocated = adu::allocated_size(&target).unwrap();
    let link_allocated = adu::allocated_size(&link).unwrap();

    assert!(target_allocated >= 1024 * 1024);
    assert!(
        link_allocated < target_allocated,
        "link reported {link_allocated}, target {target_allocated}"
    );
    // Link storage is at most one filesystem block, often zero (inline)
    assert!(link_allocated <= 8 * 512);
}

#[test]
fn dangling_symlink_still_resolves() {
    let temp = TempDir::new().unwrap();
    let link = temp.path().join("dangling");
    symlink(temp.path().join("missing"), &link).unwrap();

    assert!(adu::allocated_size(&link).is_ok());
}
