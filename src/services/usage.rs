//! Allocated and apparent size queries with platform-specific implementations
//!
//! The allocated size follows the POSIX `st_blocks` convention: the number of
//! 512-byte units reserved on storage for the entry, independent of the
//! filesystem's native block size. Lookups never dereference symbolic links;
//! a link reports the allocation of the link object itself.

use crate::{QueryError, Result};
use std::path::Path;

/// Fixed unit of the POSIX block count field, not the filesystem block size.
pub const BLOCK_UNIT: u64 = 512;

/// Bytes actually allocated on storage for the entry at `path`.
///
/// For sparse files this is smaller than the logical length; indirect-block
/// overhead can push it above. The path is passed to the metadata lookup
/// verbatim; existence and type are decided by the kernel, not validated here.
#[cfg(unix)]
pub fn allocated_size<P: AsRef<Path>>(path: P) -> Result<u64> {
    let path = path.as_ref();
    let stat = rustix::fs::lstat(path)
        .map_err(|errno| QueryError::lstat(&std::io::Error::from(errno), path))?;

    #[allow(clippy::cast_sign_loss)]
    let blocks = stat.st_blocks as u64;
    Ok(blocks * BLOCK_UNIT)
}

/// Logical byte length of the entry at `path`, from the same
/// non-dereferencing lookup as [`allocated_size`].
#[cfg(unix)]
pub fn apparent_size<P: AsRef<Path>>(path: P) -> Result<u64> {
    let path = path.as_ref();
    let stat = rustix::fs::lstat(path)
        .map_err(|errno| QueryError::lstat(&std::io::Error::from(errno), path))?;

    #[allow(clippy::cast_sign_loss)]
    let size = stat.st_size as u64;
    Ok(size)
}

/// Bytes actually allocated on storage (Windows platform).
///
/// Uses `GetCompressedFileSizeW` to get actual disk usage, falling back to
/// the logical length when the call is unavailable for the path.
#[cfg(windows)]
pub fn allocated_size<P: AsRef<Path>>(path: P) -> Result<u64> {
    use std::os::windows::ffi::OsStrExt;
    use windows_sys::Win32::Storage::FileSystem::GetCompressedFileSizeW;

    const INVALID_FILE_SIZE: u32 = 0xFFFF_FFFF;

    let path = path.as_ref();

    // Convert path to wide string (UTF-16)
    let wide: Vec<u16> = path
        .as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect();

    let mut high: u32 = 0;
    let low = unsafe { GetCompressedFileSizeW(wide.as_ptr(), &mut high) };

    if low == INVALID_FILE_SIZE {
        let last = std::io::Error::last_os_error();
        if last.raw_os_error() == Some(0) {
            // Genuine size whose low half happens to be the sentinel
            return Ok(u64::from(high) << 32 | u64::from(low));
        }
        log::debug!(
            "GetCompressedFileSizeW failed for {}: {last}; falling back to logical length",
            path.display()
        );
        return apparent_size(path);
    }

    Ok(u64::from(high) << 32 | u64::from(low))
}

/// Bytes allocated on storage (non-Unix, non-Windows fallback).
///
/// No block-count metadata is available; reports the logical length.
#[cfg(not(any(unix, windows)))]
pub fn allocated_size<P: AsRef<Path>>(path: P) -> Result<u64> {
    apparent_size(path)
}

/// Logical byte length of the entry at `path` (non-Unix platforms).
#[cfg(not(unix))]
pub fn apparent_size<P: AsRef<Path>>(path: P) -> Result<u64> {
    let path = path.as_ref();
    let metadata =
        std::fs::symlink_metadata(path).map_err(|err| QueryError::lstat(&err, path))?;
    Ok(metadata.len())
}
