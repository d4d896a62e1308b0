//! Single file copy operations.
//!
//! This module provides functions for copying the bytes of one file into
//! another path, creating or truncating the destination.

use crate::error::{Error, Result};
use crate::options::CopyOptions;
use std::fs::File;
use std::path::Path;

use super::utils::copy_file_contents;

/// Copy a single file with default options.
///
/// Creates `dst` (truncating it if it exists) and writes a byte-for-byte
/// copy of `src` into it. The destination is synced to disk before the
/// function returns.
///
/// # Arguments
///
/// * `src` - Source file path
/// * `dst` - Destination file path
///
/// # Returns
///
/// The number of bytes copied.
///
/// # Errors
///
/// Returns an error if:
/// - Source cannot be opened ([`Error::Open`]); the destination is untouched
/// - Source is a directory ([`Error::IsADirectory`]); the destination is untouched
/// - Destination cannot be created ([`Error::Create`])
/// - A read fails ([`Error::Read`])
/// - A write, flush, or sync fails ([`Error::Write`], or [`Error::NoSpace`]
///   when the device is full)
///
/// A failure after the destination was created leaves the bytes written so
/// far in place.
///
/// # Limitations
///
/// `src` and `dst` naming the same file is not detected. Creating the
/// destination truncates the source before it is read, so the file ends up
/// empty.
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64> {
    copy_file_with_options(src, dst, &CopyOptions::default())
}

/// Copy a single file.
///
/// See [`copy_file`] for the semantics and errors.
pub fn copy_file_with_options(src: &Path, dst: &Path, options: &CopyOptions) -> Result<u64> {
    let mut src_file = File::open(src).map_err(|e| Error::Open {
        path: src.to_path_buf(),
        source: e,
    })?;

    let src_meta = src_file.metadata().map_err(|e| Error::Metadata {
        path: src.to_path_buf(),
        source: e,
    })?;

    // Check before creating the destination so nothing is left behind
    if src_meta.is_dir() {
        return Err(Error::IsADirectory(src.to_path_buf()));
    }

    let mut dst_file = File::create(dst).map_err(|e| Error::Create {
        path: dst.to_path_buf(),
        source: e,
    })?;

    let bytes_copied = copy_file_contents(
        &mut src_file,
        src,
        &mut dst_file,
        dst,
        options.buffer_size,
    )?;

    // Ensure data is on disk; late write-back errors only surface here.
    // Devices and pipes have nothing to sync and reject fsync with EINVAL.
    if options.fsync {
        let dst_meta = dst_file.metadata().map_err(|e| Error::Metadata {
            path: dst.to_path_buf(),
            source: e,
        })?;
        if dst_meta.is_file() {
            dst_file
                .sync_all()
                .map_err(|e| Error::write(dst, bytes_copied, e))?;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        src = %src.display(),
        dst = %dst.display(),
        bytes = bytes_copied,
        "copied file"
    );

    Ok(bytes_copied)
}

// =============================================================================
// Tests
// =============================================================================
