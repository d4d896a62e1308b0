//! Byte-for-byte file comparison.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::options::CompareOptions;
use crate::utils::{file_key, read_full};

/// Check whether two files have identical contents, with default options.
///
/// Files of different sizes are reported as not identical without reading
/// them. Otherwise both files are read in lockstep, 1024 bytes per side at
/// a time, and the first differing block ends the comparison.
///
/// # Errors
///
/// - [`Error::CompareDirectory`] if either path is a directory
/// - [`Error::Open`] / [`Error::Metadata`] if either file cannot be opened
///   or queried
/// - [`Error::Read`] if a read fails on either side
///
/// # Example
///
/// ```no_run
/// use filehelpers::are_files_identical;
/// use std::path::Path;
///
/// if are_files_identical(Path::new("a.jpg"), Path::new("b.jpg"))? {
///     println!("duplicate");
/// }
/// # Ok::<(), filehelpers::Error>(())
/// ```
pub fn are_files_identical(lhs: &Path, rhs: &Path) -> Result<bool> {
    are_files_identical_with_options(lhs, rhs, &CompareOptions::default())
}

/// Check whether two files have identical contents.
///
/// See [`are_files_identical`] for the semantics and errors.
pub fn are_files_identical_with_options(
    lhs: &Path,
    rhs: &Path,
    options: &CompareOptions,
) -> Result<bool> {
    let mut lhs_file = open(lhs)?;
    let mut rhs_file = open(rhs)?;

    let lhs_meta = lhs_file.metadata().map_err(|e| Error::Metadata {
        path: lhs.to_path_buf(),
        source: e,
    })?;
    let rhs_meta = rhs_file.metadata().map_err(|e| Error::Metadata {
        path: rhs.to_path_buf(),
        source: e,
    })?;

    if lhs_meta.is_dir() {
        return Err(Error::CompareDirectory(lhs.to_path_buf()));
    }
    if rhs_meta.is_dir() {
        return Err(Error::CompareDirectory(rhs.to_path_buf()));
    }

    if lhs_meta.len() != rhs_meta.len() {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            lhs = %lhs.display(),
            rhs = %rhs.display(),
            lhs_len = lhs_meta.len(),
            rhs_len = rhs_meta.len(),
            "sizes differ"
        );
        return Ok(false);
    }

    let lhs_key = file_key(&lhs_meta);
    if lhs_key.is_some() && lhs_key == file_key(&rhs_meta) {
        #[cfg(feature = "tracing")]
        tracing::trace!(lhs = %lhs.display(), rhs = %rhs.display(), "same file");
        return Ok(true);
    }

    let identical = compare_contents(
        &mut lhs_file,
        lhs,
        &mut rhs_file,
        rhs,
        options.buffer_size,
    )?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        lhs = %lhs.display(),
        rhs = %rhs.display(),
        bytes = lhs_meta.len(),
        identical,
        "compared files"
    );

    Ok(identical)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| Error::Open {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read both sides in lockstep and compare them block by block.
///
/// Each buffer is filled completely (or up to end-of-file) before the
/// comparison, so a short read on one side never leaves stale bytes from a
/// previous block in the compared region.
fn compare_contents<L: Read, R: Read>(
    lhs: &mut L,
    lhs_path: &Path,
    rhs: &mut R,
    rhs_path: &Path,
    buffer_size: usize,
) -> Result<bool> {
    let buffer_size = buffer_size.max(1);
    let mut lhs_buf = vec![0u8; buffer_size];
    let mut rhs_buf = vec![0u8; buffer_size];
    #[cfg(feature = "tracing")]
    let mut offset: u64 = 0;

    loop {
        let lhs_len = read_full(lhs, &mut lhs_buf).map_err(|e| Error::Read {
            path: lhs_path.to_path_buf(),
            source: e,
        })?;
        let rhs_len = read_full(rhs, &mut rhs_buf).map_err(|e| Error::Read {
            path: rhs_path.to_path_buf(),
            source: e,
        })?;

        // Also catches one side ending before the other
        if lhs_buf[..lhs_len] != rhs_buf[..rhs_len] {
            #[cfg(feature = "tracing")]
            tracing::trace!(offset, "contents differ in block");
            return Ok(false);
        }

        // Equal and short: both sides are at end-of-file
        if lhs_len < buffer_size {
            return Ok(true);
        }

        #[cfg(feature = "tracing")]
        {
            offset += lhs_len as u64;
        }
    }
}
