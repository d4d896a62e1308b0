//! Error types for filehelpers.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur while hashing, copying, or comparing files, and the
//! [`Result`] type alias.
//!
//! # Error Categories
//!
//! | Category | Errors |
//! |----------|--------|
//! | Open | [`Error::Open`], [`Error::Create`] |
//! | Stat | [`Error::Metadata`] |
//! | Read | [`Error::Read`] |
//! | Write | [`Error::Write`], [`Error::NoSpace`] |
//! | Domain | [`Error::CompareDirectory`], [`Error::IsADirectory`] |

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for filehelpers operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Check if an IO error indicates "no space left on device".
///
/// This helper function detects storage-full conditions across platforms.
///
/// # Platform Support
///
/// | Platform | Error Detection |
/// |----------|-----------------|
/// | Unix | `ENOSPC` (errno 28) |
/// | Windows | `ERROR_DISK_FULL` (0x70) |
///
/// # Example
///
/// ```
/// use std::io;
/// use filehelpers::is_no_space_error;
///
/// let error = io::Error::new(io::ErrorKind::StorageFull, "disk full");
/// assert!(is_no_space_error(&error));
/// ```
pub fn is_no_space_error(error: &io::Error) -> bool {
    if error.kind() == io::ErrorKind::StorageFull {
        return true;
    }

    #[cfg(unix)]
    {
        const ENOSPC: i32 = 28;
        if let Some(raw_error) = error.raw_os_error() {
            return raw_error == ENOSPC;
        }
    }

    #[cfg(windows)]
    {
        const ERROR_DISK_FULL: i32 = 112;
        if let Some(raw_error) = error.raw_os_error() {
            return raw_error == ERROR_DISK_FULL;
        }
    }

    false
}

/// Errors that can occur during file operations.
///
/// Every variant names the path the operation was working on when it
/// failed. Use [`Error::path`] to get it back and [`Error::io_error`] to
/// inspect the underlying OS error.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The path could not be opened for reading
    #[error("Failed to open {path}: {source}")]
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// The destination could not be created or truncated
    #[error("Failed to create {path}: {source}")]
    Create {
        /// Destination path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Metadata query failed on an already opened file
    #[error("Failed to read metadata of {path}: {source}")]
    Metadata {
        /// Path of the opened file
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// A read failed, or the file ended earlier than its reported size
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path being read
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// A write or flush to the destination failed
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// No space left on device while writing the destination
    ///
    /// The destination is left in place with the bytes written so far.
    #[error("No space left on device writing {path} ({bytes_copied} bytes written)")]
    NoSpace {
        /// Destination path
        path: PathBuf,
        /// Bytes successfully written before the failure
        bytes_copied: u64,
        /// Underlying error
        source: io::Error,
    },

    /// One side of a comparison is a directory
    #[error("Cannot compare directories: {0}")]
    CompareDirectory(PathBuf),

    /// A file operation was given a directory
    #[error("Is a directory: {0}")]
    IsADirectory(PathBuf),
}

impl Error {
    /// The path involved in the failed operation.
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. }
            | Self::Create { path, .. }
            | Self::Metadata { path, .. }
            | Self::Read { path, .. }
            | Self::Write { path, .. }
            | Self::NoSpace { path, .. } => path,
            Self::CompareDirectory(path) | Self::IsADirectory(path) => path,
        }
    }

    /// The underlying IO error, if this error wraps one.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::Open { source, .. }
            | Self::Create { source, .. }
            | Self::Metadata { source, .. }
            | Self::Read { source, .. }
            | Self::Write { source, .. }
            | Self::NoSpace { source, .. } => Some(source),
            Self::CompareDirectory(_) | Self::IsADirectory(_) => None,
        }
    }

    /// Classify a failed write, splitting out storage-full conditions.
    pub(crate) fn write(path: &Path, bytes_copied: u64, source: io::Error) -> Self {
        if is_no_space_error(&source) {
            Self::NoSpace {
                path: path.to_path_buf(),
                bytes_copied,
                source,
            }
        } else {
            Self::Write {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}
