//! Configuration options for the file operations.
//!
//! Each operation has its own options type: [`HashOptions`],
//! [`CopyOptions`], and [`CompareOptions`]. The plain entry points
//! ([`hash_for_file`](crate::hash_for_file), [`copy_file`](crate::copy_file),
//! [`are_files_identical`](crate::are_files_identical)) use the defaults.
//!
//! # Example
//!
//! ```
//! use filehelpers::{CompareOptions, CopyOptions, HashOptions};
//!
//! let hash = HashOptions::default().with_chunk_size(4096);
//! let copy = CopyOptions::default().with_buffer_size(1 << 20).without_fsync();
//! let compare = CompareOptions::default().with_buffer_size(8192);
//! ```

/// Default block size fed into the digest, in bytes.
pub const DEFAULT_HASH_CHUNK_SIZE: usize = 256;

/// Default lockstep read size for comparisons, in bytes.
pub const DEFAULT_COMPARE_BUFFER_SIZE: usize = 1024;

/// Default streaming buffer for copies, in bytes.
pub const DEFAULT_COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Options for [`hash_for_file_with_options`](crate::hash_for_file_with_options).
///
/// The chunk size only changes how the file is read. The resulting digest
/// is the same for every chunk size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HashOptions {
    /// Size of each block read from the file (default: 256)
    pub chunk_size: usize,
}

impl Default for HashOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_HASH_CHUNK_SIZE,
        }
    }
}

impl HashOptions {
    /// Set the block size
    ///
    /// Value is clamped to at least 1.
    #[must_use]
    pub fn with_chunk_size(mut self, n: usize) -> Self {
        self.chunk_size = n.max(1);
        self
    }
}

/// Options for [`copy_file_with_options`](crate::copy_file_with_options).
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `buffer_size` | 64 KiB | Bytes moved per read/write |
/// | `fsync` | `true` | Sync the destination before returning |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CopyOptions {
    /// Size of the streaming buffer (default: 64 KiB)
    pub buffer_size: usize,

    /// Whether to sync the destination to disk after writing (default: true)
    ///
    /// Write-back failures that the OS reports late only surface through
    /// the sync. Without it, such failures are lost when the handle closes.
    pub fsync: bool,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_COPY_BUFFER_SIZE,
            fsync: true,
        }
    }
}

impl CopyOptions {
    /// Set the streaming buffer size
    ///
    /// Value is clamped to at least 1.
    #[must_use]
    pub fn with_buffer_size(mut self, n: usize) -> Self {
        self.buffer_size = n.max(1);
        self
    }

    /// Disable fsync for faster (but less durable) copies
    #[must_use]
    pub fn without_fsync(mut self) -> Self {
        self.fsync = false;
        self
    }
}

/// Options for [`are_files_identical_with_options`](crate::are_files_identical_with_options).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompareOptions {
    /// Bytes read from each side per step (default: 1024)
    pub buffer_size: usize,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_COMPARE_BUFFER_SIZE,
        }
    }
}

impl CompareOptions {
    /// Set the per-side read size
    ///
    /// Value is clamped to at least 1.
    #[must_use]
    pub fn with_buffer_size(mut self, n: usize) -> Self {
        self.buffer_size = n.max(1);
        self
    }
}
