//! File copy operations.
//!
//! This module streams a source file's bytes into a freshly created (or
//! truncated) destination file.

mod file;
mod utils;

// Re-export public API
pub use file::{copy_file, copy_file_with_options};
