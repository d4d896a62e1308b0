//! # filehelpers
//!
//! Small, synchronous file utilities for deduplication and backup tooling.
//!
//! ## Operations
//!
//! - **Content hash**: [`hash_for_file`] reads a file in 256-byte blocks,
//!   feeds them into an MD5 digest, and returns the URL-safe base64 encoding
//! - **Copy**: [`copy_file`] streams a file's bytes into a new (or truncated)
//!   destination and syncs it to disk
//! - **Compare**: [`are_files_identical`] checks two files for byte-for-byte
//!   equality, short-circuiting on differing sizes
//!
//! ## Quick Start
//!
//! ```no_run
//! use filehelpers::{are_files_identical, copy_file, hash_for_file};
//! use std::path::Path;
//!
//! let src = Path::new("photo.jpg");
//! let dst = Path::new("backup/photo.jpg");
//!
//! let bytes = copy_file(src, dst)?;
//! assert!(are_files_identical(src, dst)?);
//! assert_eq!(hash_for_file(src)?, hash_for_file(dst)?);
//! println!("Copied {bytes} bytes");
//! # Ok::<(), filehelpers::Error>(())
//! ```
//!
//! ## Tuning
//!
//! Every operation has a `*_with_options` variant taking [`HashOptions`],
//! [`CopyOptions`], or [`CompareOptions`]:
//!
//! ```no_run
//! use filehelpers::{copy_file_with_options, CopyOptions};
//! use std::path::Path;
//!
//! let options = CopyOptions::default()
//!     .with_buffer_size(1 << 20)  // 1 MiB reads
//!     .without_fsync();           // Faster but less durable
//!
//! copy_file_with_options(Path::new("in.iso"), Path::new("out.iso"), &options)?;
//! # Ok::<(), filehelpers::Error>(())
//! ```
//!
//! ## Resource Handling
//!
//! All operations are blocking and share no state. File handles are owned
//! by the call that opened them and closed on every return path, including
//! errors. Nothing is retried; the first error is returned.
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Structured logging with tracing crate |
//! | `serde` | Serialize/Deserialize for the option types |
//! | `full` | Enable all optional features |

#![cfg_attr(docsrs, feature(doc_cfg))]

mod compare;
mod copy;
mod error;
mod hash;
mod options;
mod utils;

pub use compare::{are_files_identical, are_files_identical_with_options};
pub use copy::{copy_file, copy_file_with_options};
pub use error::{Error, Result, is_no_space_error};
pub use hash::{DIGEST_LEN, digest_for_file, hash_for_file, hash_for_file_with_options};
pub use options::{
    CompareOptions, CopyOptions, DEFAULT_COMPARE_BUFFER_SIZE, DEFAULT_COPY_BUFFER_SIZE,
    DEFAULT_HASH_CHUNK_SIZE, HashOptions,
};
