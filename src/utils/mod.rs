//! Shared helpers for the file operations.

mod read;

pub(crate) use read::{file_key, read_full};

#[cfg(test)]
pub(crate) use read::TrickleReader;
