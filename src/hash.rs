//! Chunked content hashing.
//!
//! The file is read in fixed-size blocks and each block is fed into an MD5
//! context. The final digest is encoded as URL-safe base64 with padding,
//! which makes it usable as a file name or map key.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{Error, Result};
use crate::options::HashOptions;
use crate::utils::read_full;

/// Length of the raw digest in bytes.
pub const DIGEST_LEN: usize = 16;

/// Hash a file's contents with default options.
///
/// Returns the URL-safe, padded base64 encoding of the MD5 digest of the
/// file. An empty file yields the digest of empty input,
/// `1B2M2Y8AsgTpgAmY7PhCfg==`.
///
/// # Errors
///
/// - [`Error::Open`] if the file cannot be opened
/// - [`Error::Metadata`] if its size cannot be queried
/// - [`Error::IsADirectory`] if the path is a directory
/// - [`Error::Read`] if a read fails or the file is shorter than its
///   reported size
///
/// # Example
///
/// ```no_run
/// use filehelpers::hash_for_file;
/// use std::path::Path;
///
/// let digest = hash_for_file(Path::new("photo.jpg"))?;
/// println!("{digest}");
/// # Ok::<(), filehelpers::Error>(())
/// ```
pub fn hash_for_file(path: &Path) -> Result<String> {
    hash_for_file_with_options(path, &HashOptions::default())
}

/// Hash a file's contents, reading blocks of `options.chunk_size` bytes.
///
/// See [`hash_for_file`] for the output format and errors.
pub fn hash_for_file_with_options(path: &Path, options: &HashOptions) -> Result<String> {
    let digest = digest_for_file(path, options)?;
    Ok(URL_SAFE.encode(digest))
}

/// Compute the raw MD5 digest of a file's contents.
///
/// Only the number of bytes reported by the metadata query is hashed.
/// Bytes appended while hashing are ignored; a file that shrinks fails
/// with [`Error::Read`].
pub fn digest_for_file(path: &Path, options: &HashOptions) -> Result<[u8; DIGEST_LEN]> {
    let mut file = File::open(path).map_err(|e| Error::Open {
        path: path.to_path_buf(),
        source: e,
    })?;

    let meta = file.metadata().map_err(|e| Error::Metadata {
        path: path.to_path_buf(),
        source: e,
    })?;

    if meta.is_dir() {
        return Err(Error::IsADirectory(path.to_path_buf()));
    }

    let size = meta.len();
    let digest = digest_blocks(&mut file, size, options.chunk_size).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), bytes = size, "hashed file");

    Ok(digest)
}

/// Feed `size` bytes from `reader` into the digest, one block at a time.
fn digest_blocks<R: Read>(
    reader: &mut R,
    size: u64,
    chunk_size: usize,
) -> io::Result<[u8; DIGEST_LEN]> {
    let chunk_size = chunk_size.max(1) as u64;
    let blocks = size.div_ceil(chunk_size);

    // A single buffer sized for the largest block, reused for every block.
    let mut buffer = vec![0u8; chunk_size.min(size) as usize];
    let mut context = md5::Context::new();
    let mut remaining = size;

    for _ in 0..blocks {
        let block_len = remaining.min(chunk_size) as usize;
        let block = &mut buffer[..block_len];

        let read = read_full(reader, block)?;
        if read < block_len {
            let hashed = size - remaining + read as u64;
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("file ended after {hashed} of {size} bytes"),
            ));
        }

        context.consume(&*block);
        remaining -= block_len as u64;
    }

    Ok(context.compute().0)
}
