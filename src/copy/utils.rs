//! Streaming helpers for file copy operations.

use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::{Error, Result};

// =============================================================================
// File content copying
// =============================================================================

/// Stream every byte from `src` into `dst` through a single reused buffer.
///
/// Read failures are reported against `src_path` and write failures against
/// `dst_path`, so the caller can tell which side broke. The destination is
/// flushed before returning.
pub(crate) fn copy_file_contents<R: Read, W: Write>(
    src: &mut R,
    src_path: &Path,
    dst: &mut W,
    dst_path: &Path,
    buffer_size: usize,
) -> Result<u64> {
    let mut buffer = vec![0u8; buffer_size.max(1)];
    let mut copied: u64 = 0;

    loop {
        let n = match src.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(Error::Read {
                    path: src_path.to_path_buf(),
                    source: e,
                });
            }
        };

        // Count partial writes so a failure reports exactly what reached dst
        let mut pending = &buffer[..n];
        while !pending.is_empty() {
            match dst.write(pending) {
                Ok(0) => {
                    return Err(Error::write(
                        dst_path,
                        copied,
                        io::Error::from(io::ErrorKind::WriteZero),
                    ));
                }
                Ok(written) => {
                    copied += written as u64;
                    pending = &pending[written..];
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(Error::write(dst_path, copied, e)),
            }
        }
    }

    dst.flush().map_err(|e| Error::write(dst_path, copied, e))?;

    Ok(copied)
}

// =============================================================================
// Tests
// =============================================================================
