//! Read helpers that tolerate short reads.
//!
//! `Read::read` may return fewer bytes than requested even before
//! end-of-file. The hashing and comparison loops need whole blocks, so
//! they go through [`read_full`] instead of calling `read` directly.

use std::fs::Metadata;
use std::io::{self, Read};

/// Read from `reader` until `buf` is full or end-of-file is reached.
///
/// Returns the number of bytes placed at the front of `buf`. A value
/// smaller than `buf.len()` means the reader is at end-of-file.
/// Interrupted reads are retried.
pub(crate) fn read_full<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Identity of an open file based on device and inode.
///
/// Two handles with the same key refer to the same file. Returns `None`
/// on platforms without a cheap identity, in which case callers fall back
/// to reading the contents.
#[cfg(unix)]
pub(crate) fn file_key(meta: &Metadata) -> Option<(u64, u64)> {
    use std::os::unix::fs::MetadataExt;
    Some((meta.dev(), meta.ino()))
}

#[cfg(not(unix))]
pub(crate) fn file_key(_meta: &Metadata) -> Option<(u64, u64)> {
    None
}

/// Test reader that hands out at most `step` bytes per call and reports
/// one `Interrupted` error before the first read.
#[cfg(test)]
pub(crate) struct TrickleReader<'a> {
    data: &'a [u8],
    step: usize,
    interrupted: bool,
}

#[cfg(test)]
impl<'a> TrickleReader<'a> {
    pub(crate) fn new(data: &'a [u8], step: usize) -> Self {
        Self {
            data,
            step: step.max(1),
            interrupted: false,
        }
    }
}

#[cfg(test)]
impl Read for TrickleReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.interrupted {
            self.interrupted = true;
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        let n = self.step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}
