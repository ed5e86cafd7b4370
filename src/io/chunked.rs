//! Chunked file reading

use crate::error::{BiotabError, BiotabResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default chunk size in bytes
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Lazy, finite, non-restartable iterator of fixed-size text chunks over a
/// file
///
/// Each call to `next` reads until the chunk is full or end-of-file; the
/// final chunk may be shorter. Read errors are yielded through the iterator
/// unchanged. The reader never rewinds.
pub struct ChunkedReader {
    file: File,
    chunk_size: usize,
    done: bool,
}

impl ChunkedReader {
    /// Open a file for chunked reading with the default chunk size
    pub fn open<P: AsRef<Path>>(path: P) -> BiotabResult<Self> {
        Self::with_chunk_size(path, DEFAULT_CHUNK_SIZE)
    }

    /// Open a file for chunked reading with an explicit chunk size
    pub fn with_chunk_size<P: AsRef<Path>>(path: P, chunk_size: usize) -> BiotabResult<Self> {
        if chunk_size == 0 {
            return Err(BiotabError::InvalidInput(
                "chunk size must be non-zero".to_string(),
            ));
        }
        let file = File::open(path)?;
        Ok(ChunkedReader {
            file,
            chunk_size,
            done: false,
        })
    }

    fn read_chunk(&mut self) -> BiotabResult<Option<String>> {
        let mut buf = vec![0u8; self.chunk_size];
        let mut filled = 0;

        // a single read may return less than a full chunk; keep going until
        // the chunk is full or the file ends
        while filled < self.chunk_size {
            match self.file.read(&mut buf[filled..])? {
                0 => break,
                n => filled += n,
            }
        }

        if filled == 0 {
            return Ok(None);
        }

        buf.truncate(filled);
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

impl Iterator for ChunkedReader {
    type Item = BiotabResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_chunk() {
            Ok(Some(chunk)) => Some(Ok(chunk)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
