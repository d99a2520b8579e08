//! In-memory buffer backends.
//!
//! [`BufferOutputStream`] owns a growable byte array: writes never
//! block and capacity doubles whenever the remaining space cannot hold
//! the next write, so a single write always lands contiguously.
//! [`BufferInputStream`] drains a byte array sequentially from a cursor
//! and reports `EndOfStream` once the cursor reaches the end.

use tracing::trace;

use skylog_core::{Error, Result};

use crate::{InputStream, OutputStream};

/// Initial capacity of a fresh output buffer, in bytes.
const INITIAL_CAPACITY: usize = 16;

/// Output stream writing to an owned, growable in-memory buffer.
pub struct BufferOutputStream {
    data: Vec<u8>,
    /// Allocated capacity tier; doubled on demand. Tracked separately
    /// from `Vec::capacity` so the growth schedule is deterministic.
    capacity: usize,
}

impl BufferOutputStream {
    /// Create an empty buffer stream.
    pub fn new() -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(INITIAL_CAPACITY)
            .map_err(|_| Error::OutOfMemory)?;
        Ok(BufferOutputStream {
            data,
            capacity: INITIAL_CAPACITY,
        })
    }

    /// Read-only view of everything written so far.
    ///
    /// The slice is invalidated by the next write; copy it out if the
    /// contents must outlive the stream.
    pub fn contents(&self) -> &[u8] {
        &self.data
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consume the stream, returning the written bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    fn grow(&mut self) -> Result<()> {
        let next = self.capacity * 2;
        self.data
            .try_reserve_exact(next - self.data.len())
            .map_err(|_| Error::OutOfMemory)?;
        trace!(from = self.capacity, to = next, "buffer stream grown");
        self.capacity = next;
        Ok(())
    }
}

impl OutputStream for BufferOutputStream {
    fn write_some(&mut self, data: &[u8]) -> Result<usize> {
        while self.capacity - self.data.len() < data.len() {
            self.grow()?;
        }
        self.data.extend_from_slice(data);
        Ok(data.len())
    }
}

/// Input stream draining an in-memory byte array.
pub struct BufferInputStream {
    data: Vec<u8>,
    pos: usize,
}

impl BufferInputStream {
    /// Create a stream reading from the given bytes.
    pub fn new(data: Vec<u8>) -> Self {
        BufferInputStream { data, pos: 0 }
    }

    /// Number of unread bytes left.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

impl From<Vec<u8>> for BufferInputStream {
    fn from(data: Vec<u8>) -> Self {
        BufferInputStream::new(data)
    }
}

impl InputStream for BufferInputStream {
    fn read_some(&mut self, buf: &mut [u8]) -> Result<usize> {
        if self.pos >= self.data.len() {
            return Err(Error::EndOfStream);
        }
        let count = buf.len().min(self.remaining());
        buf[..count].copy_from_slice(&self.data[self.pos..self.pos + count]);
        self.pos += count;
        Ok(count)
    }
}
