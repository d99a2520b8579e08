//! Stream abstraction for skylog
//!
//! Log writers and parsers talk to polymorphic byte channels instead of
//! concrete sinks. Two capability traits cover the two directions:
//!
//! - [`OutputStream`]: session bracketing, flush, and a partial `write`
//!   primitive plus a strict `write_all` helper
//! - [`InputStream`]: the mirror image with `read` / `read_exactly`
//!
//! Three backends are provided: a growable in-memory buffer, a borrowed
//! file handle, and a null stream that discards everything. Backends
//! individually decide whether their core primitive blocks; the strict
//! helpers may block indefinitely regardless.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod buffer;
pub mod file;
pub mod null;

pub use buffer::{BufferInputStream, BufferOutputStream};
pub use file::{FileInputStream, FileOutputStream};
pub use null::{NullInputStream, NullOutputStream};

use skylog_core::{Error, Result};

/// Polymorphic output byte channel.
///
/// Only [`write_some`](OutputStream::write_some) must be implemented;
/// session hooks and `flush` default to no-ops, and the partial/strict
/// entry points are provided on top of the primitive.
pub trait OutputStream {
    /// Notifies the backend that it will start receiving records.
    fn begin_session(&mut self) -> Result<()> {
        Ok(())
    }

    /// Notifies the backend that the current writing session has ended.
    fn end_session(&mut self) -> Result<()> {
        Ok(())
    }

    /// Flushes pending writes if the backend is buffered.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// Backend write primitive. May perform a partial write; returns
    /// the count actually transferred. Zero is a valid result while the
    /// stream remains open.
    fn write_some(&mut self, data: &[u8]) -> Result<usize>;

    /// Writes some bytes, reporting the count transferred.
    ///
    /// A zero-length request succeeds trivially without invoking the
    /// backend.
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        if data.is_empty() {
            return Ok(0);
        }
        self.write_some(data)
    }

    /// Writes the whole of `data`, retrying partial writes until done.
    ///
    /// May block indefinitely depending on the backend. The first
    /// backend error is returned verbatim.
    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        let mut remaining = data;
        while !remaining.is_empty() {
            let written = self.write(remaining)?;
            if written > remaining.len() {
                // A backend reporting more progress than requested is broken.
                return Err(Error::Write);
            }
            remaining = &remaining[written..];
        }
        Ok(())
    }
}

/// Polymorphic input byte channel; mirror image of [`OutputStream`].
pub trait InputStream {
    /// Notifies the backend that reading is about to start.
    fn begin_session(&mut self) -> Result<()> {
        Ok(())
    }

    /// Notifies the backend that the current reading session has ended.
    fn end_session(&mut self) -> Result<()> {
        Ok(())
    }

    /// Backend read primitive. May perform a partial read; returns the
    /// count actually transferred. `EndOfStream` once exhausted.
    fn read_some(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Reads some bytes, reporting the count transferred.
    ///
    /// A zero-length request succeeds trivially without invoking the
    /// backend, even on an exhausted stream.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.read_some(buf)
    }

    /// Fills the whole of `buf`, retrying partial reads until done.
    ///
    /// May block indefinitely depending on the backend. `EndOfStream`
    /// or the first backend error is returned verbatim.
    fn read_exactly(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            let count = self.read(&mut buf[filled..])?;
            if count > buf.len() - filled {
                return Err(Error::Read);
            }
            filled += count;
        }
        Ok(())
    }
}
