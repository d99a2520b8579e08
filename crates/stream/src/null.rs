//! Null stream backends.
//!
//! The output direction swallows everything while reporting full
//! progress; the input direction is permanently exhausted. Useful for
//! measuring encode cost without I/O and for writer lifecycle tests.

use skylog_core::{Error, Result};

use crate::{InputStream, OutputStream};

/// Output stream that discards all data.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullOutputStream;

impl NullOutputStream {
    /// Create a discarding output stream.
    pub fn new() -> Self {
        NullOutputStream
    }
}

impl OutputStream for NullOutputStream {
    fn write_some(&mut self, data: &[u8]) -> Result<usize> {
        Ok(data.len())
    }
}

/// Input stream that is always at end of stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullInputStream;

impl NullInputStream {
    /// Create a permanently exhausted input stream.
    pub fn new() -> Self {
        NullInputStream
    }
}

impl InputStream for NullInputStream {
    fn read_some(&mut self, _buf: &mut [u8]) -> Result<usize> {
        Err(Error::EndOfStream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_output_reports_full_progress() {
        let mut stream = NullOutputStream::new();
        assert_eq!(stream.write(b"discarded").unwrap(), 9);
        stream.write_all(&[0u8; 4096]).unwrap();
        stream.flush().unwrap();
    }

    #[test]
    fn test_null_input_is_always_exhausted() {
        let mut stream = NullInputStream::new();
        let mut buf = [0u8; 4];
        assert_eq!(stream.read(&mut buf).unwrap_err(), Error::EndOfStream);
        assert_eq!(stream.read_exactly(&mut buf).unwrap_err(), Error::EndOfStream);
        // Zero-length requests still succeed trivially.
        assert_eq!(stream.read(&mut []).unwrap(), 0);
    }
}
