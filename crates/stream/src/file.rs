//! File-backed stream backends.
//!
//! Both directions borrow an externally owned [`std::fs::File`] and
//! never close it; lifetime and position of the handle remain the
//! caller's business.

use std::fs::File;
use std::io::{ErrorKind, Read, Write};

use skylog_core::{Error, Result};

use crate::{InputStream, OutputStream};

/// Output stream writing to a borrowed file handle.
///
/// A write either transfers the exact requested byte count or fails
/// with `Write`; the OS-level short-write retry happens here rather
/// than in the strict helpers.
pub struct FileOutputStream<'a> {
    file: &'a mut File,
}

impl<'a> FileOutputStream<'a> {
    /// Create a stream writing to `file`. The handle is not closed
    /// when the stream is dropped.
    pub fn new(file: &'a mut File) -> Self {
        FileOutputStream { file }
    }
}

impl OutputStream for FileOutputStream<'_> {
    fn write_some(&mut self, data: &[u8]) -> Result<usize> {
        self.file.write_all(data).map_err(|_| Error::Write)?;
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush().map_err(|_| Error::Write)
    }
}

/// Input stream reading from a borrowed file handle.
pub struct FileInputStream<'a> {
    file: &'a mut File,
}

impl<'a> FileInputStream<'a> {
    /// Create a stream reading from `file`. The handle is not closed
    /// when the stream is dropped.
    pub fn new(file: &'a mut File) -> Self {
        FileInputStream { file }
    }
}

impl InputStream for FileInputStream<'_> {
    fn read_some(&mut self, buf: &mut [u8]) -> Result<usize> {
        match self.file.read(buf) {
            // A zero-byte result on a nonzero request is a clean EOF.
            Ok(0) => Err(Error::EndOfStream),
            Ok(count) => Ok(count),
            // An interrupted read moved nothing but the stream is open.
            Err(e) if e.kind() == ErrorKind::Interrupted => Ok(0),
            Err(_) => Err(Error::Read),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Seek, SeekFrom};
    use tempfile::tempfile;

    #[test]
    fn test_file_write_then_read_back() {
        let mut file = tempfile().unwrap();

        {
            let mut stream = FileOutputStream::new(&mut file);
            stream.write_all(b"flight log data").unwrap();
            stream.flush().unwrap();
        }

        file.seek(SeekFrom::Start(0)).unwrap();

        let mut stream = FileInputStream::new(&mut file);
        let mut buf = [0u8; 15];
        stream.read_exactly(&mut buf).unwrap();
        assert_eq!(&buf, b"flight log data");

        assert_eq!(stream.read(&mut buf).unwrap_err(), Error::EndOfStream);
    }

    #[test]
    fn test_handle_survives_the_stream() {
        let mut file = tempfile().unwrap();
        {
            let mut stream = FileOutputStream::new(&mut file);
            stream.write_all(b"xyz").unwrap();
        }
        // The borrowed handle is still usable after the stream is gone.
        file.seek(SeekFrom::Start(0)).unwrap();
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).unwrap();
        assert_eq!(contents, b"xyz");
    }

    #[test]
    fn test_short_read_before_eof_is_reported_as_is() {
        let mut file = tempfile().unwrap();
        {
            let mut stream = FileOutputStream::new(&mut file);
            stream.write_all(b"abc").unwrap();
        }
        file.seek(SeekFrom::Start(0)).unwrap();

        let mut stream = FileInputStream::new(&mut file);
        let mut buf = [0u8; 16];
        let count = stream.read(&mut buf).unwrap();
        assert_eq!(count, 3);
        assert_eq!(&buf[..3], b"abc");
    }
}
