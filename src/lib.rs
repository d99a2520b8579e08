//! skylog: self-describing binary flight log codec
//!
//! A compact, dictionary-based binary log format for embedded and
//! resource-constrained telemetry producers. Message layouts are typed,
//! named column sets under a one-byte id; the writer emits a FORMAT
//! record describing each layout exactly once per distinct schema
//! identity, so the log stream carries its own schema.
//!
//! # Example
//!
//! ```
//! use skylog::{BufferOutputStream, LogWriter, MessageFormat, Value};
//!
//! # fn main() -> skylog::Result<()> {
//! let mut format = MessageFormat::new(1, "GPS")?;
//! format.add_columns("Lat,Lng,Alt", "LLf", "DDm")?;
//!
//! let mut stream = BufferOutputStream::new()?;
//! let mut writer = LogWriter::new(&mut stream)?;
//! writer.write(
//!     &format,
//!     &[
//!         Value::I32(473_977_420),
//!         Value::I32(191_223_160),
//!         Value::F32(118.5),
//!     ],
//! )?;
//! writer.end()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use skylog_core::{
    Error, Result, FORMAT_MESSAGE_ID, MAX_MESSAGE_LENGTH, MAX_TYPE_NAME_LENGTH,
    NUM_MESSAGE_FORMATS, RECORD_HEADER_SIZE, RECORD_MAGIC,
};
pub use skylog_format::{
    encode_message, encoded_size, ColumnFormat, ColumnType, FormatToken, MessageFormat, Value,
};
pub use skylog_stream::{
    BufferInputStream, BufferOutputStream, FileInputStream, FileOutputStream, InputStream,
    NullInputStream, NullOutputStream, OutputStream,
};
pub use skylog_writer::LogWriter;

/// Version of the skylog library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
