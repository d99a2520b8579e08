//! Log writer with a per-id schema dictionary.
//!
//! The writer turns `(format, values)` calls into a conformant record
//! stream: before the first data record of any given format instance it
//! emits a FORMAT record describing the layout, exactly once per
//! distinct format identity.
//!
//! # Session lifecycle
//!
//! ```text
//! NoSession ──first write──▶ SessionActive ──end()/drop──▶ NoSession
//! ```
//!
//! The stream's `begin_session` hook runs lazily on the first write;
//! `end` flushes, ends the stream session and is idempotent.
//!
//! # Dictionary semantics
//!
//! The dictionary caches the [`FormatToken`] identity of the last
//! format described for each id, not its structural contents. Writing
//! two structurally identical but distinct `MessageFormat` objects with
//! the same id therefore re-emits the FORMAT record; this keeps the
//! check O(1) per write.

#![warn(missing_docs)]
#![warn(clippy::all)]

use tracing::{debug, trace};

use skylog_core::{Error, Result, FORMAT_MESSAGE_ID, MAX_MESSAGE_LENGTH, NUM_MESSAGE_FORMATS};
use skylog_format::{encode_message, encoded_size, FormatToken, MessageFormat, Value};
use skylog_stream::OutputStream;

/// Log writer producing a self-describing binary record stream.
///
/// The writer borrows its output stream and borrows each supplied
/// [`MessageFormat`] only for the duration of a write call; the
/// dictionary retains format identities (tokens), not references.
pub struct LogWriter<'a> {
    stream: &'a mut dyn OutputStream,
    session_active: bool,
    /// Private FMT schema used to self-describe all other formats.
    fmt_schema: MessageFormat,
    /// Per-id identity of the last format described on the stream.
    dictionary: [Option<FormatToken>; NUM_MESSAGE_FORMATS],
    /// Record assembly buffer, sized to the maximum record length.
    scratch: Vec<u8>,
}

impl<'a> LogWriter<'a> {
    /// Create a writer that logs to the given stream.
    pub fn new(stream: &'a mut dyn OutputStream) -> Result<Self> {
        let mut fmt_schema = MessageFormat::new(FORMAT_MESSAGE_ID, "FMT")?;
        fmt_schema.add_columns("Type,Length,Name,Format,Columns", "BBnNZ", "-----")?;

        let mut scratch = Vec::new();
        scratch
            .try_reserve_exact(MAX_MESSAGE_LENGTH)
            .map_err(|_| Error::OutOfMemory)?;
        scratch.resize(MAX_MESSAGE_LENGTH, 0);

        Ok(LogWriter {
            stream,
            session_active: false,
            fmt_schema,
            dictionary: [None; NUM_MESSAGE_FORMATS],
            scratch,
        })
    }

    /// Whether a writing session is currently active on the stream.
    pub fn session_active(&self) -> bool {
        self.session_active
    }

    /// Write one data record, emitting a FORMAT record first if this
    /// format identity has not been described on the stream yet.
    ///
    /// Values must be supplied in column order, one per column.
    pub fn write(&mut self, format: &MessageFormat, values: &[Value]) -> Result<()> {
        self.ensure_session_started()?;
        self.describe_if_needed(format)?;
        Self::write_record(&mut *self.stream, &mut self.scratch, format, values)
    }

    /// Write an already-encoded data record.
    ///
    /// `bytes` must hold a complete record (header included), e.g. one
    /// produced earlier via [`encode_message`] and reused. When
    /// `length` is zero it is computed from the format's declared size
    /// plus the header size. The schema dictionary protocol applies
    /// exactly as in [`write`](LogWriter::write).
    pub fn write_encoded(
        &mut self,
        format: &MessageFormat,
        bytes: &[u8],
        length: usize,
    ) -> Result<()> {
        let length = if length == 0 {
            encoded_size(format)
        } else {
            length
        };
        if bytes.len() < length {
            return Err(Error::InvalidValue);
        }

        self.ensure_session_started()?;
        self.describe_if_needed(format)?;
        self.stream.write_all(&bytes[..length])
    }

    /// Flush pending bytes through to the stream.
    pub fn flush(&mut self) -> Result<()> {
        self.stream.flush()
    }

    /// End the current session, if any: flush, end the stream session
    /// and clear the active flag. Idempotent.
    pub fn end(&mut self) -> Result<()> {
        if self.session_active {
            debug!("ending log session");
            self.flush()?;
            self.stream.end_session()?;
            self.session_active = false;
        }
        Ok(())
    }

    fn ensure_session_started(&mut self) -> Result<()> {
        if !self.session_active {
            debug!("beginning log session");
            self.stream.begin_session()?;
            self.session_active = true;
        }
        Ok(())
    }

    /// Emit a FORMAT record for `format` unless the dictionary already
    /// holds its identity for this id. The dictionary entry is only
    /// updated after the record reached the stream.
    fn describe_if_needed(&mut self, format: &MessageFormat) -> Result<()> {
        let slot = format.id() as usize;
        if self.dictionary[slot] == Some(format.token()) {
            return Ok(());
        }

        let format_string = format.format_string();
        let column_names = format.column_names(",");
        let record_length = encoded_size(format) as u8;

        debug!(
            id = format.id(),
            name = format.name(),
            length = record_length,
            "writing FORMAT record"
        );

        let values = [
            Value::U8(format.id()),
            Value::U8(record_length),
            Value::Str(format.name()),
            Value::Str(&format_string),
            Value::Str(&column_names),
        ];
        Self::write_record(&mut *self.stream, &mut self.scratch, &self.fmt_schema, &values)?;

        self.dictionary[slot] = Some(format.token());
        Ok(())
    }

    fn write_record(
        stream: &mut dyn OutputStream,
        scratch: &mut [u8],
        format: &MessageFormat,
        values: &[Value],
    ) -> Result<()> {
        if encoded_size(format) > scratch.len() {
            return Err(Error::LimitExceeded);
        }

        let written = encode_message(format, values, scratch)?;
        trace!(id = format.id(), bytes = written, "writing data record");
        stream.write_all(&scratch[..written])
    }
}

impl Drop for LogWriter<'_> {
    fn drop(&mut self) {
        let _ = self.end();
    }
}
