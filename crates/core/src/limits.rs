//! Wire-level constants of the log format
//!
//! These values are fixed by the on-disk log convention and cannot be
//! configured: decoders in the wild hard-code them.

/// Magic bytes prefixing every record on the wire.
pub const RECORD_MAGIC: [u8; 2] = [0xA3, 0x95];

/// Size of the record header (magic + format id) in bytes.
pub const RECORD_HEADER_SIZE: usize = 3;

/// Declared maximum length of a single record, header included.
///
/// Note that the format model does not currently stop a message format
/// from declaring columns whose total width exceeds this value; the
/// constant sizes the writer's scratch buffer, and the writer rejects
/// records that no longer fit it.
pub const MAX_MESSAGE_LENGTH: usize = 256;

/// Maximum length of a message type name, in characters.
pub const MAX_TYPE_NAME_LENGTH: usize = 4;

/// Number of distinct message format ids (the id is a single byte).
pub const NUM_MESSAGE_FORMATS: usize = 256;

/// Reserved message id of the self-describing FMT schema.
pub const FORMAT_MESSAGE_ID: u8 = 0x80;
