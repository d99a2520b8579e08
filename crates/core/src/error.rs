//! Error types for skylog
//!
//! All fallible operations across the workspace return one kind from a
//! single closed enumeration. We use `thiserror` for automatic `Display`
//! and `Error` trait implementations.
//!
//! The first failure short-circuits and is returned verbatim to the
//! immediate caller; there are no internal retries except the strict
//! stream helpers, which only retry to make forward progress.

use thiserror::Error;

/// Result type alias for skylog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error kinds surfaced by the codec, streams and writer.
///
/// The enumeration is closed: callers can match exhaustively and the
/// set mirrors what the wire-level protocol can actually report, so
/// variants carry no payloads and the whole enum is `Copy` and `Eq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Generic failure code
    #[error("failure")]
    Failure,

    /// Not enough memory to grow an internal buffer
    #[error("out of memory")]
    OutOfMemory,

    /// Invalid value (unknown type code, mismatched argument, over-long name)
    #[error("invalid value")]
    InvalidValue,

    /// A hard limit of the log format was exceeded
    #[error("limit exceeded")]
    LimitExceeded,

    /// Error while reading from a stream
    #[error("read error")]
    Read,

    /// Error while writing to a stream
    #[error("write error")]
    Write,

    /// Generic I/O error not attributable to a single read or write
    #[error("I/O error")]
    Io,

    /// The requested feature is not implemented
    #[error("unimplemented")]
    Unimplemented,

    /// The stream is exhausted or closed
    #[error("end of stream")]
    EndOfStream,
}
