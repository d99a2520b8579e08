//! Message format model and record encoder for skylog
//!
//! This crate owns the data-model half of the codec:
//!
//! - ColumnType: the fixed code → wire-width table of the log convention
//! - ColumnFormat / MessageFormat: named, typed column layouts under a
//!   one-byte message id
//! - Value: tagged argument values supplied in column order
//! - encoder: pure serialization of (format, values) into a caller buffer
//!
//! Formats carry a process-unique [`FormatToken`] identity so that the
//! writer's schema dictionary can cache "already described" formats with
//! an O(1) comparison instead of a structural one.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod encoder;
pub mod model;
pub mod types;
pub mod value;

pub use encoder::{encode_message, encoded_size};
pub use model::{ColumnFormat, FormatToken, MessageFormat};
pub use types::ColumnType;
pub use value::Value;
