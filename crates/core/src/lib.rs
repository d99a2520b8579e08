//! Core types for skylog
//!
//! This crate defines the foundational pieces shared by every other
//! crate in the workspace:
//! - Error: the closed error enumeration returned by all fallible operations
//! - Result: workspace-wide result alias
//! - Wire-level limit constants (record magic, header size, format id range)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;

pub use error::{Error, Result};
pub use limits::{
    FORMAT_MESSAGE_ID, MAX_MESSAGE_LENGTH, MAX_TYPE_NAME_LENGTH, NUM_MESSAGE_FORMATS,
    RECORD_HEADER_SIZE, RECORD_MAGIC,
};
