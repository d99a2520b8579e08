//! Tagged argument values for the encoder.
//!
//! Records are encoded from a slice of [`Value`]s supplied in column
//! order, replacing the variadic call surface of older implementations
//! of this log convention with one the compiler can check. Integer
//! variants are freely convertible between each other at encode time
//! (narrower columns truncate, exactly as the wire format dictates);
//! strings only fit string columns and floats only fit float columns.

/// One typed argument value, supplied in column order.
///
/// `From` conversions exist for all primitive types so call sites can
/// write `42.into()` or use the `record!`-style helpers of downstream
/// crates without naming variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// Signed 8-bit integer
    I8(i8),
    /// Unsigned 8-bit integer
    U8(u8),
    /// Signed 16-bit integer
    I16(i16),
    /// Unsigned 16-bit integer
    U16(u16),
    /// Signed 32-bit integer
    I32(i32),
    /// Unsigned 32-bit integer
    U32(u32),
    /// Signed 64-bit integer
    I64(i64),
    /// Unsigned 64-bit integer
    U64(u64),
    /// Single-precision float
    F32(f32),
    /// Double-precision float
    F64(f64),
    /// Borrowed string for fixed-length string columns
    Str(&'a str),
}

impl Value<'_> {
    /// The value as a 64-bit two's-complement bit pattern, if it is an
    /// integer variant. Narrowing to a column width truncates low bits,
    /// matching the wire format's modular semantics.
    pub(crate) fn integer_bits(&self) -> Option<i64> {
        match *self {
            Value::I8(v) => Some(v as i64),
            Value::U8(v) => Some(v as i64),
            Value::I16(v) => Some(v as i64),
            Value::U16(v) => Some(v as i64),
            Value::I32(v) => Some(v as i64),
            Value::U32(v) => Some(v as i64),
            Value::I64(v) => Some(v),
            Value::U64(v) => Some(v as i64),
            _ => None,
        }
    }

    /// The value as a single-precision float, if it is a float variant.
    pub(crate) fn as_f32(&self) -> Option<f32> {
        match *self {
            Value::F32(v) => Some(v),
            Value::F64(v) => Some(v as f32),
            _ => None,
        }
    }

    /// The value as a double-precision float, if it is a float variant.
    pub(crate) fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::F32(v) => Some(v as f64),
            Value::F64(v) => Some(v),
            _ => None,
        }
    }

    /// The value as a string, if it is the string variant.
    pub(crate) fn as_str(&self) -> Option<&str> {
        match *self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i8> for Value<'_> {
    fn from(v: i8) -> Self {
        Value::I8(v)
    }
}

impl From<u8> for Value<'_> {
    fn from(v: u8) -> Self {
        Value::U8(v)
    }
}

impl From<i16> for Value<'_> {
    fn from(v: i16) -> Self {
        Value::I16(v)
    }
}

impl From<u16> for Value<'_> {
    fn from(v: u16) -> Self {
        Value::U16(v)
    }
}

impl From<i32> for Value<'_> {
    fn from(v: i32) -> Self {
        Value::I32(v)
    }
}

impl From<u32> for Value<'_> {
    fn from(v: u32) -> Self {
        Value::U32(v)
    }
}

impl From<i64> for Value<'_> {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<u64> for Value<'_> {
    fn from(v: u64) -> Self {
        Value::U64(v)
    }
}

impl From<f32> for Value<'_> {
    fn from(v: f32) -> Self {
        Value::F32(v)
    }
}

impl From<f64> for Value<'_> {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Value::Str(v)
    }
}
