//! Pure record encoder.
//!
//! # Record Layout
//!
//! ```text
//! ┌──────────────────┬────────────────┬──────────────────────────────┐
//! │ Magic 0xA3 0x95  │ Format id (1)  │ Columns, LE, declared order  │
//! └──────────────────┴────────────────┴──────────────────────────────┘
//! ```
//!
//! Encoding is side-effect free and never allocates: the caller owns
//! the destination buffer and must size it to at least
//! [`encoded_size`] bytes.

use skylog_core::{Error, Result, RECORD_HEADER_SIZE, RECORD_MAGIC};

use crate::model::{ColumnFormat, MessageFormat};
use crate::types::ColumnType;
use crate::value::Value;

/// Total encoded size of a data record of `format`, header included.
pub fn encoded_size(format: &MessageFormat) -> usize {
    format.size() + RECORD_HEADER_SIZE
}

/// Encode one record of `format` from `values` into `buf`.
///
/// Values must be supplied in column order, one per column. Integer
/// values are truncated to the column width; strings are zero-padded
/// and truncated to the column's fixed length (with no trailing NUL
/// guaranteed when the string is exactly as long as the column).
///
/// Returns the number of bytes written, which always equals
/// [`encoded_size`] on success. Fails with `InvalidValue` on an
/// arity or type mismatch or a too-small buffer, and `Unimplemented`
/// for `a` (int16 array) columns.
pub fn encode_message(format: &MessageFormat, values: &[Value], buf: &mut [u8]) -> Result<usize> {
    if values.len() != format.column_count() {
        return Err(Error::InvalidValue);
    }
    if buf.len() < encoded_size(format) {
        return Err(Error::InvalidValue);
    }

    buf[..RECORD_MAGIC.len()].copy_from_slice(&RECORD_MAGIC);
    buf[RECORD_MAGIC.len()] = format.id();

    let mut pos = RECORD_HEADER_SIZE;
    for (column, value) in format.columns().iter().zip(values) {
        pos += encode_column(column, value, &mut buf[pos..])?;
    }

    Ok(pos)
}

fn encode_column(column: &ColumnFormat, value: &Value, out: &mut [u8]) -> Result<usize> {
    match column.column_type() {
        ColumnType::Int8 | ColumnType::UInt8 | ColumnType::Mode => {
            let bits = value.integer_bits().ok_or(Error::InvalidValue)?;
            out[0] = bits as u8;
            Ok(1)
        }
        ColumnType::FixedI16 | ColumnType::FixedU16 | ColumnType::Int16 | ColumnType::UInt16 => {
            let bits = value.integer_bits().ok_or(Error::InvalidValue)?;
            out[..2].copy_from_slice(&(bits as u16).to_le_bytes());
            Ok(2)
        }
        ColumnType::FixedI32
        | ColumnType::FixedU32
        | ColumnType::Geodetic
        | ColumnType::Int32
        | ColumnType::UInt32 => {
            let bits = value.integer_bits().ok_or(Error::InvalidValue)?;
            out[..4].copy_from_slice(&(bits as u32).to_le_bytes());
            Ok(4)
        }
        ColumnType::Int64 | ColumnType::UInt64 => {
            let bits = value.integer_bits().ok_or(Error::InvalidValue)?;
            out[..8].copy_from_slice(&(bits as u64).to_le_bytes());
            Ok(8)
        }
        ColumnType::Float => {
            let v = value.as_f32().ok_or(Error::InvalidValue)?;
            out[..4].copy_from_slice(&v.to_le_bytes());
            Ok(4)
        }
        ColumnType::Double => {
            let v = value.as_f64().ok_or(Error::InvalidValue)?;
            out[..8].copy_from_slice(&v.to_le_bytes());
            Ok(8)
        }
        ColumnType::Char4 | ColumnType::Char16 | ColumnType::Char64 => {
            let width = column.size();
            let s = value.as_str().ok_or(Error::InvalidValue)?;
            let bytes = s.as_bytes();
            let copied = bytes.len().min(width);
            out[..width].fill(0);
            out[..copied].copy_from_slice(&bytes[..copied]);
            Ok(width)
        }
        ColumnType::Int16Array => Err(Error::Unimplemented),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn format_of(codes: &str) -> MessageFormat {
        let mut format = MessageFormat::new(1, "TEST").unwrap();
        let units: String = codes.chars().map(|_| '-').collect();
        format.add_columns("", codes, &units).unwrap();
        format
    }

    #[test]
    fn test_header_and_mixed_columns() {
        let mut format = MessageFormat::new(0x2A, "MIX").unwrap();
        format
            .add_columns("a,b,c,d,e", "BBnNZ", "-----")
            .unwrap();

        let mut buf = [0u8; 256];
        let written = encode_message(
            &format,
            &[
                Value::U8(42),
                Value::U8(8),
                Value::Str("FOO"),
                Value::Str("Id"),
                Value::Str("B"),
            ],
            &mut buf,
        )
        .unwrap();

        assert_eq!(written, format.size() + 3);
        assert_eq!(&buf[..3], &[0xA3, 0x95, 0x2A]);
        assert_eq!(buf[3], 42);
        assert_eq!(buf[4], 8);
        assert_eq!(&buf[5..9], b"FOO\0");
        assert_eq!(&buf[9..11], b"Id");
        assert_eq!(&buf[11..25], &[0u8; 14]);
        assert_eq!(buf[25], b'B');
        assert_eq!(&buf[26..89], &[0u8; 63]);
    }

    #[test]
    fn test_integers_are_little_endian_and_truncated() {
        let format = format_of("bBhHiIqQ");
        let mut buf = [0u8; 64];
        let written = encode_message(
            &format,
            &[
                Value::I32(0x0BAD_CAFE),
                Value::U32(0xDEAD_BEEF),
                Value::I32(0x0BAD_CAFE),
                Value::U32(0xDEAD_BEEF),
                Value::I32(0x0BAD_CAFE),
                Value::U32(0xDEAD_BEEF),
                Value::I64(0x0BAD_CAFE),
                Value::U64(0xDEAD_BEEF),
            ],
            &mut buf,
        )
        .unwrap();

        assert_eq!(written, 33);
        let expected: &[u8] = &[
            0xA3, 0x95, 0x01, // header
            0xFE, // b, truncated
            0xEF, // B, truncated
            0xFE, 0xCA, // h
            0xEF, 0xBE, // H
            0xFE, 0xCA, 0xAD, 0x0B, // i
            0xEF, 0xBE, 0xAD, 0xDE, // I
            0xFE, 0xCA, 0xAD, 0x0B, 0x00, 0x00, 0x00, 0x00, // q
            0xEF, 0xBE, 0xAD, 0xDE, 0x00, 0x00, 0x00, 0x00, // Q
        ];
        assert_eq!(&buf[..written], expected);
    }

    #[test]
    fn test_floats_stored_as_raw_bit_patterns() {
        let format = format_of("fd");
        let mut buf = [0u8; 16];
        let written = encode_message(
            &format,
            &[Value::F32(0.125), Value::F64(0.25)],
            &mut buf,
        )
        .unwrap();

        assert_eq!(written, 15);
        assert_eq!(&buf[3..7], &[0x00, 0x00, 0x00, 0x3E]);
        assert_eq!(&buf[7..15], &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xD0, 0x3F]);
    }

    #[test]
    fn test_string_at_exact_width_has_no_trailing_nul() {
        let format = format_of("n");
        let mut buf = [0u8; 8];
        encode_message(&format, &[Value::Str("ABCD")], &mut buf).unwrap();
        assert_eq!(&buf[3..7], b"ABCD");

        // Over-long strings are truncated at the column width.
        encode_message(&format, &[Value::Str("ABCDEF")], &mut buf).unwrap();
        assert_eq!(&buf[3..7], b"ABCD");
    }

    #[test]
    fn test_int16_array_is_unimplemented() {
        let format = format_of("a");
        let mut buf = [0u8; 128];
        assert_eq!(
            encode_message(&format, &[Value::I16(0)], &mut buf).unwrap_err(),
            Error::Unimplemented
        );
    }

    #[test]
    fn test_arity_and_type_mismatches() {
        let format = format_of("Bf");
        let mut buf = [0u8; 16];

        assert_eq!(
            encode_message(&format, &[Value::U8(1)], &mut buf).unwrap_err(),
            Error::InvalidValue
        );
        assert_eq!(
            encode_message(&format, &[Value::Str("x"), Value::F32(0.0)], &mut buf).unwrap_err(),
            Error::InvalidValue
        );
        assert_eq!(
            encode_message(&format, &[Value::U8(1), Value::U8(2)], &mut buf).unwrap_err(),
            Error::InvalidValue
        );
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        let format = format_of("Q");
        let mut buf = [0u8; 4];
        assert_eq!(
            encode_message(&format, &[Value::U64(0)], &mut buf).unwrap_err(),
            Error::InvalidValue
        );
    }

    // Any format built from encodable codes produces exactly
    // header + sum-of-widths bytes with the fixed magic prefix.
    proptest! {
        #[test]
        fn prop_encoded_length_matches_declared_size(
            codes in proptest::collection::vec(
                proptest::sample::select(vec![
                    'b', 'B', 'M', 'c', 'C', 'h', 'H', 'e', 'E', 'L',
                    'i', 'I', 'f', 'q', 'Q', 'd', 'n', 'N', 'Z',
                ]),
                1..24,
            ),
            id in any::<u8>(),
        ) {
            let mut format = MessageFormat::new(id, "P").unwrap();
            for (i, code) in codes.iter().enumerate() {
                format.add_column(&format!("c{i}"), *code, '-').unwrap();
            }

            let values: Vec<Value> = codes
                .iter()
                .map(|code| match code {
                    'f' | 'd' => Value::F64(1.5),
                    'n' | 'N' | 'Z' => Value::Str("s"),
                    _ => Value::I64(-1),
                })
                .collect();

            let mut buf = vec![0u8; encoded_size(&format)];
            let written = encode_message(&format, &values, &mut buf).unwrap();

            prop_assert_eq!(written, format.size() + 3);
            prop_assert_eq!(&buf[..2], &[0xA3, 0x95]);
            prop_assert_eq!(buf[2], id);
        }
    }
}
