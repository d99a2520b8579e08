//! Column type codes of the log convention.
//!
//! Each column of a message format is described by a single ASCII code
//! that fixes both the wire width and the decoding rule:
//!
//! | code  | width | meaning                                          |
//! |-------|-------|--------------------------------------------------|
//! | b/B/M | 1     | signed/unsigned 8-bit / mode enum                |
//! | c/C   | 2     | fixed-point ×0.01, signed/unsigned short         |
//! | h/H   | 2     | signed/unsigned 16-bit                           |
//! | e/E   | 4     | fixed-point ×0.01, signed/unsigned int           |
//! | L     | 4     | fixed-point ×1e-7 (geodetic coordinate)          |
//! | i/I   | 4     | signed/unsigned 32-bit                           |
//! | f     | 4     | IEEE single-precision float                      |
//! | q/Q   | 8     | signed/unsigned 64-bit                           |
//! | d     | 8     | IEEE double-precision float                      |
//! | n     | 4     | fixed string, max 4 bytes                        |
//! | N     | 16    | fixed string, max 16 bytes                       |
//! | Z     | 64    | fixed string, max 64 bytes                       |
//! | a     | 64    | 16-bit int ×32 array (recognized, not encodable) |

/// Wire type of a single log column.
///
/// The set is closed by the log convention; constructing a column with
/// any other code fails with `InvalidValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// `b`: signed 8-bit integer
    Int8,
    /// `B`: unsigned 8-bit integer
    UInt8,
    /// `M`: flight mode, stored as an unsigned 8-bit integer
    Mode,
    /// `c`: fixed-point real as signed 16-bit, multiplier 0.01
    FixedI16,
    /// `C`: fixed-point real as unsigned 16-bit, multiplier 0.01
    FixedU16,
    /// `h`: signed 16-bit integer
    Int16,
    /// `H`: unsigned 16-bit integer
    UInt16,
    /// `e`: fixed-point real as signed 32-bit, multiplier 0.01
    FixedI32,
    /// `E`: fixed-point real as unsigned 32-bit, multiplier 0.01
    FixedU32,
    /// `L`: fixed-point real as signed 32-bit, multiplier 1e-7 (geodetic)
    Geodetic,
    /// `i`: signed 32-bit integer
    Int32,
    /// `I`: unsigned 32-bit integer
    UInt32,
    /// `f`: IEEE single-precision float, stored as its raw bit pattern
    Float,
    /// `q`: signed 64-bit integer
    Int64,
    /// `Q`: unsigned 64-bit integer
    UInt64,
    /// `d`: IEEE double-precision float, stored as its raw bit pattern
    Double,
    /// `n`: fixed-length string, max 4 bytes
    Char4,
    /// `N`: fixed-length string, max 16 bytes
    Char16,
    /// `Z`: fixed-length string, max 64 bytes
    Char64,
    /// `a`: array of 32 signed 16-bit integers; encoding is unimplemented
    Int16Array,
}

impl ColumnType {
    /// Parse a type code character. Returns `None` for unknown codes.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'b' => Some(ColumnType::Int8),
            'B' => Some(ColumnType::UInt8),
            'M' => Some(ColumnType::Mode),
            'c' => Some(ColumnType::FixedI16),
            'C' => Some(ColumnType::FixedU16),
            'h' => Some(ColumnType::Int16),
            'H' => Some(ColumnType::UInt16),
            'e' => Some(ColumnType::FixedI32),
            'E' => Some(ColumnType::FixedU32),
            'L' => Some(ColumnType::Geodetic),
            'i' => Some(ColumnType::Int32),
            'I' => Some(ColumnType::UInt32),
            'f' => Some(ColumnType::Float),
            'q' => Some(ColumnType::Int64),
            'Q' => Some(ColumnType::UInt64),
            'd' => Some(ColumnType::Double),
            'n' => Some(ColumnType::Char4),
            'N' => Some(ColumnType::Char16),
            'Z' => Some(ColumnType::Char64),
            'a' => Some(ColumnType::Int16Array),
            _ => None,
        }
    }

    /// The type code character written into FORMAT records.
    pub fn code(self) -> char {
        match self {
            ColumnType::Int8 => 'b',
            ColumnType::UInt8 => 'B',
            ColumnType::Mode => 'M',
            ColumnType::FixedI16 => 'c',
            ColumnType::FixedU16 => 'C',
            ColumnType::Int16 => 'h',
            ColumnType::UInt16 => 'H',
            ColumnType::FixedI32 => 'e',
            ColumnType::FixedU32 => 'E',
            ColumnType::Geodetic => 'L',
            ColumnType::Int32 => 'i',
            ColumnType::UInt32 => 'I',
            ColumnType::Float => 'f',
            ColumnType::Int64 => 'q',
            ColumnType::UInt64 => 'Q',
            ColumnType::Double => 'd',
            ColumnType::Char4 => 'n',
            ColumnType::Char16 => 'N',
            ColumnType::Char64 => 'Z',
            ColumnType::Int16Array => 'a',
        }
    }

    /// Number of bytes this column occupies on the wire.
    pub fn wire_size(self) -> usize {
        match self {
            ColumnType::Int8 | ColumnType::UInt8 | ColumnType::Mode => 1,
            ColumnType::FixedI16
            | ColumnType::FixedU16
            | ColumnType::Int16
            | ColumnType::UInt16 => 2,
            ColumnType::FixedI32
            | ColumnType::FixedU32
            | ColumnType::Geodetic
            | ColumnType::Int32
            | ColumnType::UInt32
            | ColumnType::Float
            | ColumnType::Char4 => 4,
            ColumnType::Int64 | ColumnType::UInt64 | ColumnType::Double => 8,
            ColumnType::Char16 => 16,
            ColumnType::Char64 | ColumnType::Int16Array => 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CODES: &[(char, usize)] = &[
        ('b', 1),
        ('B', 1),
        ('M', 1),
        ('c', 2),
        ('C', 2),
        ('h', 2),
        ('H', 2),
        ('e', 4),
        ('E', 4),
        ('L', 4),
        ('i', 4),
        ('I', 4),
        ('f', 4),
        ('q', 8),
        ('Q', 8),
        ('d', 8),
        ('n', 4),
        ('N', 16),
        ('Z', 64),
        ('a', 64),
    ];

    #[test]
    fn test_all_codes_roundtrip_with_expected_width() {
        for &(code, width) in ALL_CODES {
            let ty = ColumnType::from_code(code).unwrap();
            assert_eq!(ty.code(), code);
            assert_eq!(ty.wire_size(), width, "width mismatch for {code:?}");
        }
    }

    #[test]
    fn test_unknown_codes_are_rejected() {
        for code in ['x', 'z', '0', ' ', ',', '-', '?'] {
            assert_eq!(ColumnType::from_code(code), None);
        }
    }
}
