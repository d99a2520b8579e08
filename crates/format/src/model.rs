//! Column and message format model.
//!
//! A [`MessageFormat`] is an ordered collection of named, typed columns
//! under a one-byte message id and a short type name. The format fully
//! determines the wire layout of its data records; the writer describes
//! it to readers through a FORMAT record before the first data record.
//!
//! Column storage grows geometrically (doubling while small, then in
//! fixed +16 increments) and is capped so the column count can never
//! exceed 255, the most a FORMAT record can describe.

use std::sync::atomic::{AtomicU64, Ordering};

use skylog_core::{Error, Result, MAX_TYPE_NAME_LENGTH};

use crate::types::ColumnType;

/// Initial column storage capacity of a fresh format.
const INITIAL_COLUMN_CAPACITY: usize = 4;

/// Column counts above this are not representable in a FORMAT record.
const MAX_COLUMNS: usize = u8::MAX as usize;

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity tag of a [`MessageFormat`] instance.
///
/// The writer's schema dictionary caches tokens, not structural
/// contents: two structurally identical formats created separately
/// carry different tokens and are treated as distinct schemas. The
/// token travels with the format when it is moved, so callers only
/// need to keep the format object alive, not pinned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatToken(u64);

impl FormatToken {
    fn fresh() -> Self {
        FormatToken(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}

/// One named, typed field of a message format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFormat {
    name: String,
    ty: ColumnType,
    unit: char,
}

impl ColumnFormat {
    /// Create a column from a raw `(name, type code, unit code)` triple.
    ///
    /// Fails with `InvalidValue` if the type code is not part of the
    /// log convention's table.
    pub fn new(name: &str, type_code: char, unit_code: char) -> Result<Self> {
        let ty = ColumnType::from_code(type_code).ok_or(Error::InvalidValue)?;
        Ok(ColumnFormat {
            name: name.to_string(),
            ty,
            unit: unit_code,
        })
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wire type of the column.
    pub fn column_type(&self) -> ColumnType {
        self.ty
    }

    /// The type code character of the column.
    pub fn type_code(&self) -> char {
        self.ty.code()
    }

    /// Unit code character of the column.
    pub fn unit_code(&self) -> char {
        self.unit
    }

    /// Number of bytes the column occupies on the wire.
    pub fn size(&self) -> usize {
        self.ty.wire_size()
    }
}

/// Ordered collection of columns under a numeric message id.
#[derive(Debug)]
pub struct MessageFormat {
    id: u8,
    name: String,
    columns: Vec<ColumnFormat>,
    /// Allocated column capacity tier; kept separately from
    /// `Vec::capacity` so the growth schedule stays observable.
    capacity: usize,
    token: FormatToken,
}

impl MessageFormat {
    /// Create an empty format with the given id and type name.
    ///
    /// Fails with `InvalidValue` if the type name is longer than four
    /// characters, the most a FORMAT record can carry.
    pub fn new(id: u8, name: &str) -> Result<Self> {
        if name.len() > MAX_TYPE_NAME_LENGTH {
            return Err(Error::InvalidValue);
        }

        let mut columns = Vec::new();
        columns
            .try_reserve_exact(INITIAL_COLUMN_CAPACITY)
            .map_err(|_| Error::OutOfMemory)?;

        Ok(MessageFormat {
            id,
            name: name.to_string(),
            columns,
            capacity: INITIAL_COLUMN_CAPACITY,
            token: FormatToken::fresh(),
        })
    }

    /// Message id of the format.
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Short type name of the format (at most four characters).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identity tag of this format instance.
    pub fn token(&self) -> FormatToken {
        self.token
    }

    /// Append a single column.
    ///
    /// Fails with `LimitExceeded` when the format is full (255 columns,
    /// or the next capacity tier would exceed 255) and `InvalidValue`
    /// for unrecognized type codes.
    pub fn add_column(&mut self, name: &str, type_code: char, unit_code: char) -> Result<()> {
        if self.columns.len() == MAX_COLUMNS {
            return Err(Error::LimitExceeded);
        }

        if ColumnType::from_code(type_code).is_none() {
            return Err(Error::InvalidValue);
        }

        if self.columns.len() == self.capacity {
            let next = if self.capacity < 32 {
                self.capacity * 2
            } else {
                self.capacity + 16
            };
            if next > MAX_COLUMNS {
                return Err(Error::LimitExceeded);
            }
            self.columns
                .try_reserve_exact(next - self.columns.len())
                .map_err(|_| Error::OutOfMemory)?;
            self.capacity = next;
        }

        self.columns
            .push(ColumnFormat::new(name, type_code, unit_code)?);

        Ok(())
    }

    /// Append several columns at once.
    ///
    /// `type_codes` determines the number of columns to add. `names` is
    /// comma-separated; once it runs out of fields the remaining columns
    /// are named `""`. `unit_codes` supplies one code per column,
    /// defaulting to `'-'` once exhausted.
    ///
    /// Fails up front with `LimitExceeded` if the total would exceed 255
    /// columns. A failure partway through leaves the columns added so
    /// far in the format.
    pub fn add_columns(&mut self, names: &str, type_codes: &str, unit_codes: &str) -> Result<()> {
        let count = type_codes.chars().count();

        if MAX_COLUMNS - self.columns.len() < count {
            return Err(Error::LimitExceeded);
        }

        let mut names = names.split(',');
        let mut units = unit_codes.chars();

        for type_code in type_codes.chars() {
            let name = names.next().unwrap_or("");
            let unit = units.next().unwrap_or('-');
            self.add_column(name, type_code, unit)?;
        }

        Ok(())
    }

    /// Number of columns in the format.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The column at `index`, or `None` past the end.
    pub fn column(&self, index: usize) -> Option<&ColumnFormat> {
        self.columns.get(index)
    }

    /// All columns in declared order.
    pub fn columns(&self) -> &[ColumnFormat] {
        &self.columns
    }

    /// The compact type-code string of the format, e.g. `"BBnNZ"`.
    pub fn format_string(&self) -> String {
        self.columns.iter().map(|c| c.type_code()).collect()
    }

    /// Column names joined with `sep`.
    pub fn column_names(&self, sep: &str) -> String {
        let mut result = String::new();
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                result.push_str(sep);
            }
            result.push_str(column.name());
        }
        result
    }

    /// Total payload size of a data record, in bytes (header excluded).
    ///
    /// Nothing stops this from exceeding the declared 256-byte maximum
    /// record length; the writer is the first place the limit bites.
    pub fn size(&self) -> usize {
        self.columns.iter().map(|c| c.size()).sum()
    }
}
