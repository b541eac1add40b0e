//! Sheet and sheet id types

use crate::cell::{Cell, CellRef};
use crate::column::{Column, ColumnSpec};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

/// A sheet document id: 12 bytes rendered as 24 lowercase hex characters
///
/// Generated ids start with a big-endian unix-seconds timestamp followed by
/// eight random bytes, so they sort roughly by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetId([u8; 12]);

impl SheetId {
    /// Generate a fresh id
    pub fn generate() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or(0);

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..].copy_from_slice(&rand::random::<[u8; 8]>());
        Self(bytes)
    }

    /// Parse an id from its 24-hex-character form
    ///
    /// # Examples
    /// ```
    /// use refsheet_core::SheetId;
    ///
    /// let id = SheetId::parse("65a1b2c3d4e5f60718293a4b").unwrap();
    /// assert_eq!(id.to_string(), "65a1b2c3d4e5f60718293a4b");
    ///
    /// assert!(SheetId::parse("not-an-id").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let raw = s.as_bytes();
        if raw.len() != 24 || !raw.iter().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidSheetId(s.to_string()));
        }

        let mut bytes = [0u8; 12];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[2 * i..2 * i + 2], 16)
                .map_err(|_| Error::InvalidSheetId(s.to_string()))?;
        }
        Ok(Self(bytes))
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }
}

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl FromStr for SheetId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SheetId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SheetId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        SheetId::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A sheet: an id plus an ordered list of typed columns with a fixed row count
///
/// The column list is the authoritative data; any keyed index over it is a
/// derived view that callers rebuild when they need one.
///
/// # Examples
/// ```
/// use refsheet_core::{ColumnSpec, Sheet, ValueType, DEFAULT_ROWS};
///
/// let sheet = Sheet::create(
///     vec![
///         ColumnSpec::new("Name", ValueType::String),
///         ColumnSpec::new("Age", ValueType::Integer),
///     ],
///     DEFAULT_ROWS,
/// )
/// .unwrap();
///
/// assert_eq!(sheet.columns().len(), 2);
/// assert_eq!(sheet.rows(), 10);
/// assert!(sheet.cell("Name", 0).unwrap().is_empty());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sheet {
    id: SheetId,
    rows: usize,
    columns: Vec<Column>,
}

impl Sheet {
    /// Create a sheet with a freshly generated id
    ///
    /// Every column starts with `rows` empty literal cells. Column names must
    /// be non-empty and unique (case-sensitive).
    pub fn create(specs: Vec<ColumnSpec>, rows: usize) -> Result<Self> {
        Self::with_id(SheetId::generate(), specs, rows)
    }

    /// Create a sheet with a caller-provided id
    pub fn with_id(id: SheetId, specs: Vec<ColumnSpec>, rows: usize) -> Result<Self> {
        if rows == 0 {
            return Err(Error::NoRows);
        }
        if specs.is_empty() {
            return Err(Error::NoColumns);
        }

        let mut columns: Vec<Column> = Vec::with_capacity(specs.len());
        for spec in specs {
            if spec.name.is_empty() {
                return Err(Error::EmptyColumnName);
            }
            if columns.iter().any(|c| c.name() == spec.name) {
                return Err(Error::DuplicateColumn(spec.name));
            }
            columns.push(Column::new(spec.name, spec.value_type, rows));
        }

        Ok(Self { id, rows, columns })
    }

    /// Get the sheet id
    pub fn id(&self) -> SheetId {
        self.id
    }

    /// Number of rows in every column
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get all columns in creation order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Total number of cells in the sheet
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns.len()
    }

    // === Cell Access ===

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Get a mutable column by name
    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name() == name)
    }

    /// Get a cell by column name and row index
    pub fn cell(&self, column: &str, row: usize) -> Option<&Cell> {
        self.column(column).and_then(|c| c.cell(row))
    }

    /// Get a mutable cell by column name and row index
    pub fn cell_mut(&mut self, column: &str, row: usize) -> Option<&mut Cell> {
        self.column_mut(column).and_then(|c| c.cell_mut(row))
    }

    /// Get a cell by reference
    pub fn cell_at(&self, at: &CellRef) -> Option<&Cell> {
        self.cell(&at.column, at.row)
    }

    /// Get a mutable cell by reference
    pub fn cell_at_mut(&mut self, at: &CellRef) -> Option<&mut Cell> {
        self.cell_mut(&at.column, at.row)
    }
}
