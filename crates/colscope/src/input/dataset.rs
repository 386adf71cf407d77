//! In-memory, column-oriented dataset.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, Result};
use crate::schema::ColumnType;

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Cell {
    /// Absent, empty or null-equivalent value.
    Missing,
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Timestamp(NaiveDateTime),
}

impl Cell {
    /// Build a cell from raw ingested text, mapping null tokens to `Missing`.
    pub fn from_raw(value: &str) -> Self {
        if Self::is_null_value(value) {
            Cell::Missing
        } else {
            Cell::Text(value.to_string())
        }
    }

    /// Check if a raw value represents a missing/null value.
    pub fn is_null_value(value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("na")
            || trimmed.eq_ignore_ascii_case("n/a")
            || trimmed.eq_ignore_ascii_case("nan")
            || trimmed.eq_ignore_ascii_case("null")
            || trimmed.eq_ignore_ascii_case("none")
            || trimmed.eq_ignore_ascii_case("nil")
            || trimmed == "."
            || trimmed == "-"
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Storage type of a present cell.
    pub fn column_type(&self) -> Option<ColumnType> {
        match self {
            Cell::Missing => None,
            Cell::Text(_) => Some(ColumnType::String),
            Cell::Integer(_) => Some(ColumnType::Integer),
            Cell::Float(_) => Some(ColumnType::Float),
            Cell::Boolean(_) => Some(ColumnType::Boolean),
            Cell::Timestamp(_) => Some(ColumnType::DateTime),
        }
    }

    /// Key used to count distinct values. `None` for missing cells.
    ///
    /// Cells are keyed by their rendered value, so `Integer(1)`, `Float(1.0)`
    /// and `Text("1")` all count as the value `1`.
    pub fn key(&self) -> Option<String> {
        if self.is_missing() {
            None
        } else {
            Some(self.to_string())
        }
    }

    /// Numeric view of the cell, parsing text when needed.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Integer(i) => Some(*i as f64),
            Cell::Float(f) if f.is_finite() => Some(*f),
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Missing => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Integer(i) => write!(f, "{}", i),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Boolean(b) => write!(f, "{}", b),
            Cell::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::from_raw(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Missing, Into::into)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Boolean(value)
    }
}

impl From<NaiveDateTime> for Cell {
    fn from(value: NaiveDateTime) -> Self {
        Cell::Timestamp(value)
    }
}

/// A named column of cells with the type ingestion assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    /// Original data type assigned by the ingestion layer.
    pub data_type: ColumnType,
    pub cells: Vec<Cell>,
}

impl Column {
    /// Create a column with an explicit original type.
    pub fn new(name: impl Into<String>, data_type: ColumnType, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            data_type,
            cells,
        }
    }

    /// Create a text column from raw strings.
    pub fn text<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cells = values
            .into_iter()
            .map(|v| Cell::from_raw(v.as_ref()))
            .collect();
        Self::new(name, ColumnType::String, cells)
    }

    /// Create a column whose original type is derived from its cells.
    pub fn typed(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        let data_type = common_type(&cells);
        Self::new(name, data_type, cells)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over present (non-missing) cells.
    pub fn present(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| !c.is_missing())
    }

    /// Number of distinct present values.
    pub fn distinct_count(&self) -> usize {
        self.present()
            .filter_map(Cell::key)
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Common storage type of a column's present cells.
///
/// A column with no present cells, or with incompatible cells, is `String`.
pub(crate) fn common_type(cells: &[Cell]) -> ColumnType {
    let mut types = cells.iter().filter_map(Cell::column_type);
    match types.next() {
        Some(first) => types.fold(first, ColumnType::unify),
        None => ColumnType::String,
    }
}

/// An ordered set of equal-length, uniquely named columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    /// Create a dataset, validating column lengths and names.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map_or(0, Column::len);

        let mut seen = HashSet::new();
        for column in &columns {
            if column.len() != row_count {
                return Err(ProfileError::InvalidDataset(format!(
                    "column '{}' has {} rows, expected {}",
                    column.name,
                    column.len(),
                    row_count
                )));
            }
            if !seen.insert(column.name.as_str()) {
                return Err(ProfileError::InvalidDataset(format!(
                    "duplicate column name '{}'",
                    column.name
                )));
            }
        }

        Ok(Self { columns, row_count })
    }

    /// Build a text dataset from row-major raw strings.
    ///
    /// Short rows are padded with missing cells and long rows are truncated.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let mut cells: Vec<Vec<Cell>> = vec![Vec::with_capacity(rows.len()); headers.len()];
        for row in &rows {
            for (index, column) in cells.iter_mut().enumerate() {
                column.push(row.get(index).map_or(Cell::Missing, |v| Cell::from_raw(v)));
            }
        }

        let columns = headers
            .into_iter()
            .zip(cells)
            .map(|(name, cells)| Column::new(name, ColumnType::String, cells))
            .collect();

        Self::new(columns)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows shared by every column.
    pub fn row_count(&self) -> usize {
        self.row_count
    }
}
