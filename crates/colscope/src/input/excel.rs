//! Spreadsheet workbook reader (xls, xlsx, xlsm, xlsb, ods).

use calamine::{open_workbook_auto, Data, DataType, Range, Reader};

use crate::error::{ProfileError, Result};
use super::dataset::{Cell, Column, Dataset};
use super::loader::RawFile;
use super::parser::{normalize_headers, ParserConfig};
use super::source::SourceMetadata;

/// Reads the first (or a named) worksheet of a workbook.
pub struct WorkbookReader {
    config: ParserConfig,
}

impl WorkbookReader {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub(crate) fn read(&self, raw: RawFile) -> Result<(Dataset, SourceMetadata)> {
        let mut workbook = open_workbook_auto(&raw.path)
            .map_err(|e| ProfileError::Workbook(format!("{}: {}", raw.path.display(), e)))?;

        let sheet = match &self.config.sheet {
            Some(name) => name.clone(),
            None => workbook
                .sheet_names()
                .first()
                .cloned()
                .ok_or_else(|| ProfileError::EmptyData("Workbook has no sheets".to_string()))?,
        };

        let range = workbook
            .worksheet_range(&sheet)
            .map_err(|e| ProfileError::Workbook(format!("Failed to read sheet '{}': {}", sheet, e)))?;

        let dataset = self.range_to_dataset(&range)?;

        let format = raw
            .path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_else(|| "workbook".to_string());

        Ok(raw.into_metadata(dataset, &format))
    }

    /// Convert a worksheet range into typed columns.
    fn range_to_dataset(&self, range: &Range<Data>) -> Result<Dataset> {
        let mut rows = range.rows();

        let headers: Vec<String> = if self.config.has_header {
            match rows.next() {
                Some(header) => header.iter().map(|c| c.to_string()).collect(),
                None => Vec::new(),
            }
        } else {
            (0..range.width()).map(|i| format!("column_{}", i + 1)).collect()
        };

        if headers.is_empty() {
            return Err(ProfileError::EmptyData("No columns found".to_string()));
        }

        let max_rows = self.config.max_rows.unwrap_or(usize::MAX);
        let mut cells: Vec<Vec<Cell>> = vec![Vec::new(); headers.len()];
        for row in rows.take(max_rows) {
            for (index, column) in cells.iter_mut().enumerate() {
                column.push(row.get(index).map_or(Cell::Missing, workbook_cell));
            }
        }

        Dataset::new(
            normalize_headers(headers)
                .into_iter()
                .zip(cells)
                .map(|(name, cells)| Column::typed(name, cells))
                .collect(),
        )
    }
}

impl Default for WorkbookReader {
    fn default() -> Self {
        Self::new()
    }
}

fn workbook_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Missing,
        Data::Int(i) => Cell::Integer(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Boolean(*b),
        Data::String(s) => Cell::from_raw(s),
        Data::DateTime(_) | Data::DateTimeIso(_) => data
            .as_datetime()
            .map_or_else(|| Cell::Text(data.to_string()), Cell::Timestamp),
        Data::DurationIso(d) => Cell::Text(d.clone()),
    }
}
