//! JSON table reader.
//!
//! Three layouts are accepted:
//!
//! - records: `[{"age": 25, "city": "Oslo"}, ...]`
//! - columns of arrays: `{"age": [25, 30], "city": ["Oslo", "Rome"]}`
//! - columns of index maps: `{"age": {"0": 25, "1": 30}, ...}`
//!
//! Column order follows the first occurrence of each key.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::{ProfileError, Result};
use super::dataset::{Cell, Column, Dataset};
use super::loader::RawFile;
use super::source::SourceMetadata;

/// Reads JSON documents into datasets.
#[derive(Debug, Default)]
pub struct JsonReader;

impl JsonReader {
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn read(&self, raw: RawFile) -> Result<(Dataset, SourceMetadata)> {
        let value: Value = serde_json::from_slice(&raw.contents)?;
        let dataset = self.parse_value(value)?;
        Ok(raw.into_metadata(dataset, "json"))
    }

    /// Convert a parsed JSON document into a dataset.
    pub fn parse_value(&self, value: Value) -> Result<Dataset> {
        let columns = match value {
            Value::Array(records) => from_records(records)?,
            Value::Object(fields) => from_columns(fields)?,
            other => {
                return Err(ProfileError::UnsupportedInput(format!(
                    "expected a JSON array of records or an object of columns, found {}",
                    kind(&other)
                )));
            }
        };

        if columns.is_empty() {
            return Err(ProfileError::EmptyData("No columns found".to_string()));
        }

        Dataset::new(
            columns
                .into_iter()
                .map(|(name, cells)| Column::typed(name, cells))
                .collect(),
        )
    }
}

fn from_records(records: Vec<Value>) -> Result<IndexMap<String, Vec<Cell>>> {
    let mut columns: IndexMap<String, Vec<Cell>> = IndexMap::new();

    for (row, record) in records.into_iter().enumerate() {
        let fields = match record {
            Value::Object(fields) => fields,
            other => {
                return Err(ProfileError::UnsupportedInput(format!(
                    "record {} is {}, expected an object",
                    row,
                    kind(&other)
                )));
            }
        };

        for (name, value) in fields {
            // A key first seen on a later record is missing for earlier rows
            columns
                .entry(name)
                .or_insert_with(|| vec![Cell::Missing; row])
                .push(json_cell(value));
        }

        for cells in columns.values_mut() {
            if cells.len() <= row {
                cells.push(Cell::Missing);
            }
        }
    }

    Ok(columns)
}

fn from_columns(fields: Map<String, Value>) -> Result<IndexMap<String, Vec<Cell>>> {
    fields
        .into_iter()
        .map(|(name, value)| {
            let cells: Vec<Cell> = match value {
                Value::Array(values) => values.into_iter().map(json_cell).collect(),
                Value::Object(indexed) => indexed.into_iter().map(|(_, v)| json_cell(v)).collect(),
                other => {
                    return Err(ProfileError::UnsupportedInput(format!(
                        "column '{}' is {}, expected an array or object",
                        name,
                        kind(&other)
                    )));
                }
            };
            Ok((name, cells))
        })
        .collect()
}

fn json_cell(value: Value) -> Cell {
    match value {
        Value::Null => Cell::Missing,
        Value::Bool(b) => Cell::Boolean(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Cell::Integer(i),
            None => n.as_f64().map_or(Cell::Missing, Cell::Float),
        },
        Value::String(s) => Cell::Text(s),
        nested @ (Value::Array(_) | Value::Object(_)) => Cell::Text(nested.to_string()),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
