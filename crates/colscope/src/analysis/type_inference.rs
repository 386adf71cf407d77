//! Semantic type inference for text columns.
//!
//! Only columns ingested with the generic `string` type are inferred. The
//! coercion chain is fixed and the first candidate that accepts *every*
//! present cell wins:
//!
//! 1. timestamp, parsed with the configured chrono format
//! 2. numeric: `integer` when every cell is an `i64`, else `float`
//! 3. boolean (`true`/`false`/`yes`/`no`, any case)
//! 4. string
//!
//! With the default `%Y-%m-%d %H:%M` format a bare year such as `2023` is
//! rejected by step 1 and lands on `integer`.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::input::{Cell, Column};
use crate::schema::ColumnType;

/// Default timestamp pattern tried first in the coercion chain.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

const BOOLEAN_VALUES: &[&str] = &["true", "false", "yes", "no"];

// Decimal literals only; `f64::from_str` would also accept "inf" and "nan".
static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").expect("valid number pattern")
});

/// Original and inferred type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInference {
    /// Type assigned by the ingestion layer.
    pub original_type: ColumnType,
    /// Type recovered by the coercion chain.
    pub inferred_type: ColumnType,
}

/// A rejected coercion attempt. Absorbed by the inferencer.
#[derive(Debug)]
struct CoercionFailure {
    candidate: ColumnType,
    value: String,
}

impl CoercionFailure {
    fn new(candidate: ColumnType, value: &str) -> Self {
        Self {
            candidate,
            value: value.to_string(),
        }
    }
}

type Attempt = fn(&TypeInferencer, &[String]) -> Result<ColumnType, CoercionFailure>;

/// Infers the semantic type of text columns.
#[derive(Debug, Clone)]
pub struct TypeInferencer {
    timestamp_format: String,
}

impl TypeInferencer {
    /// Create an inferencer using [`DEFAULT_TIMESTAMP_FORMAT`].
    pub fn new() -> Self {
        Self::with_timestamp_format(DEFAULT_TIMESTAMP_FORMAT)
    }

    /// Create an inferencer with a custom chrono format for step 1.
    pub fn with_timestamp_format(format: impl Into<String>) -> Self {
        Self {
            timestamp_format: format.into(),
        }
    }

    /// Infer the type of a column. Never fails.
    pub fn infer(&self, column: &Column) -> TypeInference {
        let original_type = column.data_type;
        if !original_type.is_text() {
            return TypeInference {
                original_type,
                inferred_type: original_type,
            };
        }

        let values: Vec<String> = column.present().map(Cell::to_string).collect();
        let inferred_type = if values.is_empty() {
            ColumnType::String
        } else {
            self.coerce(&column.name, &values)
        };

        TypeInference {
            original_type,
            inferred_type,
        }
    }

    fn coerce(&self, column: &str, values: &[String]) -> ColumnType {
        let chain: [Attempt; 3] = [Self::try_timestamp, Self::try_numeric, Self::try_boolean];

        for attempt in chain {
            match attempt(self, values) {
                Ok(column_type) => return column_type,
                Err(failure) => trace!(
                    column,
                    candidate = %failure.candidate,
                    value = %failure.value,
                    "coercion rejected"
                ),
            }
        }

        ColumnType::String
    }

    fn try_timestamp(&self, values: &[String]) -> Result<ColumnType, CoercionFailure> {
        match values.iter().find(|v| !self.parses_as_timestamp(v)) {
            Some(bad) => Err(CoercionFailure::new(ColumnType::DateTime, bad)),
            None => Ok(ColumnType::DateTime),
        }
    }

    fn parses_as_timestamp(&self, value: &str) -> bool {
        NaiveDateTime::parse_from_str(value, &self.timestamp_format).is_ok()
            || NaiveDate::parse_from_str(value, &self.timestamp_format).is_ok()
    }

    fn try_numeric(&self, values: &[String]) -> Result<ColumnType, CoercionFailure> {
        if values.iter().all(|v| v.parse::<i64>().is_ok()) {
            return Ok(ColumnType::Integer);
        }

        match values.iter().find(|v| !NUMBER_PATTERN.is_match(v)) {
            Some(bad) => Err(CoercionFailure::new(ColumnType::Float, bad)),
            None => Ok(ColumnType::Float),
        }
    }

    fn try_boolean(&self, values: &[String]) -> Result<ColumnType, CoercionFailure> {
        let is_boolean = |v: &&String| {
            BOOLEAN_VALUES
                .iter()
                .any(|candidate| v.eq_ignore_ascii_case(candidate))
        };

        match values.iter().find(|v| !is_boolean(v)) {
            Some(bad) => Err(CoercionFailure::new(ColumnType::Boolean, bad)),
            None => Ok(ColumnType::Boolean),
        }
    }
}

impl Default for TypeInferencer {
    fn default() -> Self {
        Self::new()
    }
}
