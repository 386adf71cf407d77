//! Per-column profile rows and the assembled report.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::{Categorical, Completeness, Spread, TypeInference, Uniqueness};
use crate::error::Result;

/// Profile of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Column name.
    pub name: String,
    /// Zero-based position in the dataset.
    pub position: usize,
    pub types: TypeInference,
    pub completeness: Completeness,
    /// Spread with `spread_percentage` rounded to two decimals.
    pub spread: Spread,
    pub uniqueness: Uniqueness,
    pub categorical: Categorical,
}

impl ColumnProfile {
    /// Render the profile as one report row, in [`Report::HEADERS`] order.
    pub fn record(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.types.original_type.to_string(),
            self.types.inferred_type.to_string(),
            yes_no(self.categorical.is_categorical),
            yes_no(self.uniqueness.is_unique),
            self.uniqueness.total_unique_values.to_string(),
            self.categorical.categories.join(", "),
            self.completeness.present_values.to_string(),
            self.completeness.missing_values.to_string(),
            self.completeness.completeness_percentage.to_string(),
            self.completeness.empty_percentage.to_string(),
            yes_no(self.spread.is_uniform_spread),
            self.spread.spread_percentage.to_string(),
            self.spread.most_occurring_value.clone().unwrap_or_default(),
            self.spread.least_occurring_value.clone().unwrap_or_default(),
        ]
    }
}

fn yes_no(flag: bool) -> String {
    let label = if flag { "Yes" } else { "No" };
    label.to_string()
}

/// Ordered column profiles for one dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Rows in the profiled dataset.
    pub total_rows: usize,
    /// One profile per column, in input order.
    pub columns: Vec<ColumnProfile>,
}

impl Report {
    /// Fixed report column schema.
    pub const HEADERS: [&'static str; 15] = [
        "Column Name",
        "Original Data Type",
        "Inferred Data Type",
        "Is Categorical",
        "Is Unique",
        "Unique Values",
        "Categories",
        "Present Values",
        "Missing Values",
        "Completeness Percentage",
        "Empty Percentage",
        "Is Uniform Spread",
        "Spread Percentage",
        "Most Occurring Value",
        "Least Occurring Value",
    ];

    pub fn new(total_rows: usize, columns: Vec<ColumnProfile>) -> Self {
        Self {
            total_rows,
            columns,
        }
    }

    /// Get a column profile by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Columns whose missing share exceeded the configured threshold.
    pub fn flagged_columns(&self) -> impl Iterator<Item = &ColumnProfile> {
        self.columns.iter().filter(|c| c.completeness.flagged)
    }

    /// All rows rendered as strings.
    pub fn records(&self) -> Vec<Vec<String>> {
        self.columns.iter().map(ColumnProfile::record).collect()
    }

    /// Write the header and one row per column as CSV.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(Self::HEADERS)?;
        for record in self.records() {
            csv_writer.write_record(&record)?;
        }
        csv_writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}
