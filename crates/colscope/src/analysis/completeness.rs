//! Present/missing value counts.

use serde::{Deserialize, Serialize};

use super::percentage;
use crate::input::Column;

/// Completeness of one column.
///
/// For a zero-row column both percentages are `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completeness {
    pub present_values: usize,
    pub missing_values: usize,
    pub completeness_percentage: f64,
    pub empty_percentage: f64,
    /// Missing share exceeds the configured threshold.
    pub flagged: bool,
}

/// Counts present and missing cells.
#[derive(Debug, Clone, Default)]
pub struct CompletenessAnalyzer {
    missing_threshold: f64,
}

impl CompletenessAnalyzer {
    /// Create an analyzer that never flags columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag columns whose empty percentage is above `missing_threshold`.
    /// A threshold of `0.0` disables flagging.
    pub fn with_missing_threshold(missing_threshold: f64) -> Self {
        Self { missing_threshold }
    }

    pub fn analyze(&self, column: &Column) -> Completeness {
        let total_rows = column.len();
        let present_values = column.present().count();
        let missing_values = total_rows - present_values;

        let completeness_percentage = percentage(present_values, total_rows);
        let empty_percentage = if total_rows == 0 {
            0.0
        } else {
            100.0 - completeness_percentage
        };

        let flagged = self.missing_threshold > 0.0 && empty_percentage > self.missing_threshold;

        Completeness {
            present_values,
            missing_values,
            completeness_percentage,
            empty_percentage,
            flagged,
        }
    }
}
