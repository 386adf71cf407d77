//! Distinct-value ratio of a column.

use serde::{Deserialize, Serialize};

use super::percentage;
use crate::input::Column;

/// Uniqueness of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Uniqueness {
    /// Distinct present values as a percentage of all rows.
    pub uniqueness_percentage: f64,
    pub total_unique_values: usize,
    /// Uniqueness percentage is exactly 100.
    pub is_unique: bool,
}

/// Measures how many distinct values a column holds.
#[derive(Debug, Clone, Default)]
pub struct UniquenessAnalyzer;

impl UniquenessAnalyzer {
    pub fn new() -> Self {
        Self
    }

    #[allow(clippy::float_cmp)]
    pub fn analyze(&self, column: &Column) -> Uniqueness {
        let total_unique_values = column.distinct_count();
        let uniqueness_percentage = percentage(total_unique_values, column.len());

        Uniqueness {
            uniqueness_percentage,
            total_unique_values,
            is_unique: uniqueness_percentage == 100.0,
        }
    }
}
