//! Value-frequency distribution of a column.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::percentage;
use crate::input::{Cell, Column};

/// Frequency distribution of a column's present values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spread {
    /// Distinct value -> occurrences, by descending count then first appearance.
    pub spread_pattern: IndexMap<String, usize>,
    /// Distinct values as a percentage of all rows.
    pub spread_percentage: f64,
    /// Every distinct value occurs equally often.
    pub is_uniform_spread: bool,
    /// Unset when the spread is uniform.
    pub most_occurring_value: Option<String>,
    /// Unset when the spread is uniform.
    pub least_occurring_value: Option<String>,
}

impl Spread {
    /// Number of present cells counted in the pattern.
    pub fn observed_total(&self) -> usize {
        self.spread_pattern.values().sum()
    }

    pub fn distinct_count(&self) -> usize {
        self.spread_pattern.len()
    }

    /// Distinct values in pattern order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.spread_pattern.keys().map(String::as_str)
    }
}

/// Builds value-frequency distributions.
#[derive(Debug, Clone, Default)]
pub struct SpreadAnalyzer;

impl SpreadAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, column: &Column) -> Spread {
        let mut spread_pattern: IndexMap<String, usize> = IndexMap::new();
        for key in column.present().filter_map(Cell::key) {
            *spread_pattern.entry(key).or_insert(0) += 1;
        }
        // Stable sort keeps first-seen order among equal counts
        spread_pattern.sort_by(|_, a, _, b| b.cmp(a));

        let max = spread_pattern.values().copied().max();
        let min = spread_pattern.values().copied().min();
        let is_uniform_spread = max == min;

        let (most_occurring_value, least_occurring_value) = match (max, min) {
            (Some(max), Some(min)) if !is_uniform_spread => (
                first_with_count(&spread_pattern, max),
                first_with_count(&spread_pattern, min),
            ),
            _ => (None, None),
        };

        Spread {
            spread_percentage: percentage(spread_pattern.len(), column.len()),
            spread_pattern,
            is_uniform_spread,
            most_occurring_value,
            least_occurring_value,
        }
    }
}

fn first_with_count(pattern: &IndexMap<String, usize>, count: usize) -> Option<String> {
    pattern
        .iter()
        .find(|(_, c)| **c == count)
        .map(|(value, _)| value.clone())
}
