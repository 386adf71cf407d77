//! Categorical classification from inferred type and spread.

use serde::{Deserialize, Serialize};

use super::spread::Spread;
use super::type_inference::TypeInference;

/// Spread percentage below which a string column counts as categorical.
pub const DEFAULT_CATEGORICAL_THRESHOLD: f64 = 10.0;

/// Categorical classification of one column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Categorical {
    pub is_categorical: bool,
    /// Distinct values in spread order; empty unless categorical.
    pub categories: Vec<String>,
}

/// Classifies string columns with a low distinct-value ratio as categorical.
///
/// The rule is purely ratio based: two values spread over seven rows
/// (28.6%) is not categorical at the default threshold of 10.
#[derive(Debug, Clone)]
pub struct CategoricalClassifier {
    threshold: f64,
}

impl CategoricalClassifier {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_CATEGORICAL_THRESHOLD)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn classify(&self, types: &TypeInference, spread: &Spread) -> Categorical {
        if !types.inferred_type.is_text() || spread.spread_percentage >= self.threshold {
            return Categorical::default();
        }

        Categorical {
            is_categorical: true,
            categories: spread.values().map(str::to_string).collect(),
        }
    }
}

impl Default for CategoricalClassifier {
    fn default() -> Self {
        Self::new()
    }
}
