//! Per-column analyzers and the correlation calculator.
//!
//! Every analyzer is a pure function of a column (or the whole dataset) and
//! never modifies its input.

mod categorical;
mod completeness;
mod correlation;
mod spread;
mod type_inference;
mod uniqueness;

pub use categorical::{Categorical, CategoricalClassifier, DEFAULT_CATEGORICAL_THRESHOLD};
pub use completeness::{Completeness, CompletenessAnalyzer};
pub use correlation::CorrelationCalculator;
pub use spread::{Spread, SpreadAnalyzer};
pub use type_inference::{DEFAULT_TIMESTAMP_FORMAT, TypeInference, TypeInferencer};
pub use uniqueness::{Uniqueness, UniquenessAnalyzer};

/// `part / whole * 100`, or `0.0` for an empty column.
pub(crate) fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64) * 100.0
    }
}
