//! Report types: column types, per-column profiles and the correlation matrix.

mod correlation;
mod profile;
mod types;

pub use correlation::CorrelationMatrix;
pub use profile::{ColumnProfile, Report};
pub use types::ColumnType;
