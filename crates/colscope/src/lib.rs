//! colscope: column profiling for tabular datasets.
//!
//! colscope loads a CSV, spreadsheet or JSON file (or takes an in-memory
//! table) and reports, for every column, its inferred type, completeness,
//! uniqueness, value spread and whether it looks categorical. Numeric columns
//! are also correlated pairwise.
//!
//! # Core Principles
//!
//! - **Non-destructive**: Analyzers never modify the dataset
//! - **Total**: Type inference and analysis never fail on messy values
//! - **Ordered**: Report rows follow the input column order
//!
//! # Example
//!
//! ```no_run
//! use colscope::Profiler;
//!
//! let profiler = Profiler::new();
//! let profile = profiler.profile("people.csv").unwrap();
//!
//! for column in &profile.report.columns {
//!     println!("{}: {}", column.name, column.types.inferred_type);
//! }
//! ```

pub mod analysis;
pub mod error;
pub mod input;
pub mod report;
pub mod schema;

mod profiler;

pub use crate::profiler::{Profile, Profiler, ProfilerConfig};
pub use error::{ProfileError, Result};
pub use input::{Cell, Column, Dataset, DatasetSource, Loader, Parser, ParserConfig, SourceMetadata};
pub use report::ReportAssembler;
pub use schema::{ColumnProfile, ColumnType, CorrelationMatrix, Report};
