//! Input loading and the in-memory dataset model.

mod dataset;
mod excel;
mod json;
mod loader;
mod parser;
mod source;

pub use dataset::{Cell, Column, Dataset};
pub use excel::WorkbookReader;
pub use json::JsonReader;
pub use loader::{FileFormat, Loader};
pub use parser::{Parser, ParserConfig};
pub use source::{DatasetSource, SourceMetadata};
