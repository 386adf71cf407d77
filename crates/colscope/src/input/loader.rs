//! File loading dispatched on extension.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{ProfileError, Result};
use super::dataset::Dataset;
use super::excel::WorkbookReader;
use super::json::JsonReader;
use super::parser::{Parser, ParserConfig};
use super::source::SourceMetadata;

/// File contents plus the facts recorded in `SourceMetadata`.
pub(crate) struct RawFile {
    pub path: PathBuf,
    pub contents: Vec<u8>,
    pub hash: String,
    pub size_bytes: u64,
}

impl RawFile {
    /// Read a whole file and hash it.
    pub fn read(path: &Path) -> Result<Self> {
        let io_error = |source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(io_error)?;
        let size_bytes = file.metadata().map_err(io_error)?.len();

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(io_error)?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        Ok(Self {
            path: path.to_path_buf(),
            contents,
            hash,
            size_bytes,
        })
    }

    /// Pair a parsed dataset with metadata describing this file.
    pub fn into_metadata(self, dataset: Dataset, format: &str) -> (Dataset, SourceMetadata) {
        let metadata = SourceMetadata::new(
            self.path,
            self.hash,
            self.size_bytes,
            format.to_string(),
            dataset.row_count(),
            dataset.column_count(),
        );
        (dataset, metadata)
    }
}

/// Supported file formats, keyed by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Delimited,
    Workbook,
    Json,
}

impl FileFormat {
    /// Select the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "csv" | "tsv" | "txt" => Ok(FileFormat::Delimited),
            "xls" | "xlsx" | "xlsm" | "xlsb" | "ods" => Ok(FileFormat::Workbook),
            "json" => Ok(FileFormat::Json),
            "" => Err(ProfileError::UnsupportedFormat(format!(
                "'{}' has no file extension",
                path.display()
            ))),
            other => Err(ProfileError::UnsupportedFormat(format!(".{}", other))),
        }
    }
}

/// Loads datasets from CSV, workbook and JSON files.
pub struct Loader {
    config: ParserConfig,
}

impl Loader {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Load a file into a dataset.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path)?;
        let raw = RawFile::read(path)?;

        let (dataset, metadata) = match format {
            FileFormat::Delimited => Parser::with_config(self.config.clone()).parse_raw(raw)?,
            FileFormat::Workbook => WorkbookReader::with_config(self.config.clone()).read(raw)?,
            FileFormat::Json => JsonReader::new().read(raw)?,
        };

        debug!(
            file = %metadata.file,
            format = %metadata.format,
            rows = metadata.row_count,
            columns = metadata.column_count,
            "loaded dataset"
        );

        Ok((dataset, metadata))
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
