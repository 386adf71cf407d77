//! Main Profiler struct and public API.

use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::analysis::{
    CategoricalClassifier, CompletenessAnalyzer, CorrelationCalculator, TypeInferencer,
    DEFAULT_CATEGORICAL_THRESHOLD, DEFAULT_TIMESTAMP_FORMAT,
};
use crate::error::{ProfileError, Result};
use crate::input::{Dataset, DatasetSource, Loader, ParserConfig, SourceMetadata};
use crate::report::ReportAssembler;
use crate::schema::{ColumnType, CorrelationMatrix, Report};

/// Configuration for a profiling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilerConfig {
    /// Reader configuration for file sources.
    pub parser: ParserConfig,
    /// Flag columns whose empty percentage exceeds this (0 disables).
    pub missing_threshold: f64,
    /// Spread percentage below which string columns are categorical.
    pub categorical_threshold: f64,
    /// chrono format used to detect datetime columns.
    pub timestamp_format: String,
    /// Profile columns on the rayon thread pool.
    pub parallel: bool,
    /// Compute the correlation matrix of numeric columns.
    pub correlation: bool,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            missing_threshold: 0.0,
            categorical_threshold: DEFAULT_CATEGORICAL_THRESHOLD,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            parallel: true,
            correlation: true,
        }
    }
}

impl ProfilerConfig {
    /// Load a configuration from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check thresholds are finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("missing_threshold", self.missing_threshold),
            ("categorical_threshold", self.categorical_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ProfileError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if self.timestamp_format.is_empty() {
            return Err(ProfileError::Config(
                "timestamp_format must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of profiling a dataset.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    /// Metadata about the source file; `None` for in-memory tables.
    pub source: Option<SourceMetadata>,
    /// One profile per column.
    pub report: Report,
    /// Correlation of numeric columns, when enabled and any exist.
    pub correlation: Option<CorrelationMatrix>,
}

/// The main profiling engine.
pub struct Profiler {
    config: ProfilerConfig,
    loader: Loader,
    assembler: ReportAssembler,
    correlation: CorrelationCalculator,
}

impl Profiler {
    /// Create a profiler with default configuration.
    pub fn new() -> Self {
        Self::with_config(ProfilerConfig::default())
    }

    /// Create a profiler with custom configuration.
    pub fn with_config(config: ProfilerConfig) -> Self {
        let inferencer = TypeInferencer::with_timestamp_format(config.timestamp_format.clone());
        let assembler = ReportAssembler::new()
            .with_completeness(CompletenessAnalyzer::with_missing_threshold(
                config.missing_threshold,
            ))
            .with_classifier(CategoricalClassifier::with_threshold(
                config.categorical_threshold,
            ))
            .with_inferencer(inferencer.clone())
            .with_parallel(config.parallel);

        Self {
            loader: Loader::with_config(config.parser.clone()),
            correlation: CorrelationCalculator::with_inferencer(inferencer),
            assembler,
            config,
        }
    }

    pub fn config(&self) -> &ProfilerConfig {
        &self.config
    }

    /// Load (if needed) and profile a data source.
    #[instrument(skip_all, name = "profile")]
    pub fn profile(&self, source: impl Into<DatasetSource>) -> Result<Profile> {
        self.config.validate()?;

        let (dataset, metadata) = match source.into() {
            DatasetSource::Path(path) => {
                let (dataset, metadata) = self.loader.load(&path)?;
                (dataset, Some(metadata))
            }
            DatasetSource::Table(dataset) => (dataset, None),
        };

        let mut profile = self.profile_dataset(&dataset);
        profile.source = metadata;
        Ok(profile)
    }

    /// Profile an in-memory dataset.
    #[instrument(skip_all, fields(rows = dataset.row_count(), columns = dataset.column_count()))]
    pub fn profile_dataset(&self, dataset: &Dataset) -> Profile {
        let started = Instant::now();
        let report = self.assembler.assemble(dataset);

        let correlation = if self.config.correlation {
            let types: Vec<ColumnType> = report
                .columns
                .iter()
                .map(|c| c.types.inferred_type)
                .collect();
            self.correlation.compute_with_types(dataset, &types)
        } else {
            None
        };

        info!(
            rows = report.total_rows,
            columns = report.columns.len(),
            flagged = report.flagged_columns().count(),
            numeric = correlation.as_ref().map_or(0, CorrelationMatrix::len),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "profiling complete"
        );

        Profile {
            source: None,
            report,
            correlation,
        }
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}
