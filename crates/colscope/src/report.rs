//! Assembles per-column analyzer output into a report.

use rayon::prelude::*;
use tracing::debug;

use crate::analysis::{
    CategoricalClassifier, CompletenessAnalyzer, Spread, SpreadAnalyzer, TypeInferencer,
    UniquenessAnalyzer,
};
use crate::input::{Column, Dataset};
use crate::schema::{ColumnProfile, Report};

/// Runs every per-column analyzer and builds one profile per column.
#[derive(Debug, Clone)]
pub struct ReportAssembler {
    completeness: CompletenessAnalyzer,
    uniqueness: UniquenessAnalyzer,
    spread: SpreadAnalyzer,
    inferencer: TypeInferencer,
    categorical: CategoricalClassifier,
    parallel: bool,
}

impl ReportAssembler {
    /// Create an assembler with default thresholds.
    pub fn new() -> Self {
        Self {
            completeness: CompletenessAnalyzer::new(),
            uniqueness: UniquenessAnalyzer::new(),
            spread: SpreadAnalyzer::new(),
            inferencer: TypeInferencer::new(),
            categorical: CategoricalClassifier::new(),
            parallel: true,
        }
    }

    pub fn with_completeness(mut self, analyzer: CompletenessAnalyzer) -> Self {
        self.completeness = analyzer;
        self
    }

    pub fn with_inferencer(mut self, inferencer: TypeInferencer) -> Self {
        self.inferencer = inferencer;
        self
    }

    pub fn with_classifier(mut self, classifier: CategoricalClassifier) -> Self {
        self.categorical = classifier;
        self
    }

    /// Profile columns on the rayon pool (`true`) or one after another.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Profile every column of the dataset, preserving column order.
    pub fn assemble(&self, dataset: &Dataset) -> Report {
        let columns = dataset.columns();

        let profiles: Vec<ColumnProfile> = if self.parallel {
            columns
                .par_iter()
                .enumerate()
                .map(|(position, column)| self.profile_column(position, column))
                .collect()
        } else {
            columns
                .iter()
                .enumerate()
                .map(|(position, column)| self.profile_column(position, column))
                .collect()
        };

        Report::new(dataset.row_count(), profiles)
    }

    fn profile_column(&self, position: usize, column: &Column) -> ColumnProfile {
        let completeness = self.completeness.analyze(column);
        let uniqueness = self.uniqueness.analyze(column);
        let spread = self.spread.analyze(column);
        let types = self.inferencer.infer(column);
        // Classified on the unrounded spread percentage
        let categorical = self.categorical.classify(&types, &spread);

        debug!(
            column = %column.name,
            inferred_type = %types.inferred_type,
            present = completeness.present_values,
            distinct = uniqueness.total_unique_values,
            categorical = categorical.is_categorical,
            "profiled column"
        );

        ColumnProfile {
            name: column.name.clone(),
            position,
            types,
            completeness,
            spread: Spread {
                spread_percentage: round2(spread.spread_percentage),
                ..spread
            },
            uniqueness,
            categorical,
        }
    }
}

impl Default for ReportAssembler {
    fn default() -> Self {
        Self::new()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnType;

    fn sample() -> Dataset {
        Dataset::new(vec![
            Column::text("Age", ["25", "30", "35", "28", "", "32", "22"]),
            Column::text(
                "Gender",
                ["Male", "Female", "Male", "Male", "Female", "Female", "Male"],
            ),
            Column::text("Salary", ["50000", "60000", "75000", "55000", "65000", "", "48000"]),
            Column::text(
                "City",
                ["New York", "Los Angeles", "Chicago", "San Francisco", "Houston", "Miami", "Seattle"],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_one_profile_per_column_in_order() {
        let report = ReportAssembler::new().assemble(&sample());

        assert_eq!(report.total_rows, 7);
        assert_eq!(report.column_names(), vec!["Age", "Gender", "Salary", "City"]);
        for (index, profile) in report.columns.iter().enumerate() {
            assert_eq!(profile.position, index);
        }
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let data = sample();
        let parallel = ReportAssembler::new().assemble(&data);
        let sequential = ReportAssembler::new().with_parallel(false).assemble(&data);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_spread_percentage_is_rounded() {
        let report = ReportAssembler::new().assemble(&sample());
        let gender = report.get_column("Gender").unwrap();

        assert_eq!(gender.spread.spread_percentage, 28.57);
        assert!(!gender.categorical.is_categorical);
        // Completeness keeps full precision
        let age = report.get_column("Age").unwrap();
        assert!((age.completeness.completeness_percentage - 600.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_classifier_threshold_is_applied() {
        let report = ReportAssembler::new()
            .with_classifier(CategoricalClassifier::with_threshold(30.0))
            .assemble(&sample());
        let gender = report.get_column("Gender").unwrap();

        assert!(gender.categorical.is_categorical);
        assert_eq!(gender.categorical.categories, vec!["Male", "Female"]);
        assert!(!report.get_column("City").unwrap().categorical.is_categorical);
    }

    #[test]
    fn test_record_layout() {
        let report = ReportAssembler::new().assemble(&sample());
        let records = report.records();

        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|r| r.len() == Report::HEADERS.len()));

        let age = &records[0];
        assert_eq!(age[0], "Age");
        assert_eq!(age[1], "string");
        assert_eq!(age[2], "integer");
        assert_eq!(age[4], "No");
        assert_eq!(age[7], "6");
        assert_eq!(age[8], "1");
        assert_eq!(age[11], "Yes");
        assert_eq!(age[13], "");

        let city = &records[3];
        assert_eq!(city[4], "Yes");
        assert_eq!(city[12], "100");
    }

    #[test]
    fn test_write_csv() {
        let report = ReportAssembler::new().assemble(&sample());
        let mut buffer = Vec::new();
        report.write_csv(&mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("Column Name,Original Data Type,"));
        assert_eq!(lines.count(), 4);
    }

    #[test]
    fn test_missing_threshold_flags_columns() {
        let report = ReportAssembler::new()
            .with_completeness(CompletenessAnalyzer::with_missing_threshold(10.0))
            .assemble(&sample());

        let flagged: Vec<&str> = report.flagged_columns().map(|c| c.name.as_str()).collect();
        assert_eq!(flagged, vec!["Age", "Salary"]);
    }

    #[test]
    fn test_zero_row_dataset() {
        let data = Dataset::new(vec![Column::text("empty", Vec::<&str>::new())]).unwrap();
        let report = ReportAssembler::new().assemble(&data);
        let profile = &report.columns[0];

        assert_eq!(profile.completeness.present_values, 0);
        assert_eq!(profile.completeness.completeness_percentage, 0.0);
        assert_eq!(profile.uniqueness.uniqueness_percentage, 0.0);
        assert_eq!(profile.spread.spread_percentage, 0.0);
        assert_eq!(profile.types.inferred_type, ColumnType::String);
    }
}
