//! Integration tests for colscope.

use std::io::Write;
use tempfile::NamedTempFile;

use colscope::{
    Column, ColumnType, Dataset, ParserConfig, ProfileError, Profiler, ProfilerConfig, Report,
};

/// Helper to create a temporary file with given content and extension.
fn create_test_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(suffix).expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

const PEOPLE_CSV: &str = "Age,Gender,Salary,City\n\
                          25,Male,50000,New York\n\
                          30,Female,60000,Los Angeles\n\
                          35,Male,75000,Chicago\n\
                          28,Male,55000,San Francisco\n\
                          ,Female,65000,Houston\n\
                          32,Female,,Miami\n\
                          22,Male,48000,Seattle\n";

// =============================================================================
// Basic Functionality Tests
// =============================================================================

#[test]
fn test_profile_basic_csv() {
    let file = create_test_file(".csv", PEOPLE_CSV);

    let profile = Profiler::new().profile(file.path()).expect("Profiling failed");
    let source = profile.source.expect("file sources carry metadata");

    assert_eq!(source.row_count, 7);
    assert_eq!(source.column_count, 4);
    assert_eq!(source.format, "csv");
    assert_eq!(
        profile.report.column_names(),
        vec!["Age", "Gender", "Salary", "City"]
    );
}

#[test]
fn test_profile_tsv_auto_detect() {
    let content = "sample_id\tgroup\tage\n\
                   S001\tA\t25\n\
                   S002\tB\t30\n\
                   S003\tA\t28\n";
    let file = create_test_file(".tsv", content);

    let profile = Profiler::new().profile(file.path()).expect("Profiling failed");

    assert_eq!(profile.source.unwrap().format, "tsv");
    assert_eq!(profile.report.columns.len(), 3);
}

#[test]
fn test_explicit_delimiter() {
    let file = create_test_file(".txt", "a;b\n1;x\n2;y\n");
    let config = ProfilerConfig {
        parser: ParserConfig {
            delimiter: Some(b';'),
            ..Default::default()
        },
        ..Default::default()
    };

    let profile = Profiler::with_config(config).profile(file.path()).unwrap();
    assert_eq!(profile.report.column_names(), vec!["a", "b"]);
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_missing_age_value() {
    let file = create_test_file(".csv", PEOPLE_CSV);
    let profile = Profiler::new().profile(file.path()).unwrap();
    let age = profile.report.get_column("Age").unwrap();

    assert_eq!(age.completeness.present_values, 6);
    assert_eq!(age.completeness.missing_values, 1);
    assert!((age.completeness.completeness_percentage - 85.714).abs() < 1e-2);
    assert_eq!(age.types.original_type, ColumnType::String);
    assert_eq!(age.types.inferred_type, ColumnType::Integer);
}

#[test]
fn test_gender_is_not_categorical_at_default_threshold() {
    let file = create_test_file(".csv", PEOPLE_CSV);
    let profile = Profiler::new().profile(file.path()).unwrap();
    let gender = profile.report.get_column("Gender").unwrap();

    assert_eq!(gender.uniqueness.total_unique_values, 2);
    assert_eq!(gender.spread.spread_percentage, 28.57);
    assert!(!gender.categorical.is_categorical);
    assert!(gender.categorical.categories.is_empty());
}

#[test]
fn test_age_salary_correlation() {
    let file = create_test_file(
        ".csv",
        "Age,Salary\n25,50000\n30,60000\n35,75000\n28,55000\n32,65000\n22,48000\n",
    );
    let profile = Profiler::new().profile(file.path()).unwrap();
    let matrix = profile.correlation.expect("two numeric columns");

    assert_eq!(matrix.len(), 2);
    assert_eq!(matrix.get_by_index(0, 0), Some(1.0));
    assert_eq!(matrix.get_by_index(1, 1), Some(1.0));
    let r = matrix.get("Age", "Salary").unwrap();
    assert_eq!(matrix.get("Salary", "Age"), Some(r));
    assert!(r > 0.95);
}

#[test]
fn test_header_only_csv_is_zero_rows() {
    let file = create_test_file(".csv", "only_column\n");
    let profile = Profiler::new().profile(file.path()).unwrap();
    let column = &profile.report.columns[0];

    assert_eq!(profile.report.total_rows, 0);
    assert_eq!(column.completeness.completeness_percentage, 0.0);
    assert_eq!(column.completeness.empty_percentage, 0.0);
    assert_eq!(column.uniqueness.uniqueness_percentage, 0.0);
    assert!(!column.uniqueness.is_unique);
    assert!(column.spread.is_uniform_spread);
    assert_eq!(column.spread.most_occurring_value, None);
}

#[test]
fn test_all_missing_column() {
    let file = create_test_file(".csv", "id,notes\n1,\n2,NA\n3,\n");
    let profile = Profiler::new().profile(file.path()).unwrap();
    let notes = profile.report.get_column("notes").unwrap();

    assert_eq!(notes.completeness.present_values, 0);
    assert_eq!(notes.completeness.missing_values, 3);
    assert_eq!(notes.completeness.completeness_percentage, 0.0);
    assert_eq!(notes.types.inferred_type, ColumnType::String);
}

// =============================================================================
// Type Inference Tests
// =============================================================================

#[test]
fn test_inferred_types() {
    let content = "count,value,flag,when,label,year\n\
                   1,1.5,true,2023-01-15 10:30,alpha,2021\n\
                   2,2.7,NO,2023-02-01 08:00,beta,2022\n\
                   3,3.14,yes,2023-03-09 17:45,gamma,2023\n";
    let file = create_test_file(".csv", content);
    let report = Profiler::new().profile(file.path()).unwrap().report;

    let inferred: Vec<ColumnType> = report
        .columns
        .iter()
        .map(|c| c.types.inferred_type)
        .collect();
    assert_eq!(
        inferred,
        vec![
            ColumnType::Integer,
            ColumnType::Float,
            ColumnType::Boolean,
            ColumnType::DateTime,
            ColumnType::String,
            ColumnType::Integer,
        ]
    );
}

#[test]
fn test_custom_timestamp_format() {
    let file = create_test_file(".csv", "day\n2023-01-15\n2023-02-01\n");
    let config = ProfilerConfig {
        timestamp_format: "%Y-%m-%d".to_string(),
        ..Default::default()
    };
    let report = Profiler::with_config(config).profile(file.path()).unwrap().report;

    assert_eq!(report.columns[0].types.inferred_type, ColumnType::DateTime);
}

// =============================================================================
// JSON Input Tests
// =============================================================================

#[test]
fn test_profile_json_records() {
    let content = r#"[
        {"id": 1, "score": 0.5, "tag": "a"},
        {"id": 2, "score": null, "tag": "b"},
        {"id": 3, "score": 1.5}
    ]"#;
    let file = create_test_file(".json", content);
    let profile = Profiler::new().profile(file.path()).unwrap();

    assert_eq!(profile.source.as_ref().unwrap().format, "json");
    let report = &profile.report;
    assert_eq!(report.total_rows, 3);
    assert_eq!(report.column_names(), vec!["id", "score", "tag"]);

    let id = report.get_column("id").unwrap();
    assert_eq!(id.types.original_type, ColumnType::Integer);
    assert_eq!(id.types.inferred_type, ColumnType::Integer);

    let score = report.get_column("score").unwrap();
    assert_eq!(score.completeness.missing_values, 1);
    assert_eq!(score.types.inferred_type, ColumnType::Float);

    assert_eq!(report.get_column("tag").unwrap().completeness.missing_values, 1);
}

#[test]
fn test_profile_json_columns() {
    let content = r#"{"x": [1, 2, 3], "y": [2, 4, 6]}"#;
    let file = create_test_file(".json", content);
    let profile = Profiler::new().profile(file.path()).unwrap();

    let matrix = profile.correlation.unwrap();
    assert!((matrix.get("x", "y").unwrap() - 1.0).abs() < 1e-12);
}

// =============================================================================
// Report Output Tests
// =============================================================================

#[test]
fn test_report_csv_output() {
    let file = create_test_file(".csv", PEOPLE_CSV);
    let report = Profiler::new().profile(file.path()).unwrap().report;

    let mut buffer = Vec::new();
    report.write_csv(&mut buffer).unwrap();

    let mut reader = csv::Reader::from_reader(buffer.as_slice());
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, Report::HEADERS.to_vec());

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(&rows[1][0], "Gender");
    assert_eq!(&rows[1][3], "No");
    assert_eq!(&rows[1][12], "28.57");
    assert_eq!(&rows[1][13], "Male");
    assert_eq!(&rows[1][14], "Female");
}

#[test]
fn test_profile_serializes_to_json() {
    let data = Dataset::new(vec![
        Column::text("flat", ["1", "1", "1"]),
        Column::text("x", ["1", "2", "3"]),
    ])
    .unwrap();
    let profile = Profiler::new().profile_dataset(&data);
    let json = serde_json::to_value(&profile).unwrap();

    assert!(json["source"].is_null());
    assert_eq!(json["report"]["total_rows"], 3);
    assert_eq!(json["report"]["columns"][1]["types"]["inferred_type"], "integer");
    assert!(json["correlation"]["values"][0][0].is_null());
    assert_eq!(json["correlation"]["values"][1][1], 1.0);
}

#[test]
fn test_missing_threshold_flags() {
    let file = create_test_file(".csv", PEOPLE_CSV);
    let config = ProfilerConfig {
        missing_threshold: 10.0,
        ..Default::default()
    };
    let report = Profiler::with_config(config).profile(file.path()).unwrap().report;

    let flagged: Vec<&str> = report.flagged_columns().map(|c| c.name.as_str()).collect();
    assert_eq!(flagged, vec!["Age", "Salary"]);
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[test]
fn test_empty_file() {
    let file = create_test_file(".csv", "");
    let result = Profiler::new().profile(file.path());
    assert!(matches!(result, Err(ProfileError::EmptyData(_))));
}

#[test]
fn test_unsupported_extension() {
    let file = create_test_file(".parquet", "PAR1");
    let result = Profiler::new().profile(file.path());
    assert!(matches!(result, Err(ProfileError::UnsupportedFormat(_))));
}

#[test]
fn test_malformed_json() {
    let file = create_test_file(".json", "{not json");
    let result = Profiler::new().profile(file.path());
    assert!(matches!(result, Err(ProfileError::Json(_))));
}

#[test]
fn test_json_scalar_is_unsupported() {
    let file = create_test_file(".json", "42");
    let result = Profiler::new().profile(file.path());
    assert!(matches!(result, Err(ProfileError::UnsupportedInput(_))));
}

#[test]
fn test_missing_file() {
    let result = Profiler::new().profile("/nonexistent/data.csv");
    assert!(matches!(result, Err(ProfileError::Io { .. })));
}
