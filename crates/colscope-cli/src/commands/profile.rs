//! Profile command - profile every column of a data file.

use std::fs::File;
use std::io::BufWriter;

use colored::Colorize;
use colscope::{CorrelationMatrix, Profiler, ProfilerConfig, Report};

use super::correlate::print_matrix;
use super::input_config;
use crate::cli::ProfileArgs;

/// Widest a table cell is printed before truncation.
const MAX_CELL_WIDTH: usize = 32;

impl ProfileArgs {
    /// Resolve the shared input settings, then apply the profiling flags.
    fn profiler_config(&self) -> colscope::Result<ProfilerConfig> {
        let mut config = input_config(&self.input)?;

        if let Some(threshold) = self.missing_threshold {
            config.missing_threshold = threshold;
        }
        if let Some(threshold) = self.categorical_threshold {
            config.categorical_threshold = threshold;
        }
        if self.no_correlation {
            config.correlation = false;
        }
        if self.sequential {
            config.parallel = false;
        }

        config.validate()?;
        Ok(config)
    }
}

/// What the text output prints under the correlation heading.
#[derive(Debug, PartialEq)]
enum CorrelationSection<'a> {
    Disabled,
    NoNumericColumns,
    Matrix(&'a CorrelationMatrix),
}

fn correlation_section(
    enabled: bool,
    matrix: Option<&CorrelationMatrix>,
) -> CorrelationSection<'_> {
    match (enabled, matrix) {
        (false, _) => CorrelationSection::Disabled,
        (true, None) => CorrelationSection::NoNumericColumns,
        (true, Some(matrix)) => CorrelationSection::Matrix(matrix),
    }
}

pub fn run(args: ProfileArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.file.exists() {
        return Err(format!("File not found: {}", args.file.display()).into());
    }

    let config = args.profiler_config()?;
    let correlation_enabled = config.correlation;
    let profile = Profiler::with_config(config).profile(args.file.as_path())?;

    if let Some(output) = &args.output {
        let writer = BufWriter::new(File::create(output)?);
        profile.report.write_csv(writer)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    println!(
        "{} {} ({} rows, {} columns)",
        "Profiled".cyan().bold(),
        args.file.display().to_string().white(),
        profile.report.total_rows,
        profile.report.columns.len()
    );
    println!();

    print_report(&profile.report);
    println!();

    match correlation_section(correlation_enabled, profile.correlation.as_ref()) {
        CorrelationSection::Disabled => {}
        CorrelationSection::NoNumericColumns => {
            println!("{}", "Correlation:".yellow().bold());
            println!("  No numeric columns to correlate");
            println!();
        }
        CorrelationSection::Matrix(matrix) => {
            println!("{}", "Correlation:".yellow().bold());
            print_matrix(matrix);
            println!();
        }
    }

    let flagged: Vec<&str> = profile
        .report
        .flagged_columns()
        .map(|c| c.name.as_str())
        .collect();
    if !flagged.is_empty() {
        println!(
            "{} {}",
            "Flagged for missing data:".red().bold(),
            flagged.join(", ")
        );
    }

    if let Some(output) = &args.output {
        println!(
            "{} {}",
            "Saved report to".green().bold(),
            output.display().to_string().white()
        );
    }

    Ok(())
}

/// Print the report rows as an aligned table under `Report::HEADERS`.
fn print_report(report: &Report) {
    let records: Vec<Vec<String>> = report
        .records()
        .into_iter()
        .map(|record| record.into_iter().map(|cell| truncate(&cell)).collect())
        .collect();

    let widths: Vec<usize> = Report::HEADERS
        .iter()
        .enumerate()
        .map(|(i, header)| {
            records
                .iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = Report::HEADERS
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:width$}", h, width = *w))
        .collect();
    println!("{}", header.join("  ").cyan().bold());

    for record in &records {
        let line: Vec<String> = record
            .iter()
            .zip(&widths)
            .map(|(cell, w)| {
                let padded = format!("{:width$}", cell, width = *w);
                if cell == "Yes" {
                    padded.green().to_string()
                } else {
                    padded
                }
            })
            .collect();
        println!("{}", line.join("  "));
    }
}

fn truncate(cell: &str) -> String {
    if cell.chars().count() <= MAX_CELL_WIDTH {
        cell.to_string()
    } else {
        let kept: String = cell.chars().take(MAX_CELL_WIDTH - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::InputArgs;
    use crate::commands::test_support::write_temp;
    use std::path::PathBuf;

    fn args() -> ProfileArgs {
        ProfileArgs {
            file: PathBuf::from("data.csv"),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_without_flags() {
        let config = args().profiler_config().unwrap();
        assert_eq!(config.categorical_threshold, 10.0);
        assert!(config.parallel);
        assert!(config.correlation);
    }

    #[test]
    fn test_flags_override() {
        let config = ProfileArgs {
            missing_threshold: Some(20.0),
            input: InputArgs {
                delimiter: Some(b'|'),
                ..Default::default()
            },
            no_correlation: true,
            sequential: true,
            ..args()
        }
        .profiler_config()
        .unwrap();

        assert_eq!(config.missing_threshold, 20.0);
        assert_eq!(config.parser.delimiter, Some(b'|'));
        assert!(!config.correlation);
        assert!(!config.parallel);
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let result = ProfileArgs {
            categorical_threshold: Some(-1.0),
            ..args()
        }
        .profiler_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_config_file_disables_correlation_section() {
        let data = write_temp(".csv", "a,b\n1,2\n2,4\n3,7\n");
        let config_file = write_temp(".json", r#"{"correlation": false}"#);

        let disabled = ProfileArgs {
            file: data.path().to_path_buf(),
            input: InputArgs {
                config: Some(config_file.path().to_path_buf()),
                ..Default::default()
            },
            ..Default::default()
        };
        let config = disabled.profiler_config().unwrap();
        assert!(!config.correlation);

        let enabled = config.correlation;
        let profile = Profiler::with_config(config).profile(data.path()).unwrap();
        assert_eq!(
            correlation_section(enabled, profile.correlation.as_ref()),
            CorrelationSection::Disabled
        );

        let defaults = ProfileArgs {
            file: data.path().to_path_buf(),
            ..Default::default()
        };
        let config = defaults.profiler_config().unwrap();
        let enabled = config.correlation;
        let profile = Profiler::with_config(config).profile(data.path()).unwrap();
        assert!(matches!(
            correlation_section(enabled, profile.correlation.as_ref()),
            CorrelationSection::Matrix(m) if m.len() == 2
        ));
    }

    #[test]
    fn test_correlation_section_without_numeric_columns() {
        assert_eq!(
            correlation_section(true, None),
            CorrelationSection::NoNumericColumns
        );
        assert_eq!(correlation_section(false, None), CorrelationSection::Disabled);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short"), "short");
        let long = "x".repeat(40);
        let cut = truncate(&long);
        assert_eq!(cut.chars().count(), MAX_CELL_WIDTH);
        assert!(cut.ends_with("..."));
    }
}
