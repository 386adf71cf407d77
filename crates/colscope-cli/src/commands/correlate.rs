//! Correlate command - print the correlation matrix of numeric columns.

use colored::{ColoredString, Colorize};
use colscope::analysis::{CorrelationCalculator, TypeInferencer};
use colscope::{CorrelationMatrix, Loader};

use super::input_config;
use crate::cli::CorrelateArgs;

pub fn run(args: CorrelateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let matrix = correlation_for(&args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matrix)?);
        return Ok(());
    }

    match matrix {
        Some(matrix) => print_matrix(&matrix),
        None => println!("{}", "No numeric columns to correlate".yellow()),
    }

    Ok(())
}

/// Load the file with the resolved reader settings and correlate it.
fn correlation_for(
    args: &CorrelateArgs,
) -> Result<Option<CorrelationMatrix>, Box<dyn std::error::Error>> {
    if !args.file.exists() {
        return Err(format!("File not found: {}", args.file.display()).into());
    }

    let config = input_config(&args.input)?;
    config.validate()?;

    let (dataset, _) = Loader::with_config(config.parser.clone()).load(&args.file)?;
    let calculator = CorrelationCalculator::with_inferencer(TypeInferencer::with_timestamp_format(
        config.timestamp_format,
    ));
    Ok(calculator.compute(&dataset))
}

/// Print the matrix as an aligned grid. Undefined entries print as `-`.
pub fn print_matrix(matrix: &CorrelationMatrix) {
    let label_width = matrix
        .columns()
        .iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0);
    let cell_width = label_width.max(7);

    let mut header = format!("{:label_width$}", "");
    for name in matrix.columns() {
        header.push_str(&format!("  {:>cell_width$}", name));
    }
    println!("{}", header.cyan().bold());

    for (name, row) in matrix.columns().iter().zip(matrix.rows()) {
        print!("{}", format!("{:label_width$}", name).bold());
        for &r in row {
            print!("  {}", coefficient(r, cell_width));
        }
        println!();
    }
}

fn coefficient(r: f64, width: usize) -> ColoredString {
    if r.is_nan() {
        return format!("{:>width$}", "-").dimmed();
    }

    let text = format!("{:>width$.3}", r);
    if r >= 0.7 {
        text.green()
    } else if r <= -0.7 {
        text.red()
    } else {
        text.normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::InputArgs;
    use crate::commands::test_support::write_temp;

    #[test]
    fn test_delimiter_flag_reaches_loader() {
        let data = write_temp(".csv", "a b\n1 2\n2 4\n3 7\n");

        let auto = CorrelateArgs {
            file: data.path().to_path_buf(),
            ..Default::default()
        };
        assert!(correlation_for(&auto).unwrap().is_none());

        let spaced = CorrelateArgs {
            input: InputArgs {
                delimiter: Some(b' '),
                ..Default::default()
            },
            ..auto
        };
        let matrix = correlation_for(&spaced).unwrap().unwrap();
        assert_eq!(matrix.columns(), ["a", "b"]);
        assert!(matrix.get("a", "b").unwrap() > 0.9);
    }

    #[test]
    fn test_config_file_reaches_loader() {
        let data = write_temp(".csv", "a:b\n1:2\n2:4\n3:7\n");
        let config = write_temp(".json", r#"{"parser": {"delimiter": 58}}"#);

        let args = CorrelateArgs {
            file: data.path().to_path_buf(),
            input: InputArgs {
                config: Some(config.path().to_path_buf()),
                ..Default::default()
            },
            ..Default::default()
        };
        let matrix = correlation_for(&args).unwrap().unwrap();
        assert_eq!(matrix.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let args = CorrelateArgs {
            file: "does-not-exist.csv".into(),
            ..Default::default()
        };
        assert!(correlation_for(&args).is_err());
    }
}
