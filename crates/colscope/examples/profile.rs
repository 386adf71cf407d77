//! Example: Profile a tabular data file with colscope.
//!
//! Usage:
//!   cargo run --example profile -- <file_path>

use std::env;
use std::path::Path;

use colscope::{Profiler, ProfilerConfig};

fn main() -> colscope::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example profile -- <file_path>");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("colscope profile: {}", file_path);
    println!("{}", separator);
    println!();

    let profiler = Profiler::with_config(ProfilerConfig {
        missing_threshold: 5.0,
        ..Default::default()
    });
    let profile = profiler.profile(path)?;

    if let Some(source) = &profile.source {
        println!("## Source Metadata");
        println!("  File: {}", source.file);
        println!("  Format: {}", source.format);
        println!("  Rows: {}", source.row_count);
        println!("  Columns: {}", source.column_count);
        println!();
    }

    println!("## Columns ({})", profile.report.columns.len());
    println!();
    for col in &profile.report.columns {
        println!(
            "  {:20} {:10} complete={:>6.2}% unique={:>6.2}% spread={:>6.2}%",
            col.name,
            col.types.inferred_type,
            col.completeness.completeness_percentage,
            col.uniqueness.uniqueness_percentage,
            col.spread.spread_percentage,
        );
        if col.categorical.is_categorical {
            println!("                       categories: {:?}", col.categorical.categories);
        }
    }
    println!();

    match &profile.correlation {
        Some(matrix) => {
            println!("## Correlation ({} numeric columns)", matrix.len());
            for (name, row) in matrix.columns().iter().zip(matrix.rows()) {
                let cells: Vec<String> = row.iter().map(|r| format!("{:>7.3}", r)).collect();
                println!("  {:20} {}", name, cells.join(" "));
            }
        }
        None => println!("## Correlation: no numeric columns"),
    }
    println!();

    let flagged: Vec<&str> = profile
        .report
        .flagged_columns()
        .map(|c| c.name.as_str())
        .collect();
    if !flagged.is_empty() {
        println!("## Flagged for missing data: {}", flagged.join(", "));
        println!();
    }

    println!("{}", separator);

    Ok(())
}
