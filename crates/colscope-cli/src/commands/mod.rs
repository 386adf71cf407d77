//! CLI command implementations.

pub mod correlate;
pub mod profile;

use colscope::ProfilerConfig;

use crate::cli::InputArgs;

/// Start from the config file (or defaults) and apply the shared input flags.
pub fn input_config(input: &InputArgs) -> colscope::Result<ProfilerConfig> {
    let mut config = match &input.config {
        Some(path) => ProfilerConfig::from_json_file(path)?,
        None => ProfilerConfig::default(),
    };

    if let Some(format) = &input.timestamp_format {
        config.timestamp_format = format.clone();
    }
    if let Some(delimiter) = input.delimiter {
        config.parser.delimiter = Some(delimiter);
    }
    if let Some(sheet) = &input.sheet {
        config.parser.sheet = Some(sheet.clone());
    }

    Ok(config)
}
