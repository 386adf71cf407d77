//! Logging setup for the CLI.

use tracing::Level;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging options taken from the global flags.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is unset.
    pub level: Level,
    /// Whether to use JSON output format.
    pub json_format: bool,
}

impl LoggingConfig {
    pub fn from_flags(verbose: bool, json_format: bool) -> Self {
        let level = if verbose { Level::DEBUG } else { Level::WARN };
        Self { level, json_format }
    }

    /// Builds the default filter string.
    pub fn env_filter(&self) -> String {
        self.level.as_str().to_lowercase()
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the flags.
///
/// Logs go to stderr so stdout stays machine-readable.
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.env_filter()));

    let fmt_layer = if config.json_format {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
