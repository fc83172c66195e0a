use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default log filter when neither RUST_LOG nor configuration sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Application configuration loaded from slp.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// tracing-subscriber filter directive, e.g. "info" or "slp_decoder=debug"
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
}

/// How decoded messages are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Text,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: DEFAULT_LOG_LEVEL.to_string(),
            },
            output: OutputConfig {
                format: OutputFormat::Json,
                pretty: true,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from slp.toml (if present) and environment variables.
    /// Environment variables take precedence over file configuration.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading an explicit file instead of slp.toml.
    ///
    /// An explicit file must exist. `SLP_*` environment variables such as
    /// `SLP_LOGGING__LEVEL` or `SLP_OUTPUT__FORMAT` override file values.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let builder = Config::builder()
            .set_default("logging.level", defaults.logging.level)?
            .set_default("output.format", "json")?
            .set_default("output.pretty", defaults.output.pretty)?;

        let builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("slp").required(false)),
        };

        builder
            .add_source(
                config::Environment::with_prefix("SLP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
