//! doctrace configuration
//!
//! Settings resolve in four layers, later ones winning:
//!
//! 1. `defaults/doctrace.default.toml`, compiled into the binary
//! 2. `doctrace.toml` in the scanned directory, if present
//! 3. an explicit file given with `--config`
//! 4. individual command line flags
//!
//! [`Loader`] walks through the layers in that order and deserializes the result into
//! [`DoctraceConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/doctrace.default.toml");

/// Name of the optional per-project config file.
pub const PROJECT_FILE: &str = "doctrace.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct DoctraceConfig {
    pub trace: TraceConfig,
    pub discovery: DiscoveryConfig,
    pub report: ReportConfig,
}

/// What counts as a trace.
#[derive(Debug, Clone, Deserialize)]
pub struct TraceConfig {
    pub categories: Vec<String>,
    pub epic_prefix: String,
}

/// Which files and functions are scanned.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryConfig {
    pub file_suffix: String,
    pub function_prefix: String,
    pub recursive: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(ConfigError::Message(format!(
                "unknown report format '{}' (expected text or json)",
                other
            ))),
        }
    }
}

/// Resolves the configuration layers for one run.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Built-in defaults only.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Pick up `doctrace.toml` from the scanned directory when it exists.
    pub fn project(self, root: impl AsRef<Path>) -> Self {
        self.layer(&root.as_ref().join(PROJECT_FILE), false)
    }

    /// Layer an explicitly named file. It must exist.
    pub fn file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    pub fn report_format(self, format: ReportFormat) -> Result<Self, ConfigError> {
        self.set("report.format", format.as_str())
    }

    pub fn epic_prefix(self, prefix: &str) -> Result<Self, ConfigError> {
        self.set("trace.epic_prefix", prefix)
    }

    /// Replace the configured categories wholesale.
    pub fn categories(self, categories: Vec<String>) -> Result<Self, ConfigError> {
        self.set("trace.categories", categories)
    }

    pub fn recursive(self, recursive: bool) -> Result<Self, ConfigError> {
        self.set("discovery.recursive", recursive)
    }

    pub fn build(self) -> Result<DoctraceConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    fn set(mut self, key: &str, value: impl Into<ValueKind>) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }
}

/// The built-in defaults, with no files or flags applied.
pub fn load_defaults() -> Result<DoctraceConfig, ConfigError> {
    Loader::new().build()
}
