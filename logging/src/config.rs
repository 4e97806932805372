//! Configuration for the shared logger.
//!
//! The baseline is entirely built in: `DEFAULT_LOG_PATH` with console
//! mirroring on. A YAML document may override any subset of the fields.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::{
  fs::File,
  io::BufReader,
  path::{Path, PathBuf},
  sync::Arc,
};

/// File the shared logger appends to when nothing else is configured.
pub const DEFAULT_LOG_PATH: &str = "log.txt";

/// Prefix written before every console-mirrored line.
pub const DEFAULT_CONSOLE_PREFIX: &str = "[LOG]: ";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
  /// Append-only file receiving every message.
  pub path: PathBuf,
  /// Mirror every message to stdout.
  pub console: bool,
  pub console_prefix: String,
}

impl Default for LoggerConfig {
  fn default() -> Self {
    Self {
      path: PathBuf::from(DEFAULT_LOG_PATH),
      console: true,
      console_prefix: DEFAULT_CONSOLE_PREFIX.to_string(),
    }
  }
}

impl LoggerConfig {
  pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
    self.path = path.into();
    self
  }

  pub fn with_console(mut self, console: bool) -> Self {
    self.console = console;
    self
  }

  pub fn with_console_prefix(mut self, prefix: impl Into<String>) -> Self {
    self.console_prefix = prefix.into();
    self
  }

  /// Parses and validates a YAML document. Missing fields take their defaults.
  pub fn from_yaml_str(yaml: &str) -> Result<Self> {
    let config: LoggerConfig =
      serde_yaml::from_str(yaml).map_err(|e| Error::ConfigParse(e.to_string()))?;
    config.validate()?;
    Ok(config)
  }

  /// Reads, parses and validates a YAML configuration file.
  pub fn from_file(config_path: &Path) -> Result<Self> {
    let file = File::open(config_path).map_err(|e| Error::ConfigRead(Arc::new(e)))?;
    let reader = BufReader::new(file);
    let config: LoggerConfig =
      serde_yaml::from_reader(reader).map_err(|e| Error::ConfigParse(e.to_string()))?;
    config.validate()?;
    tracing::debug!(config_path = ?config_path, log_path = ?config.path, "loaded logger configuration");
    Ok(config)
  }

  pub fn validate(&self) -> Result<()> {
    if self.path.as_os_str().is_empty() {
      return Err(Error::InvalidConfigValue {
        field: "path".to_string(),
        message: "log file path must not be empty".to_string(),
      });
    }
    Ok(())
  }
}
