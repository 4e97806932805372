//! Lazy, exactly-once access point for a shared `Logger`.

use crate::{
  config::LoggerConfig,
  error::{Error, Result},
  logger::{Log, Logger},
  model::LogMessage,
};
use once_cell::sync::OnceCell;
use std::fmt;

type Factory = Box<dyn Fn(&LoggerConfig) -> Result<Logger> + Send + Sync>;

/// Owns at most one `Logger`, built on first access.
///
/// Threads that arrive while another thread is building the logger block
/// until construction finishes, then all observe the same outcome. A failed
/// construction is final: every later caller receives a clone of the same
/// error and the factory is never run again.
///
/// The process-wide instance lives in [`crate::global`]; tests and embedding
/// applications can build their own cell and substitute the factory.
pub struct LoggerCell {
  config: OnceCell<LoggerConfig>,
  state: OnceCell<Result<Logger>>,
  factory: Factory,
}

impl Default for LoggerCell {
  fn default() -> Self {
    Self::new()
  }
}

impl LoggerCell {
  /// A cell whose logger is built with `Logger::open`.
  pub fn new() -> Self {
    Self::with_factory(Logger::open)
  }

  /// A cell that runs `factory` once to produce its logger.
  pub fn with_factory(factory: impl Fn(&LoggerConfig) -> Result<Logger> + Send + Sync + 'static) -> Self {
    Self {
      config: OnceCell::new(),
      state: OnceCell::new(),
      factory: Box::new(factory),
    }
  }

  /// Installs the configuration used to build the logger.
  ///
  /// Must happen before first access. Once any configuration is in place,
  /// including the default pinned by a first `get_instance`, this returns
  /// `Error::AlreadyConfigured`.
  pub fn configure(&self, config: LoggerConfig) -> Result<()> {
    config.validate()?;
    self.config.set(config).map_err(|_| Error::AlreadyConfigured)
  }

  /// Returns the shared logger, building it on the first call.
  pub fn get_instance(&self) -> Result<&Logger> {
    self
      .state
      .get_or_init(|| {
        let config = self.config.get_or_init(LoggerConfig::default);
        let result = (self.factory)(config);
        match &result {
          Ok(_) => tracing::debug!(path = ?config.path, "shared logger initialized"),
          Err(e) => tracing::warn!(path = ?config.path, error = %e, "shared logger initialization failed"),
        }
        result
      })
      .as_ref()
      .map_err(|e| e.clone())
  }

  /// Shorthand for `get_instance()?.log(message)`.
  pub fn log(&self, message: impl Into<LogMessage>) -> Result<()> {
    self.get_instance()?.log(message.into())
  }

  /// Closes the sink if the logger was ever built. Safe to call repeatedly.
  ///
  /// Intended to run once, after all writer threads have joined.
  pub fn shutdown(&self) -> Result<()> {
    match self.state.get() {
      Some(Ok(logger)) => logger.close(),
      _ => Ok(()),
    }
  }

  /// Whether construction has finished, successfully or not.
  pub fn is_initialized(&self) -> bool {
    self.state.get().is_some()
  }
}

impl fmt::Debug for LoggerCell {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LoggerCell")
      .field("config", &self.config.get())
      .field("state", &self.state.get())
      .finish_non_exhaustive()
  }
}
