//! The process-wide logger and its access functions.

use crate::{
  cell::LoggerCell,
  config::LoggerConfig,
  error::Result,
  guards::ShutdownGuard,
  logger::Logger,
  model::LogMessage,
};
use once_cell::sync::Lazy;

// The one and only process-wide logger cell.
// The cell itself is cheap; the sink is opened on first `get_instance`.
static GLOBAL_LOGGER: Lazy<LoggerCell> = Lazy::new(LoggerCell::new);

/// Installs the configuration for the process-wide logger.
///
/// Fails with `Error::AlreadyConfigured` if called twice or after the logger
/// was first used with the built-in defaults.
pub fn configure(config: LoggerConfig) -> Result<()> {
  GLOBAL_LOGGER.configure(config)
}

/// Returns the process-wide logger, opening its sink on the first call.
///
/// # Examples
///
/// ```no_run
/// use linelog::{get_instance, Log};
///
/// let logger = get_instance().expect("log sink unavailable");
/// logger.log("service started".into()).expect("log write failed");
/// ```
pub fn get_instance() -> Result<&'static Logger> {
  GLOBAL_LOGGER.get_instance()
}

/// Writes one line through the process-wide logger.
pub fn log(message: impl Into<LogMessage>) -> Result<()> {
  GLOBAL_LOGGER.log(message)
}

/// Flushes and closes the process-wide sink. Idempotent.
pub fn shutdown() -> Result<()> {
  GLOBAL_LOGGER.shutdown()
}

/// Configures and eagerly opens the process-wide logger.
///
/// The returned guard closes the sink when dropped.
///
/// ```no_run
/// fn main() -> linelog::Result<()> {
///   let _guard = linelog::init(linelog::LoggerConfig::default().with_path("app.log"))?;
///   linelog::log("up and running")?;
///   Ok(())
/// }
/// ```
pub fn init(config: LoggerConfig) -> Result<ShutdownGuard> {
  GLOBAL_LOGGER.configure(config)?;
  GLOBAL_LOGGER.get_instance()?;
  Ok(ShutdownGuard::new())
}
