use std::{io, path::PathBuf, sync::Arc};
use thiserror::Error;

/// The main error type for the `linelog` library.
///
/// The type is `Clone` so that a single failed initialization can be handed
/// to every thread that asks for the shared logger.
#[derive(Debug, Clone, Error)]
pub enum Error {
  #[error("Failed to open log sink {path:?}: {source}")]
  SinkOpen {
    path: PathBuf,
    #[source]
    source: Arc<io::Error>,
  },

  #[error("Failed to write to log sink {path:?}: {source}")]
  SinkWrite {
    path: PathBuf,
    #[source]
    source: Arc<io::Error>,
  },

  #[error("Failed to close log sink {path:?}: {source}")]
  SinkClose {
    path: PathBuf,
    #[source]
    source: Arc<io::Error>,
  },

  #[error("Log sink {path:?} is closed")]
  SinkClosed { path: PathBuf },

  #[error("Failed to read configuration file: {0}")]
  ConfigRead(#[source] Arc<io::Error>),

  #[error("Failed to parse configuration: {0}")]
  ConfigParse(String),

  #[error("Invalid configuration value for '{field}': {message}")]
  InvalidConfigValue { field: String, message: String },

  #[error("Logger is already configured or initialized")]
  AlreadyConfigured,
}

impl Error {
  pub(crate) fn sink_open(path: impl Into<PathBuf>, source: io::Error) -> Self {
    Error::SinkOpen {
      path: path.into(),
      source: Arc::new(source),
    }
  }

  pub(crate) fn sink_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
    Error::SinkWrite {
      path: path.into(),
      source: Arc::new(source),
    }
  }

  pub(crate) fn sink_close(path: impl Into<PathBuf>, source: io::Error) -> Self {
    Error::SinkClose {
      path: path.into(),
      source: Arc::new(source),
    }
  }

  /// Returns the underlying I/O error kind for sink and config read failures.
  pub fn io_kind(&self) -> Option<io::ErrorKind> {
    match self {
      Error::SinkOpen { source, .. }
      | Error::SinkWrite { source, .. }
      | Error::SinkClose { source, .. } => Some(source.kind()),
      Error::ConfigRead(source) => Some(source.kind()),
      _ => None,
    }
  }
}

/// A specialized `Result` type for `linelog` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
