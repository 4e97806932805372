//! The opaque logger handle.
//!
//! `Logger` is the only type callers hold. Everything it owns lives in the
//! private `Shared` struct below, so the sink, the lock and any later fields
//! can change without touching a single call site.

use crate::{
  config::LoggerConfig,
  error::Result,
  model::LogMessage,
  sink::{ConsoleMirror, Sink},
};
use parking_lot::Mutex;
use std::{
  fmt,
  path::{Path, PathBuf},
  sync::Arc,
};

/// The single operation a logger exposes.
///
/// Code that only needs to write should depend on `&dyn Log` (or a generic
/// `L: Log`) rather than on `Logger` itself.
pub trait Log: Send + Sync {
  /// Writes one message as one contiguous line.
  ///
  /// Fails only when the file sink cannot be written. Console output never
  /// affects the result.
  fn log(&self, message: LogMessage) -> Result<()>;
}

struct Shared {
  // Path is kept outside the lock so diagnostics never contend with writers.
  path: PathBuf,
  sink: Mutex<Sink>,
  console: Option<ConsoleMirror>,
}

impl Shared {
  fn write(&self, message: &LogMessage) -> Result<()> {
    let result = {
      let mut sink = self.sink.lock();
      // A closed sink rejects the message, so the console must not show it.
      if sink.is_open() {
        if let Some(console) = &self.console {
          console.mirror(message.as_str());
        }
      }
      sink.write_line(message.as_str())
    };
    if let Err(e) = &result {
      tracing::warn!(path = ?self.path, error = %e, "log write failed");
    }
    result
  }
}

/// Handle to a shared, serialized log sink.
///
/// Cloning is cheap and every clone writes to the same sink through the same
/// lock. The sink is closed when the last clone is dropped or when `close`
/// is called explicitly.
#[derive(Clone)]
pub struct Logger {
  inner: Arc<Shared>,
}

impl Logger {
  /// Validates `config` and opens its sink.
  pub fn open(config: &LoggerConfig) -> Result<Self> {
    config.validate()?;
    let sink = Sink::open(&config.path)?;
    let console = config
      .console
      .then(|| ConsoleMirror::new(config.console_prefix.clone()));
    Ok(Self {
      inner: Arc::new(Shared {
        path: config.path.clone(),
        sink: Mutex::new(sink),
        console,
      }),
    })
  }

  #[cfg(test)]
  fn open_with_console(config: &LoggerConfig, console: ConsoleMirror) -> Result<Self> {
    config.validate()?;
    let sink = Sink::open(&config.path)?;
    Ok(Self {
      inner: Arc::new(Shared {
        path: config.path.clone(),
        sink: Mutex::new(sink),
        console: Some(console),
      }),
    })
  }

  /// Flushes and closes the sink. Later `log` calls return `SinkClosed`.
  /// Calling this more than once is harmless.
  pub fn close(&self) -> Result<()> {
    self.inner.sink.lock().close()
  }

  pub fn path(&self) -> &Path {
    &self.inner.path
  }

  /// Whether both handles refer to the same underlying state.
  pub fn ptr_eq(&self, other: &Logger) -> bool {
    Arc::ptr_eq(&self.inner, &other.inner)
  }
}

impl Log for Logger {
  fn log(&self, message: LogMessage) -> Result<()> {
    self.inner.write(&message)
  }
}

impl<L: Log + ?Sized> Log for Arc<L> {
  fn log(&self, message: LogMessage) -> Result<()> {
    (**self).log(message)
  }
}

impl<L: Log + ?Sized> Log for &L {
  fn log(&self, message: LogMessage) -> Result<()> {
    (**self).log(message)
  }
}

impl fmt::Debug for Logger {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Logger")
      .field("path", &self.inner.path)
      .finish_non_exhaustive()
  }
}
