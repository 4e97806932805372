// Durable destinations for log lines: an append-only file and an optional
// best-effort console mirror.

use crate::error::{Error, Result};
use std::{
  fs::{File, OpenOptions},
  io::{self, Write},
  path::{Path, PathBuf},
};

/// An append-only file that receives one line per message.
///
/// The file handle is held from `open` until `close` (or drop). Each
/// `write_line` either lands the whole line or returns an error.
#[derive(Debug)]
pub struct Sink {
  path: PathBuf,
  file: Option<File>,
}

impl Sink {
  /// Opens `path` in append mode, creating the file if it does not exist.
  ///
  /// Parent directories are not created; a missing directory is an error.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref().to_path_buf();
    let file = OpenOptions::new()
      .create(true)
      .append(true)
      .open(&path)
      .map_err(|e| Error::sink_open(&path, e))?;
    tracing::debug!(path = ?path, "log sink opened");
    Ok(Self {
      path,
      file: Some(file),
    })
  }

  /// Appends `text` followed by a newline and flushes.
  pub fn write_line(&mut self, text: &str) -> Result<()> {
    let file = match self.file.as_mut() {
      Some(file) => file,
      None => {
        return Err(Error::SinkClosed {
          path: self.path.clone(),
        })
      }
    };

    // One buffer, one write_all: the line goes out whole or not at all.
    let mut line = Vec::with_capacity(text.len() + 1);
    line.extend_from_slice(text.as_bytes());
    line.push(b'\n');

    file
      .write_all(&line)
      .and_then(|_| file.flush())
      .map_err(|e| Error::sink_write(&self.path, e))
  }

  /// Flushes and releases the file handle. Closing a closed sink is a no-op.
  pub fn close(&mut self) -> Result<()> {
    let Some(mut file) = self.file.take() else {
      return Ok(());
    };
    let result = file
      .flush()
      .and_then(|_| sync_if_supported(&file))
      .map_err(|e| Error::sink_close(&self.path, e));
    drop(file);
    tracing::debug!(path = ?self.path, "log sink closed");
    result
  }

  pub fn is_open(&self) -> bool {
    self.file.is_some()
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}

// Character devices and FIFOs reject fsync with EINVAL; there is nothing
// buffered to lose for them.
fn sync_if_supported(file: &File) -> io::Result<()> {
  match file.sync_data() {
    Err(e) if matches!(e.kind(), io::ErrorKind::InvalidInput | io::ErrorKind::Unsupported) => Ok(()),
    other => other,
  }
}

impl Drop for Sink {
  fn drop(&mut self) {
    if let Err(e) = self.close() {
      tracing::warn!(path = ?self.path, error = %e, "failed to close log sink");
    }
  }
}

#[derive(Debug, Clone)]
enum ConsoleTarget {
  Stdout,
  #[cfg(test)]
  Captured(std::sync::Arc<parking_lot::Mutex<Vec<u8>>>),
}

/// Best-effort copy of every line to stdout.
#[derive(Debug, Clone)]
pub struct ConsoleMirror {
  prefix: String,
  target: ConsoleTarget,
}

impl ConsoleMirror {
  pub fn new(prefix: impl Into<String>) -> Self {
    Self {
      prefix: prefix.into(),
      target: ConsoleTarget::Stdout,
    }
  }

  /// A mirror that writes into a shared buffer instead of stdout.
  #[cfg(test)]
  pub(crate) fn captured(
    prefix: impl Into<String>,
  ) -> (Self, std::sync::Arc<parking_lot::Mutex<Vec<u8>>>) {
    let buffer = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));
    let mirror = Self {
      prefix: prefix.into(),
      target: ConsoleTarget::Captured(std::sync::Arc::clone(&buffer)),
    };
    (mirror, buffer)
  }

  /// Never fails: a closed or broken stdout is silently ignored.
  pub fn mirror(&self, text: &str) {
    match &self.target {
      ConsoleTarget::Stdout => {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let _ = writeln!(out, "{}{}", self.prefix, text);
        let _ = out.flush();
      }
      #[cfg(test)]
      ConsoleTarget::Captured(buffer) => {
        let _ = writeln!(buffer.lock(), "{}{}", self.prefix, text);
      }
    }
  }

  pub fn prefix(&self) -> &str {
    &self.prefix
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use std::fs;
  use tempfile::tempdir;

  #[test]
  fn open_creates_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("created.log");
    assert!(!path.exists());

    let sink = Sink::open(&path).unwrap();
    assert!(sink.is_open());
    assert!(path.exists());
    assert_eq!(sink.path(), path.as_path());
  }

  #[test]
  fn open_fails_for_missing_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("app.log");

    match Sink::open(&path) {
      Err(Error::SinkOpen { path: p, source }) => {
        assert_eq!(p, path);
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
      }
      other => panic!("expected SinkOpen, got {:?}", other),
    }
  }

  #[test]
  fn write_line_terminates_each_message() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lines.log");
    let mut sink = Sink::open(&path).unwrap();

    sink.write_line("first").unwrap();
    sink.write_line("").unwrap();
    sink.write_line("third").unwrap();

    // Each line is flushed, so the file is complete before close.
    assert_eq!(fs::read_to_string(&path).unwrap(), "first\n\nthird\n");
  }

  #[test]
  fn reopening_appends_instead_of_truncating() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("restart.log");

    let mut sink = Sink::open(&path).unwrap();
    sink.write_line("m1").unwrap();
    sink.close().unwrap();

    let mut sink = Sink::open(&path).unwrap();
    sink.write_line("m2").unwrap();
    sink.close().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "m1\nm2\n");
  }

  #[test]
  fn close_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("close.log");
    let mut sink = Sink::open(&path).unwrap();
    sink.write_line("only once").unwrap();

    assert!(sink.close().is_ok());
    assert!(!sink.is_open());
    assert!(sink.close().is_ok());
    drop(sink);

    assert_eq!(fs::read_to_string(&path).unwrap(), "only once\n");
  }

  #[test]
  fn write_after_close_is_rejected() {
    let dir = tempdir().unwrap();
    let mut sink = Sink::open(dir.path().join("closed.log")).unwrap();
    sink.close().unwrap();

    assert!(matches!(
      sink.write_line("too late"),
      Err(Error::SinkClosed { .. })
    ));
  }

  #[cfg(target_os = "linux")]
  #[test]
  fn write_failure_is_surfaced_and_sink_stays_open() {
    // /dev/full accepts the open but fails every write with ENOSPC.
    if !Path::new("/dev/full").exists() {
      return;
    }
    let mut sink = Sink::open("/dev/full").unwrap();

    match sink.write_line("no space") {
      Err(Error::SinkWrite { source, .. }) => {
        assert_eq!(source.raw_os_error(), Some(28));
      }
      other => panic!("expected SinkWrite, got {:?}", other),
    }
    assert!(sink.is_open());
    assert!(matches!(
      sink.write_line("still no space"),
      Err(Error::SinkWrite { .. })
    ));
  }

  #[cfg(target_os = "linux")]
  #[test]
  fn close_on_character_device_succeeds() {
    // fsync on /dev/null fails with EINVAL; close must still report success.
    if !Path::new("/dev/null").exists() {
      return;
    }
    let mut sink = Sink::open("/dev/null").unwrap();
    sink.write_line("discarded").unwrap();

    assert!(sink.close().is_ok());
    assert!(!sink.is_open());
    assert!(sink.close().is_ok());
  }

  #[test]
  fn captured_mirror_prefixes_each_line() {
    let (mirror, buffer) = ConsoleMirror::captured(">> ");
    mirror.mirror("one");
    mirror.mirror("two");
    assert_eq!(String::from_utf8(buffer.lock().clone()).unwrap(), ">> one\n>> two\n");
  }

  #[test]
  fn console_mirror_never_fails() {
    let mirror = ConsoleMirror::new("[LOG]: ");
    assert_eq!(mirror.prefix(), "[LOG]: ");
    mirror.mirror("console line");
  }
}
