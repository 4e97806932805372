// `init` configures the process-wide logger, so it gets its own binary.

use linelog::{Error, LoggerConfig};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_init_guard_closes_on_drop() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("guarded.log");

  let guard = linelog::init(LoggerConfig::default().with_path(&path).with_console(false)).unwrap();
  // The sink is opened eagerly.
  assert!(path.exists());

  linelog::log("inside guard").unwrap();
  assert!(matches!(
    linelog::init(LoggerConfig::default()),
    Err(Error::AlreadyConfigured)
  ));

  drop(guard);
  assert!(matches!(linelog::log("outside guard"), Err(Error::SinkClosed { .. })));
  // A manual shutdown after the guard is still fine.
  linelog::shutdown().unwrap();

  assert_eq!(fs::read_to_string(&path).unwrap(), "inside guard\n");
}
