// examples/threaded_usage.rs

use std::path::Path;
use std::thread;
use tracing_subscriber::EnvFilter;

fn main() -> linelog::Result<()> {
  // Internal diagnostics of linelog (sink open/close, failures) go to stderr.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  // 1. Load the logger configuration and open the shared sink.
  let config_path = Path::new(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/examples/linelog.yaml"
  ));
  let config = linelog::LoggerConfig::from_file(config_path)?;
  let _guard = linelog::init(config)?;
  // `_guard` must be kept alive until every thread has joined.

  // 2. Four workers, five messages each, all through the same logger.
  let mut handles = vec![];
  for i in 0..4 {
    handles.push(thread::spawn(move || -> linelog::Result<()> {
      for j in 0..5 {
        linelog::log(format!("Thread {} - Message {}", i, j))?;
      }
      Ok(())
    }));
  }

  for handle in handles {
    handle.join().expect("worker thread panicked")?;
  }

  linelog::log("All threads are finished!")?;

  // The guard is dropped here, closing the sink.
  Ok(())
}
