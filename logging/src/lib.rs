//! # linelog
//!
//! A process-wide, thread-safe line logger.
//!
//! Any number of threads may call [`log`] at the same time. Each message is
//! written to an append-only file as one contiguous line and, unless
//! disabled, mirrored to stdout. The file is opened lazily on first use and
//! kept open until [`shutdown`] (or the guard returned by [`init`]) closes it.
//!
//! ## Core Concepts
//!
//! - **Logger**: an opaque, cloneable handle. Its sink and lock are private.
//! - **Log**: the one-method trait callers should depend on.
//! - **LoggerCell**: lazy, exactly-once construction. A failed construction
//!   is final and reported to every caller.
//! - **Global logger**: one `LoggerCell` per process, reached through
//!   [`get_instance`], [`log`], [`configure`], [`init`] and [`shutdown`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::thread;
//!
//! fn main() -> linelog::Result<()> {
//!   let _guard = linelog::init(linelog::LoggerConfig::default().with_path("app.log"))?;
//!
//!   let workers: Vec<_> = (0..4)
//!     .map(|i| thread::spawn(move || linelog::log(format!("Thread {} - Message 0", i))))
//!     .collect();
//!   for worker in workers {
//!     worker.join().expect("worker panicked")?;
//!   }
//!   Ok(())
//! }
//! ```

mod cell;
pub mod config;
pub mod error;
mod global;
mod guards;
mod logger;
pub mod model;
pub mod sink;

pub use cell::LoggerCell;
pub use config::{LoggerConfig, DEFAULT_CONSOLE_PREFIX, DEFAULT_LOG_PATH};
pub use error::{Error, Result};
pub use global::{configure, get_instance, init, log, shutdown};
pub use guards::ShutdownGuard;
pub use logger::{Log, Logger};
pub use model::LogMessage;
