// Runs the shutdown hook of the process-wide logger when dropped.

/// Returned by [`crate::init`].
///
/// Statics are never dropped at process exit, so the global sink is only
/// flushed and closed through this guard or an explicit
/// [`crate::shutdown`] call. Keep it alive in `main` until every worker
/// thread has joined.
#[must_use = "The ShutdownGuard must be kept alive; dropping it closes the global log sink"]
pub struct ShutdownGuard {
  _private: (),
}

impl ShutdownGuard {
  pub(crate) fn new() -> Self {
    Self { _private: () }
  }
}

impl Drop for ShutdownGuard {
  fn drop(&mut self) {
    if let Err(e) = crate::global::shutdown() {
      eprintln!("[linelog:ERROR] Failed to close log sink during shutdown: {}", e);
    }
  }
}
