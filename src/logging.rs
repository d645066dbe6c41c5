// Console output helpers. The console is the operator interface, so status
// lines go straight to stdout/stderr with a timestamp prefix. Callers embed
// their scope in the message, e.g. "[Connector] League Client started."

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Local;
use once_cell::sync::Lazy;

/// Process-wide switch for per-tick diagnostic lines, set once from config.
pub static VERBOSE_LOGGING: Lazy<AtomicBool> = Lazy::new(|| AtomicBool::new(false));

pub fn set_verbose(enabled: bool) {
  VERBOSE_LOGGING.store(enabled, Ordering::Relaxed);
}

pub fn verbose_enabled() -> bool {
  VERBOSE_LOGGING.load(Ordering::Relaxed)
}

fn timestamp() -> String {
  Local::now().format("%H:%M:%S").to_string()
}

/// Status line on stdout.
pub fn status(message: &str) {
  println!("{} {}", timestamp(), message);
}

/// Error line on stderr, with the legacy `[ERROR] »` marker.
pub fn error(message: &str) {
  eprintln!("{} [ERROR] » {}", timestamp(), message);
}

/// Diagnostic line that only prints when verbose logging is enabled.
#[macro_export]
macro_rules! verbose_log {
  ($($arg:tt)*) => {
    if $crate::logging::verbose_enabled() {
      $crate::logging::status(&format!($($arg)*));
    }
  };
}
