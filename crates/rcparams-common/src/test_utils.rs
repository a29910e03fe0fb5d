//! Test utilities and shared test helpers for the rcparams workspace.
//!
//! Enabled for this crate's own tests and, through the `testing` feature,
//! for the tests of the other workspace crates.

use once_cell::sync::Lazy;
use std::ffi::{OsStr, OsString};
use std::sync::{Mutex, MutexGuard, Once};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Serializes tests that read or write process environment variables.
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Take the environment lock.
///
/// A test that panicked while holding the lock poisons it; the guard is
/// recovered so one failure does not cascade into every later test.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Set an environment variable for the lifetime of the returned guard.
///
/// The previous value is restored on drop. Hold [`env_lock`] while the guard
/// is alive.
pub fn set_env_var(name: &str, value: impl AsRef<OsStr>) -> EnvGuard {
    EnvGuard::set(name, value.as_ref())
}

/// Remove an environment variable for the lifetime of the returned guard.
pub fn remove_env_var(name: &str) -> EnvGuard {
    EnvGuard::remove(name)
}

/// Write `contents` to a fresh temporary rc file.
#[cfg(any(test, feature = "tempfile"))]
pub fn write_temp_rc(contents: &str) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temporary file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temporary rc file");
    file.flush().expect("Failed to flush temporary rc file");
    file
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Restores an environment variable to its previous state on drop.
#[derive(Debug)]
pub struct EnvGuard {
    name: String,
    previous: Option<OsString>,
}

impl EnvGuard {
    fn set(name: &str, value: &OsStr) -> Self {
        let previous = std::env::var_os(name);
        std::env::set_var(name, value);
        Self {
            name: name.to_string(),
            previous,
        }
    }

    fn remove(name: &str) -> Self {
        let previous = std::env::var_os(name);
        std::env::remove_var(name);
        Self {
            name: name.to_string(),
            previous,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(value) => std::env::set_var(&self.name, value),
            None => std::env::remove_var(&self.name),
        }
    }
}
