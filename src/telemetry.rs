//! Logging setup shared by the binaries.
//!
//! Events go to stderr so stdout carries only the report lines. The filter
//! comes from `RUST_LOG` and defaults to `warn`.

use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Error returned when a global subscriber is already installed.
pub type InitError = Box<dyn std::error::Error + Send + Sync>;

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global `fmt` subscriber.
///
/// # Errors
///
/// Returns [`InitError`] when a global subscriber is already installed.
pub fn init() -> Result<(), InitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
}

/// Installs the global subscriber, writing a one-line notice to
/// `diagnostics` when that fails.
///
/// The binaries keep running without logging in that case; their stdout is
/// unaffected.
///
/// # Errors
///
/// Returns an I/O error only when the notice cannot be written.
pub fn install(diagnostics: &mut impl Write) -> io::Result<()> {
    match init() {
        Ok(()) => Ok(()),
        Err(err) => writeln!(diagnostics, "logging disabled: {err}"),
    }
}
