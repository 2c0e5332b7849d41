//! Logging configuration for barangay.
//!
//! Store, report and export operations emit `tracing` events under the
//! `barangay` target; this module installs the subscriber that prints them.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Target prefix of every event emitted by this crate.
const LOG_TARGET: &str = "barangay";

/// How much the `brms` binary logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only (`-q`).
    Quiet,
    /// Record and report events (default).
    #[default]
    Normal,
    /// Store loading and search details (`-v`).
    Verbose,
    /// Everything (`-vv` and up).
    Trace,
}

impl Verbosity {
    /// Map the CLI's `-q` / `-v` flags to a verbosity.
    ///
    /// `-q` wins over any number of `-v`.
    #[must_use]
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }

    /// The most detailed level shown.
    #[must_use]
    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Filter directive limiting output to this crate at [`Self::level`].
    #[must_use]
    pub fn directive(self) -> String {
        format!("{LOG_TARGET}={}", self.level())
    }
}

/// Install the global subscriber for the `brms` binary.
///
/// `RUST_LOG`, when set, replaces the directive derived from `verbosity`.
/// Events go to stderr so that CSV or JSON written to stdout stays clean.
/// Calling this again after a subscriber is installed does nothing.
///
/// # Examples
///
/// ```no_run
/// use barangay::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::from_flags(false, 1));
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}

/// Capture this crate's debug events in test output.
///
/// Store and report tests call this so that their `info!`/`warn!` paths
/// run through a real subscriber.
#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(Verbosity::Verbose.directive())
        .with_test_writer()
        .try_init();
}
