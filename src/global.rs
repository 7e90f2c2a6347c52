//! Process-wide default logger
//!
//! A [`Logger`] on standard error, threshold `ERROR`, timestamps on. It is
//! created on first use, lives until the process exits and is never closed.
//! Programs that pass loggers explicitly do not need it; small programs can
//! log through the free functions here (or the crate's macros) without any
//! setup.
//!
//! ```
//! use leveled_log::{default_logger, Level};
//!
//! default_logger().set_level(Level::DEBUG);
//! default_logger().set_timestamps(false);
//! leveled_log::infof(format_args!("cache warmed in {}ms", 12));
//! ```

use crate::core::{Level, Logger, LoggerError};
use std::fmt;
use std::sync::LazyLock;

static DEFAULT: LazyLock<Logger> = LazyLock::new(Logger::stderr);

/// The shared default logger.
pub fn default_logger() -> &'static Logger {
    &DEFAULT
}

/// Whether the default logger would write a message at `level`.
pub fn enabled(level: Level) -> bool {
    DEFAULT.enabled(level)
}

/// Forwards to [`Logger::debugf`] on the default logger.
#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    DEFAULT.debugf(args);
}

/// Forwards to [`Logger::infof`] on the default logger.
#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    DEFAULT.infof(args);
}

/// Forwards to [`Logger::errorf`] on the default logger.
#[track_caller]
#[must_use = "the returned error is meant to be propagated"]
pub fn errorf(args: fmt::Arguments<'_>) -> LoggerError {
    DEFAULT.errorf(args)
}

/// Forwards to [`Logger::error`] on the default logger.
#[track_caller]
pub fn error<E: fmt::Display>(err: E) -> E {
    DEFAULT.error(err)
}

/// Forwards to [`Logger::fatalf`] on the default logger.
#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    DEFAULT.fatalf(args)
}

/// Forwards to [`Logger::fatal`] on the default logger.
#[track_caller]
pub fn fatal<E: fmt::Display>(err: E) -> ! {
    DEFAULT.fatal(err)
}
