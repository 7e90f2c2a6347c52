//! # Leveled Log
//!
//! A thin, synchronous leveled logger. Each call is filtered by severity,
//! rendered as a single line carrying a timestamp, a one-character level
//! marker and the caller's `file:line`, then written to one owned sink under
//! a mutex.
//!
//! ```text
//! 2018/03/09 07:05:03 E server.rs:42       connection refused
//! ```
//!
//! ## Levels
//!
//! | Level | Marker |
//! |-------|--------|
//! | `FATAL` | `F` |
//! | `ERROR` | `E` |
//! | `INFO`  | `_` |
//! | `DEBUG` | `.` |
//!
//! A new logger writes `FATAL` and `ERROR` only. Raise the threshold to
//! `INFO` for extra operator detail or `DEBUG` during development.
//!
//! ## Usage
//!
//! ```
//! use leveled_log::prelude::*;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new(sink.clone());
//! logger.set_level(Level::DEBUG);
//! logger.set_timestamps(false);
//!
//! logger.debugf(format_args!("loaded {} routes", 3));
//! let err = logger.errorf(format_args!("x={}", 5));
//! assert_eq!(err.to_string(), "x=5");
//! assert_eq!(sink.lines().len(), 2);
//! ```
//!
//! The free functions and macros write to a process-wide logger on standard
//! error; see [`global`].

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        CallerLocation, Level, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
        Result, Sink, WriteErrorCallback,
    };
    pub use crate::global::default_logger;
    pub use crate::sinks::{FileSink, MemorySink, StderrSink, WriterSink};
}

pub use crate::core::{
    format_line, CallerLocation, Level, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerMetrics, Result, Sink, WriteErrorCallback, FATAL_EXIT_CODE,
};
pub use global::{debugf, default_logger, error, errorf, fatal, fatalf, infof};
pub use sinks::{FileSink, MemorySink, StderrSink, WriterSink};
