//! Main logger implementation

use super::{
    caller::{location_field, CallerLocation},
    config::LoggerConfig,
    error::{LoggerError, Result},
    log_level::Level,
    metrics::LoggerMetrics,
    sink::Sink,
    timestamp,
};
use crate::sinks::StderrSink;
use parking_lot::Mutex;
use std::fmt::{self, Write as _};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

/// Exit status used by [`Logger::fatal`] and [`Logger::fatalf`].
pub const FATAL_EXIT_CODE: i32 = 1;

/// Callback invoked with each sink write failure.
pub type WriteErrorCallback = Arc<dyn Fn(&LoggerError) + Send + Sync>;

/// Leveled logger writing one line per call into a single owned [`Sink`].
///
/// Every call is checked against the threshold first; suppressed calls do no
/// formatting and allocate nothing. Accepted calls are rendered as
///
/// ```text
/// [YYYY/MM/DD HH:MM:SS ]<L> <basename:line, 18 columns> <message>
/// ```
///
/// and written under a mutex, so concurrent callers never interleave lines.
///
/// # Write failures
///
/// Logging is best-effort. A failed write is never reported to the code that
/// issued the call: it is counted in [`LoggerMetrics::write_failures`] and
/// passed to the `on_write_error` hook if one was configured, otherwise it is
/// discarded.
///
/// # Example
///
/// ```
/// use leveled_log::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .level(Level::INFO)
///     .timestamps(false)
///     .build(sink.clone());
///
/// logger.infof(format_args!("listening on port {}", 8080));
/// assert!(sink.contents().starts_with("_ "));
/// ```
pub struct Logger {
    level: AtomicU8,
    timestamps: AtomicBool,
    sink: Mutex<Box<dyn Sink>>,
    sink_name: String,
    metrics: LoggerMetrics,
    on_write_error: Option<WriteErrorCallback>,
}

impl Logger {
    /// Create a logger owning `sink`, with threshold `ERROR` and timestamps on.
    #[must_use]
    pub fn new<S: Sink + 'static>(sink: S) -> Self {
        Self::with_config(sink, &LoggerConfig::default())
    }

    #[must_use]
    pub fn with_config<S: Sink + 'static>(sink: S, config: &LoggerConfig) -> Self {
        let sink_name = sink.name().to_string();
        let sink: Box<dyn Sink> = Box::new(sink);
        Self {
            level: AtomicU8::new(config.level.ordinal()),
            timestamps: AtomicBool::new(config.timestamps),
            sink: Mutex::new(sink),
            sink_name,
            metrics: LoggerMetrics::new(),
            on_write_error: None,
        }
    }

    /// Logger on the process's standard error stream.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(StderrSink::new())
    }

    pub fn level(&self) -> Level {
        Level::from_ordinal(self.level.load(Ordering::Relaxed))
    }

    /// Change the threshold. Intended for startup; calls already past the
    /// level check are unaffected.
    pub fn set_level(&self, level: Level) {
        self.level.store(level.ordinal(), Ordering::Relaxed);
    }

    pub fn timestamps(&self) -> bool {
        self.timestamps.load(Ordering::Relaxed)
    }

    pub fn set_timestamps(&self, enabled: bool) {
        self.timestamps.store(enabled, Ordering::Relaxed);
    }

    /// Whether a message at `level` would be written.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level.passes(self.level())
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn sink_name(&self) -> &str {
        &self.sink_name
    }

    /// Close the owned sink.
    ///
    /// Stop issuing log calls before closing: later calls are written to the
    /// closed sink and fail under the best-effort policy.
    pub fn close(&self) -> Result<()> {
        let mut sink = self.sink.lock();
        sink.close()
            .map_err(|source| LoggerError::io_operation("closing sink", self.sink_name.clone(), source))
    }

    /// Log at `level`, attributing the line to the caller.
    #[track_caller]
    #[inline]
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        self.log_at(level, Some(CallerLocation::caller()), args);
    }

    /// Log at `level` with an explicit location; `None` renders as `unknown:0`.
    pub fn log_at(&self, level: Level, location: Option<CallerLocation>, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            self.metrics.record_suppressed();
            return;
        }

        let line = if self.timestamps() {
            let now = timestamp::now_prefix();
            format_line(level, location.as_ref(), Some(&now), args)
        } else {
            format_line(level, location.as_ref(), None, args)
        };

        self.write_line(line.as_bytes());
    }

    fn write_line(&self, line: &[u8]) {
        let result = {
            let mut sink = self.sink.lock();
            sink.write_all(line).and_then(|()| sink.flush())
        };

        match result {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(source) => {
                self.metrics.record_write_failure();
                if let Some(ref callback) = self.on_write_error {
                    let err =
                        LoggerError::io_operation("writing log line", self.sink_name.clone(), source);
                    callback(&err);
                }
            }
        }
    }

    #[track_caller]
    #[inline]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::DEBUG, args);
    }

    #[track_caller]
    #[inline]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(Level::INFO, args);
    }

    /// Log at `ERROR` and return the formatted message as an error, whether or
    /// not the line was written.
    ///
    /// ```
    /// use leveled_log::{Logger, Level, MemorySink};
    ///
    /// let logger = Logger::new(MemorySink::new());
    /// logger.set_level(Level::FATAL);
    /// let err = logger.errorf(format_args!("x={}", 5));
    /// assert_eq!(err.to_string(), "x=5");
    /// ```
    #[track_caller]
    #[must_use = "the returned error is meant to be propagated"]
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> LoggerError {
        self.log(Level::ERROR, args);
        let mut message = String::new();
        let _ = message.write_fmt(args);
        LoggerError::message(message)
    }

    /// Log `Error: <err>` at `ERROR` and hand `err` back for propagation.
    ///
    /// ```
    /// # use leveled_log::{Logger, MemorySink};
    /// # let logger = Logger::new(MemorySink::new());
    /// fn load(logger: &Logger) -> Result<(), std::io::Error> {
    ///     std::fs::read("/does/not/exist").map_err(|e| logger.error(e))?;
    ///     Ok(())
    /// }
    /// assert!(load(&logger).is_err());
    /// ```
    #[track_caller]
    pub fn error<E: fmt::Display>(&self, err: E) -> E {
        self.log(Level::ERROR, format_args!("Error: {}", err));
        err
    }

    /// Log at `FATAL` and exit the process with status 1.
    ///
    /// No destructors run and the sink is not closed.
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.log(Level::FATAL, args);
        std::process::exit(FATAL_EXIT_CODE)
    }

    /// Log `Error: <err>` at `FATAL` and exit the process with status 1.
    #[track_caller]
    pub fn fatal<E: fmt::Display>(&self, err: E) -> ! {
        self.log(Level::FATAL, format_args!("Error: {}", err));
        std::process::exit(FATAL_EXIT_CODE)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("timestamps", &self.timestamps())
            .field("sink", &self.sink_name)
            .finish_non_exhaustive()
    }
}

/// Render one complete log line.
///
/// `timestamp` is the already formatted prefix (see
/// [`format_timestamp`](super::timestamp::format_timestamp)). Exactly one
/// trailing newline is guaranteed.
///
/// ```
/// use leveled_log::{format_line, CallerLocation, Level};
///
/// let loc = CallerLocation::new("src/main.rs", 12);
/// let line = format_line(Level::INFO, Some(&loc), None, format_args!("ready"));
/// assert_eq!(line, "_ main.rs:12         ready\n");
/// ```
pub fn format_line(
    level: Level,
    location: Option<&CallerLocation>,
    timestamp: Option<&str>,
    args: fmt::Arguments<'_>,
) -> String {
    let mut line = String::with_capacity(64);
    if let Some(prefix) = timestamp {
        line.push_str(prefix);
    }
    line.push_str(&level.marker());
    line.push(' ');
    line.push_str(&location_field(location));
    line.push(' ');
    // Writing into a String only fails if a Display impl reports an error.
    let _ = line.write_fmt(args);

    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use leveled_log::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .level(Level::DEBUG)
///     .timestamps(false)
///     .on_write_error(Arc::new(|err: &LoggerError| {
///         eprintln!("[LOGGER ERROR] {}", err);
///     }))
///     .build(StderrSink::new());
/// ```
#[derive(Default)]
pub struct LoggerBuilder {
    config: LoggerConfig,
    on_write_error: Option<WriteErrorCallback>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.config.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamps(mut self, enabled: bool) -> Self {
        self.config.timestamps = enabled;
        self
    }

    /// Replace threshold and timestamp settings with `config`
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Observe sink write failures instead of discarding them silently.
    ///
    /// The callback runs on the logging thread after the write lock is
    /// released.
    #[must_use = "builder methods return a new value"]
    pub fn on_write_error(mut self, callback: WriteErrorCallback) -> Self {
        self.on_write_error = Some(callback);
        self
    }

    pub fn build<S: Sink + 'static>(self, sink: S) -> Logger {
        let mut logger = Logger::with_config(sink, &self.config);
        logger.on_write_error = self.on_write_error;
        logger
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
