//! Logging macros for ergonomic log message formatting.
//!
//! Each macro takes `format!`-style arguments and builds them with
//! `format_args!` at the call site, so a suppressed level costs no formatting
//! and the reported location is the line holding the macro.
//!
//! Without a target the default logger is used; `logger: <expr>` selects an
//! explicit one.
//!
//! # Examples
//!
//! ```
//! use leveled_log::prelude::*;
//! use leveled_log::{errorf, infof};
//!
//! let logger = Logger::new(MemorySink::new());
//!
//! let port = 8080;
//! infof!(logger: logger, "listening on port {}", port);
//!
//! let err = errorf!("bad request from {}", "10.0.0.1");
//! assert_eq!(err.to_string(), "bad request from 10.0.0.1");
//! ```

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use leveled_log::prelude::*;
/// # let logger = Logger::new(MemorySink::new());
/// use leveled_log::debugf;
/// debugf!(logger: logger, "Counter value: {}", 10);
/// debugf!("Debug information");
/// ```
#[macro_export]
macro_rules! debugf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::debugf(::std::format_args!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! infof {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::infof(::std::format_args!($($arg)+))
    };
}

/// Log an error-level message and evaluate to the matching [`LoggerError`](crate::LoggerError).
///
/// # Examples
///
/// ```
/// # use leveled_log::prelude::*;
/// # let logger = Logger::new(MemorySink::new());
/// use leveled_log::errorf;
/// fn check(logger: &Logger, code: u16) -> Result<()> {
///     if code >= 500 {
///         return Err(errorf!(logger: logger, "upstream failed with {}", code));
///     }
///     Ok(())
/// }
/// assert!(check(&logger, 503).is_err());
/// ```
#[macro_export]
macro_rules! errorf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::errorf(::std::format_args!($($arg)+))
    };
}

/// Log a fatal-level message and exit the process with status 1.
///
/// # Examples
///
/// ```no_run
/// use leveled_log::fatalf;
/// fatalf!("Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatalf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::fatalf(::std::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Level, Logger};
    use crate::sinks::MemorySink;

    fn capture(level: Level) -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let logger = Logger::builder().level(level).timestamps(false).build(sink.clone());
        (logger, sink)
    }

    #[test]
    fn test_debugf_macro() {
        let (logger, sink) = capture(Level::DEBUG);
        debugf!(logger: logger, "Count: {}", 5);
        assert!(sink.contents().starts_with(". macros.rs:"));
        assert!(sink.contents().ends_with(" Count: 5\n"));
    }

    #[test]
    fn test_infof_macro() {
        let (logger, sink) = capture(Level::INFO);
        infof!(logger: logger, "Items: {}", 100);
        assert!(sink.contents().ends_with(" Items: 100\n"));
    }

    #[test]
    fn test_errorf_macro() {
        let (logger, sink) = capture(Level::ERROR);
        let err = errorf!(logger: logger, "Code: {}", 500);
        assert_eq!(err.to_string(), "Code: 500");
        assert!(sink.contents().starts_with("E "));
    }

    #[test]
    fn test_macro_reports_call_site() {
        let (logger, sink) = capture(Level::INFO);
        infof!(logger: logger, "here");
        let expected = format!("macros.rs:{}", line!() - 1);
        assert!(sink.contents().contains(&expected), "got {:?}", sink.contents());
    }

    #[test]
    fn test_default_target_macros() {
        debugf!("Debug message");
        infof!("Info message {}", 1);
        let err = errorf!("Error message {}", 2);
        assert_eq!(err.to_string(), "Error message 2");
    }
}
