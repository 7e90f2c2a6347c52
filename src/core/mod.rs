//! Core logger types and traits

pub mod caller;
pub mod config;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod timestamp;

pub use caller::{location_field, CallerLocation, LOCATION_WIDTH};
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use log_level::Level;
pub use logger::{format_line, Logger, LoggerBuilder, WriteErrorCallback, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
pub use sink::Sink;
pub use timestamp::{format_timestamp, TIMESTAMP_FORMAT};
