//! Sink implementations

pub mod console;
pub mod file;
pub mod memory;
pub mod writer;

pub use console::StderrSink;
pub use file::FileSink;
pub use memory::MemorySink;
pub use writer::WriterSink;

pub use crate::core::Sink;

use crate::core::LoggerError;
use std::io;

/// Error returned by a sink used after `close`.
pub(crate) fn closed_error(sink: &str) -> io::Error {
    io::Error::other(LoggerError::sink_closed(sink))
}
