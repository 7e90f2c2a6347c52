//! Adapter for arbitrary `io::Write` destinations

use super::closed_error;
use crate::core::Sink;
use std::io::{self, Write};

/// Wraps any writer (a `TcpStream`, a pipe, a `Vec<u8>`) as a sink.
///
/// Closing flushes and drops the writer, which releases whatever the writer
/// owns.
///
/// # Example
///
/// ```
/// use leveled_log::{Logger, WriterSink};
///
/// let logger = Logger::new(WriterSink::named("pipe", std::io::sink()));
/// let _ = logger.errorf(format_args!("discarded"));
/// assert_eq!(logger.sink_name(), "pipe");
/// ```
#[derive(Debug)]
pub struct WriterSink<W: Write + Send> {
    writer: Option<W>,
    name: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self::named("writer", writer)
    }

    pub fn named(name: impl Into<String>, writer: W) -> Self {
        Self {
            writer: Some(writer),
            name: name.into(),
        }
    }

    /// Take back the writer, or `None` if the sink was closed.
    pub fn into_inner(self) -> Option<W> {
        self.writer
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(writer) => writer.write_all(buf),
            None => Err(closed_error(&self.name)),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
