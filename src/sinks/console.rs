//! Standard error sink

use super::closed_error;
use crate::core::Sink;
use std::io::{self, Write};

/// Writes lines to the process's standard error stream.
///
/// Closing only flushes and marks the sink closed; file descriptor 2 stays
/// open for the rest of the process.
#[derive(Debug, Default)]
pub struct StderrSink {
    closed: bool,
}

impl StderrSink {
    pub fn new() -> Self {
        Self { closed: false }
    }
}

impl Sink for StderrSink {
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        if self.closed {
            return Err(closed_error(self.name()));
        }
        // Lock the handle so the line goes out in a single locked write.
        io::stderr().lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }

    fn close(&mut self) -> io::Result<()> {
        self.closed = true;
        io::stderr().flush()
    }

    fn name(&self) -> &str {
        "stderr"
    }
}
