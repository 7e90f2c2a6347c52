//! Sink trait for log output destinations

use std::io;

/// Destination a [`Logger`](super::Logger) writes complete lines into.
///
/// A sink is owned by exactly one logger, which only touches it while holding
/// its write lock, so implementations need not synchronize internally.
///
/// Failures returned from `write_all` and `flush` never reach the code that
/// issued the log call: the logger counts them and forwards them to its
/// optional write-error hook, otherwise they are dropped.
pub trait Sink: Send {
    /// Write one fully formatted line, newline included.
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Release the underlying resource. Later writes should fail.
    fn close(&mut self) -> io::Result<()>;

    fn name(&self) -> &str;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        (**self).write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
