//! In-memory sink

use super::closed_error;
use crate::core::Sink;
use parking_lot::Mutex;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared in-memory buffer. Clones observe the same buffer, so one clone can
/// be handed to a [`Logger`](crate::Logger) while another reads the output.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
    closed: Arc<AtomicBool>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written lines without their terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

impl Sink for MemorySink {
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        if self.is_closed() {
            return Err(closed_error(self.name()));
        }
        self.buffer.lock().extend_from_slice(buf);
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.closed.store(true, Ordering::Release);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let reader = MemorySink::new();
        let mut writer = reader.clone();

        writer.write_all(b"one\ntwo\n").unwrap();

        assert_eq!(reader.contents(), "one\ntwo\n");
        assert_eq!(reader.lines(), vec!["one", "two"]);

        reader.clear();
        assert!(writer.contents().is_empty());
    }

    #[test]
    fn test_closed_rejects_writes() {
        let mut sink = MemorySink::new();
        sink.close().unwrap();
        assert!(sink.is_closed());
        assert!(sink.write_all(b"late\n").is_err());
    }
}
