//! Logger metrics for observability
//!
//! Counters for lines written, write failures swallowed by the best-effort
//! policy, and calls suppressed by the level gate.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use leveled_log::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_written();
/// metrics.record_write_failure();
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines handed to the sink without error
    lines_written: AtomicU64,

    /// Lines the sink failed to accept
    write_failures: AtomicU64,

    /// Calls rejected by the level gate before formatting
    suppressed: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    /// Record a written line, returning the previous count
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed.fetch_add(1, Ordering::Relaxed)
    }

    /// Failure rate as a percentage (0.0 - 100.0) of attempted writes
    pub fn failure_rate(&self) -> f64 {
        let failed = self.write_failures() as f64;
        let total = self.lines_written() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.lines_written.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.suppressed.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            lines_written: AtomicU64::new(self.lines_written()),
            write_failures: AtomicU64::new(self.write_failures()),
            suppressed: AtomicU64::new(self.suppressed()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.lines_written(), 0);
        assert_eq!(metrics.write_failures(), 0);
        assert_eq!(metrics.suppressed(), 0);
    }

    #[test]
    fn test_record_returns_previous_value() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_written(), 0);
        assert_eq!(metrics.record_written(), 1);
        assert_eq!(metrics.lines_written(), 2);
    }

    #[test]
    fn test_failure_rate() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.failure_rate(), 0.0);

        for _ in 0..3 {
            metrics.record_written();
        }
        metrics.record_write_failure();

        let rate = metrics.failure_rate();
        assert!((24.9..=25.1).contains(&rate), "Failure rate was {}", rate);
    }

    #[test]
    fn test_reset_and_snapshot() {
        let metrics = LoggerMetrics::new();
        metrics.record_written();
        metrics.record_suppressed();

        let snapshot = metrics.clone();
        metrics.reset();

        assert_eq!(metrics.lines_written(), 0);
        assert_eq!(metrics.suppressed(), 0);
        assert_eq!(snapshot.lines_written(), 1);
        assert_eq!(snapshot.suppressed(), 1);
    }
}
