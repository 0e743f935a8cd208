//! Backend metrics for observability
//!
//! The backend cannot report its own failures through the stream it is
//! failing to write, so health is exposed as counters instead.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing what the terminal backend has done.
///
/// # Example
///
/// ```
/// use rust_term_logger::BackendMetrics;
///
/// let metrics = BackendMetrics::new();
///
/// metrics.record_rendered();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.rendered_count(), 1);
/// assert_eq!(metrics.filtered_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct BackendMetrics {
    /// Entries written to the output stream (including collapsed repeats)
    rendered: AtomicU64,

    /// Entries rejected by the installed filter
    filtered: AtomicU64,

    /// Entries recognised as a repeat of the previous one
    repeats: AtomicU64,

    /// Cursor-erase rewrites performed
    rewrites: AtomicU64,

    /// Entries whose output failed to reach the stream
    write_failures: AtomicU64,
}

impl BackendMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            rendered: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            repeats: AtomicU64::new(0),
            rewrites: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn rendered_count(&self) -> u64 {
        self.rendered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn repeat_count(&self) -> u64 {
        self.repeats.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rewrite_count(&self) -> u64 {
        self.rewrites.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failure_count(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rendered(&self) -> u64 {
        self.rendered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_repeat(&self) -> u64 {
        self.repeats.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rewrite(&self) -> u64 {
        self.rewrites.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.rendered.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.repeats.store(0, Ordering::Relaxed);
        self.rewrites.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
    }
}
