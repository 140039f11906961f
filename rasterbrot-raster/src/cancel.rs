use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Cooperative cancellation and progress tracking for one rasterization.
///
/// Workers poll the flag once per row (not per pixel, to keep the hot
/// loop clean) and stop filling when it is set; the rasterizer then
/// reports [`RasterError::Cancelled`](crate::RasterError::Cancelled)
/// and drops the grid. The flag is sticky; use a fresh token for each
/// rasterization.
#[derive(Debug)]
pub struct CancelToken {
    cancelled: AtomicBool,
    rows_done: AtomicUsize,
    rows_total: AtomicUsize,
}

impl CancelToken {
    pub fn new() -> Self {
        Self {
            cancelled: AtomicBool::new(false),
            rows_done: AtomicUsize::new(0),
            rows_total: AtomicUsize::new(0),
        }
    }

    /// Request early abort; workers notice at their next row boundary.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Reset progress for a run over `total` rows.
    pub fn reset_progress(&self, total: usize) {
        self.rows_total.store(total, Ordering::Relaxed);
        self.rows_done.store(0, Ordering::Relaxed);
    }

    /// Mark one row completed.
    pub fn row_done(&self) {
        self.rows_done.fetch_add(1, Ordering::Relaxed);
    }

    /// Current progress as `(rows done, rows total)`.
    pub fn progress(&self) -> (usize, usize) {
        (
            self.rows_done.load(Ordering::Relaxed),
            self.rows_total.load(Ordering::Relaxed),
        )
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_clear() {
        let t = CancelToken::new();
        assert!(!t.is_cancelled());
        assert_eq!(t.progress(), (0, 0));
    }

    #[test]
    fn cancel_is_sticky() {
        let t = CancelToken::new();
        t.cancel();
        assert!(t.is_cancelled());
        t.reset_progress(10);
        assert!(t.is_cancelled(), "resetting progress must not clear the flag");
    }

    #[test]
    fn progress_counts_rows() {
        let t = CancelToken::new();
        t.reset_progress(3);
        t.row_done();
        t.row_done();
        assert_eq!(t.progress(), (2, 3));
    }
}
