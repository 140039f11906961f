use crate::error::RasterError;

/// Upper bound on the worker pool size.
pub const MAX_WORKERS: usize = 20;

/// The set of grid rows owned by one worker.
///
/// Worker `w` out of `N` owns rows `w, w+N, w+2N, …` (modulo striding).
/// Per-pixel cost is bounded by `max_iterations` and roughly uniform
/// across the grid, so this static assignment balances well without
/// work-stealing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerAssignment {
    /// Worker id in `[0, N)`.
    pub worker: usize,
    /// Owned row indices, ascending. Empty when the stride starts
    /// past the grid height.
    pub rows: Vec<usize>,
}

/// Partition `[0, height)` across `num_workers` by modulo striding.
///
/// The assignments are exact: every row appears in exactly one of
/// them, for any legal worker count. Fails when `num_workers` is
/// outside `1..=MAX_WORKERS`.
pub fn stride_partition(
    height: usize,
    num_workers: usize,
) -> crate::Result<Vec<WorkerAssignment>> {
    if num_workers < 1 || num_workers > MAX_WORKERS {
        return Err(RasterError::InvalidWorkerCount(num_workers));
    }
    Ok((0..num_workers)
        .map(|worker| WorkerAssignment {
            worker,
            rows: (worker..height).step_by(num_workers).collect(),
        })
        .collect())
}
