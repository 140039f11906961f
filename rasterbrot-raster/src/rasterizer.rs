use std::thread;
use std::time::Instant;

use tracing::{debug, info};

use rasterbrot_core::{Fractal, SampleGrid, Window};

use crate::cancel::CancelToken;
use crate::error::RasterError;
use crate::grid::Grid;
use crate::partition::{stride_partition, WorkerAssignment};

/// Rasterize the window into a `width × height` grid of escape times.
///
/// All validation happens up front, before any thread is spawned:
/// [`SampleGrid::new`] rejects bad windows and dimensions,
/// [`stride_partition`] rejects worker counts outside `1..=20`. With a
/// single worker every row is filled synchronously in the calling
/// thread; otherwise each strided row set is handed to its own scoped
/// thread as a bundle of mutable row slices. Disjoint row ownership is
/// the entire synchronization mechanism: no locks, and the join at the
/// end of the scope is the only ordering guarantee.
///
/// Cell values depend only on `(window, width, height, fractal)`, so
/// the grid is bit-identical for every legal `num_workers`.
///
/// A worker that fails to spawn or panics aborts the whole call with
/// [`RasterError::WorkerFailure`]; cancellation via `cancel` yields
/// [`RasterError::Cancelled`]. In both cases the partially filled grid
/// is dropped; the caller only ever sees a complete grid.
pub fn rasterize<F: Fractal + Sync>(
    fractal: &F,
    window: &Window,
    width: u32,
    height: u32,
    num_workers: usize,
    cancel: &CancelToken,
) -> crate::Result<Grid> {
    let start = Instant::now();

    let samples = SampleGrid::new(window, width, height)?;
    let assignments = stride_partition(height as usize, num_workers)?;
    let mut grid = Grid::new(width, height)?;
    cancel.reset_progress(height as usize);

    debug!(
        width,
        height,
        num_workers,
        max_iterations = fractal.max_iterations(),
        "dispatching rasterization"
    );

    let completed = if num_workers == 1 {
        let rows: Vec<(usize, &mut [u32])> = grid.rows_mut().enumerate().collect();
        fill_rows(fractal, &samples, rows, cancel)
    } else {
        run_workers(fractal, &samples, &mut grid, &assignments, cancel)?
    };

    if !completed {
        return Err(RasterError::Cancelled);
    }

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        rows = height,
        num_workers,
        "rasterization complete"
    );
    Ok(grid)
}

/// Worker body: fill the owned rows in order, polling the cancel token
/// once per row. Returns `false` when stopped early.
fn fill_rows<F: Fractal>(
    fractal: &F,
    samples: &SampleGrid,
    rows: Vec<(usize, &mut [u32])>,
    cancel: &CancelToken,
) -> bool {
    for (row, out) in rows {
        if cancel.is_cancelled() {
            return false;
        }
        for (col, cell) in out.iter_mut().enumerate() {
            let point = samples.sample(row as u32, col as u32);
            *cell = fractal.escape_time(point);
        }
        cancel.row_done();
    }
    true
}

/// Dispatch one scoped thread per non-empty assignment and join them all.
fn run_workers<F: Fractal + Sync>(
    fractal: &F,
    samples: &SampleGrid,
    grid: &mut Grid,
    assignments: &[WorkerAssignment],
    cancel: &CancelToken,
) -> crate::Result<bool> {
    let num_workers = assignments.len();

    // Split the grid into per-worker bundles of (row index, row slice).
    // Distributing row r to bundle r % N reproduces the strided
    // assignments exactly, and the borrow checker sees each slice is
    // owned by one bundle only.
    let mut bundles: Vec<Vec<(usize, &mut [u32])>> = assignments
        .iter()
        .map(|a| Vec::with_capacity(a.rows.len()))
        .collect();
    for (row, slice) in grid.rows_mut().enumerate() {
        bundles[row % num_workers].push((row, slice));
    }

    let mut failure: Option<RasterError> = None;
    let mut completed = true;

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(num_workers);
        for (assignment, rows) in assignments.iter().zip(bundles) {
            debug_assert_eq!(rows.len(), assignment.rows.len());
            if rows.is_empty() {
                continue;
            }
            let builder = thread::Builder::new().name(format!("raster-{}", assignment.worker));
            match builder.spawn_scoped(scope, move || fill_rows(fractal, samples, rows, cancel)) {
                Ok(handle) => handles.push((assignment.worker, handle)),
                Err(err) => {
                    // Stop the workers already running; the call fails as a whole.
                    cancel.cancel();
                    failure = Some(RasterError::WorkerFailure {
                        worker: assignment.worker,
                        reason: err.to_string(),
                    });
                    break;
                }
            }
        }

        // Join barrier: the grid is not observable until every worker
        // has finished or the call has failed.
        for (worker, handle) in handles {
            match handle.join() {
                Ok(done) => completed &= done,
                Err(_) => {
                    cancel.cancel();
                    if failure.is_none() {
                        failure = Some(RasterError::WorkerFailure {
                            worker,
                            reason: "worker panicked".into(),
                        });
                    }
                }
            }
        }
    });

    if let Some(err) = failure {
        return Err(err);
    }
    Ok(completed)
}
