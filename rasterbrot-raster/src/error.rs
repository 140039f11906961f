use thiserror::Error;

use rasterbrot_core::CoreError;

/// Errors originating from the rasterization pipeline.
#[derive(Debug, Error)]
pub enum RasterError {
    /// Worker count outside the supported range (configuration error).
    #[error("invalid worker count: {0} (must be in 1..=20)")]
    InvalidWorkerCount(usize),

    /// A dispatched worker terminated abnormally. Fatal to the whole
    /// call; the caller may re-invoke the rasterization, which is
    /// stateless and deterministic.
    #[error("worker {worker} failed: {reason}")]
    WorkerFailure { worker: usize, reason: String },

    /// Rasterization aborted via the cancel token.
    #[error("rasterization cancelled")]
    Cancelled,

    /// Domain error surfaced from the core engine (invalid window,
    /// dimensions, or exponent).
    #[error(transparent)]
    Core(#[from] CoreError),
}
