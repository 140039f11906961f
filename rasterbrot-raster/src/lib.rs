pub mod cancel;
pub mod config;
pub mod error;
pub mod grid;
pub mod partition;
pub mod rasterizer;

pub use cancel::CancelToken;
pub use config::{FractalKind, RasterConfig};
pub use error::RasterError;
pub use grid::Grid;
pub use partition::{stride_partition, WorkerAssignment, MAX_WORKERS};
pub use rasterizer::rasterize;

/// Convenience result type for the raster crate.
pub type Result<T> = std::result::Result<T, RasterError>;
