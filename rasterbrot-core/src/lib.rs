pub mod complex;
pub mod error;
pub mod fractal;
pub mod julia;
pub mod mandelbrot;
pub mod window;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use error::CoreError;
pub use fractal::{Fractal, FractalParams, ESCAPE_RADIUS};
pub use julia::Julia;
pub use mandelbrot::Mandelbrot;
pub use window::{SampleGrid, Window};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
