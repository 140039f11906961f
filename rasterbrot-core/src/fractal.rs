use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::error::CoreError;

/// Bailout radius shared by both fractal families.
///
/// Historical implementations of this engine disagreed on the escape
/// test (Mandelbrot used `|z| > 4`, Julia `|z²| > 4`). Both families
/// are normalized here to the standard convention `|z| > 2`, compared
/// in squared form as `|z|² > 4` to avoid the square root.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Squared bailout threshold used in the inner loops.
pub(crate) const ESCAPE_NORM_SQ: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

/// Parameters controlling fractal iteration, immutable once constructed.
///
/// `exponent` and `julia_constant` only matter for Julia sets; the
/// Mandelbrot evaluator reads `max_iterations` alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractalParams {
    /// Maximum number of iterations before declaring a point in-set.
    ///
    /// Zero is legal: no iterations run and every point reports an
    /// escape time of 0.
    pub max_iterations: u32,

    /// Exponent of the Julia update `z ← z^exponent + c`.
    pub exponent: u32,

    /// The fixed constant `c` defining the Julia set `J(c)`.
    pub julia_constant: Complex,
}

impl FractalParams {
    pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
    pub const DEFAULT_EXPONENT: u32 = 2;

    pub fn new(max_iterations: u32, exponent: u32, julia_constant: Complex) -> crate::Result<Self> {
        if exponent < 1 {
            return Err(CoreError::InvalidExponent(exponent));
        }
        Ok(Self {
            max_iterations,
            exponent,
            julia_constant,
        })
    }

    /// The Julia constant used when none is configured.
    pub fn default_julia_constant() -> Complex {
        Complex::new(0.742, 0.1)
    }
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            exponent: Self::DEFAULT_EXPONENT,
            julia_constant: Self::default_julia_constant(),
        }
    }
}

/// Trait implemented by the escape-time evaluators.
///
/// Designed for **static dispatch** — the rasterizer is generic over
/// `F: Fractal` rather than using `dyn Fractal`, so the compiler can
/// inline and optimize the hot iteration loop.
pub trait Fractal {
    /// Escape time of a single sample point, in `[0, max_iterations]`.
    ///
    /// For Mandelbrot, `point` is the parameter `c`; for Julia, it is
    /// the starting value `z₀`.
    fn escape_time(&self, point: Complex) -> u32;

    /// The iteration cap this evaluator was built with.
    fn max_iterations(&self) -> u32;
}
