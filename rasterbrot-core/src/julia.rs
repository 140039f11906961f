use crate::complex::Complex;
use crate::error::CoreError;
use crate::fractal::{Fractal, FractalParams, ESCAPE_NORM_SQ};

/// A generalized Julia set `J(c)`: `z_{n+1} = z_n^exponent + c`, where
/// `c` and `exponent` are fixed and the sample point is `z₀`.
#[derive(Debug, Clone, Copy)]
pub struct Julia {
    c: Complex,
    exponent: u32,
    max_iterations: u32,
}

impl Julia {
    /// Create the evaluator; the exponent must be at least 1.
    pub fn new(c: Complex, exponent: u32, max_iterations: u32) -> crate::Result<Self> {
        if exponent < 1 {
            return Err(CoreError::InvalidExponent(exponent));
        }
        Ok(Self {
            c,
            exponent,
            max_iterations,
        })
    }

    pub fn from_params(params: &FractalParams) -> crate::Result<Self> {
        Self::new(params.julia_constant, params.exponent, params.max_iterations)
    }

    /// The constant `c` defining this Julia set.
    pub fn c(&self) -> Complex {
        self.c
    }

    pub fn exponent(&self) -> u32 {
        self.exponent
    }
}

impl Fractal for Julia {
    /// Same check-then-update loop as the Mandelbrot evaluator, with
    /// the orbit seeded at the sample point instead of zero. With
    /// `exponent = 2` and `z₀ = 0` the orbit is identical to the
    /// Mandelbrot orbit of `c`, update for update.
    fn escape_time(&self, z0: Complex) -> u32 {
        let mut z = z0;
        for n in 0..self.max_iterations {
            if z.norm_sq() > ESCAPE_NORM_SQ {
                return n;
            }
            z = if self.exponent == 2 {
                // Expanded square, the common case.
                Complex::new(
                    z.re * z.re - z.im * z.im + self.c.re,
                    2.0 * z.re * z.im + self.c.im,
                )
            } else {
                z.powu(self.exponent) + self.c
            };
        }
        self.max_iterations
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl Default for Julia {
    fn default() -> Self {
        Self {
            c: FractalParams::default_julia_constant(),
            exponent: FractalParams::DEFAULT_EXPONENT,
            max_iterations: FractalParams::DEFAULT_MAX_ITERATIONS,
        }
    }
}
