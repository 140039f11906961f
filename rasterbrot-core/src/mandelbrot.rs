use crate::complex::Complex;
use crate::fractal::{Fractal, FractalParams, ESCAPE_NORM_SQ};

/// The Mandelbrot set: `z_{n+1} = z_n² + c`, starting from `z₀ = 0`.
///
/// The sample point is the parameter `c`.
#[derive(Debug, Clone, Copy)]
pub struct Mandelbrot {
    max_iterations: u32,
}

impl Mandelbrot {
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    pub fn from_params(params: &FractalParams) -> Self {
        Self::new(params.max_iterations)
    }
}

impl Default for Mandelbrot {
    fn default() -> Self {
        Self::new(FractalParams::DEFAULT_MAX_ITERATIONS)
    }
}

impl Fractal for Mandelbrot {
    /// The escape check runs **before** each update, so iteration `n`
    /// reports on the orbit after `n` updates: `c = 10` escapes at 1
    /// (first check after one update), and an orbit that never trips
    /// the check reports `max_iterations`.
    fn escape_time(&self, c: Complex) -> u32 {
        let mut z = Complex::ZERO;
        for n in 0..self.max_iterations {
            if z.norm_sq() > ESCAPE_NORM_SQ {
                return n;
            }
            // z = z² + c
            z = Complex::new(z.re * z.re - z.im * z.im + c.re, 2.0 * z.re * z.im + c.im);
        }
        self.max_iterations
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
