use serde::{Deserialize, Serialize};

use rasterbrot_core::{Complex, FractalParams, Julia, Mandelbrot, Window};

use crate::cancel::CancelToken;
use crate::grid::Grid;
use crate::rasterizer::rasterize;

/// The fractal family to rasterize.
///
/// A closed enum rather than a by-name lookup: adding a family means
/// adding a variant, and an unknown kind is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FractalKind {
    Mandelbrot,
    Julia,
}

/// External configuration for one rasterization, typically parsed from
/// JSON. The Mandelbrot evaluator reads neither `exponent` nor
/// `julia_constant`, but the whole parameter set is validated up front
/// regardless of kind, so a zero exponent is rejected either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RasterConfig {
    /// Complex-plane region; `min` bottom-left, `max` top-right.
    pub window: Window,
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
    #[serde(default = "default_num_workers")]
    pub num_workers: usize,
    pub fractal_kind: FractalKind,
    #[serde(default = "default_exponent")]
    pub exponent: u32,
    #[serde(default = "FractalParams::default_julia_constant")]
    pub julia_constant: Complex,
}

fn default_max_iterations() -> u32 {
    FractalParams::DEFAULT_MAX_ITERATIONS
}

fn default_num_workers() -> usize {
    1
}

fn default_exponent() -> u32 {
    FractalParams::DEFAULT_EXPONENT
}

impl RasterConfig {
    /// Run the configured rasterization.
    ///
    /// The open enum from the configuration is resolved here into a
    /// statically dispatched evaluator, so the hot loop never pays for
    /// the selection.
    pub fn rasterize(&self, cancel: &CancelToken) -> crate::Result<Grid> {
        let params = FractalParams::new(self.max_iterations, self.exponent, self.julia_constant)?;
        match self.fractal_kind {
            FractalKind::Mandelbrot => {
                let fractal = Mandelbrot::from_params(&params);
                rasterize(
                    &fractal,
                    &self.window,
                    self.width,
                    self.height,
                    self.num_workers,
                    cancel,
                )
            }
            FractalKind::Julia => {
                let fractal = Julia::from_params(&params)?;
                rasterize(
                    &fractal,
                    &self.window,
                    self.width,
                    self.height,
                    self.num_workers,
                    cancel,
                )
            }
        }
    }
}
