use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::error::CoreError;

/// A rectangular region of the complex plane mapped onto the pixel grid.
///
/// `min` is the bottom-left corner and `max` the top-right, so a valid
/// window has `max.re > min.re` and `max.im > min.im`.
///
/// The type is serde-derived for the configuration surface, which means
/// a deserialized window may violate the corner ordering; everything that
/// accepts a window re-checks it via [`Window::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// Bottom-left corner.
    pub min: Complex,
    /// Top-right corner.
    pub max: Complex,
}

impl Window {
    /// Create a window, rejecting degenerate or misordered corners.
    pub fn new(min: Complex, max: Complex) -> crate::Result<Self> {
        let window = Self { min, max };
        window.validate()?;
        Ok(window)
    }

    /// Check the corner-ordering invariant.
    pub fn validate(&self) -> crate::Result<()> {
        let finite = self.min.re.is_finite()
            && self.min.im.is_finite()
            && self.max.re.is_finite()
            && self.max.im.is_finite();
        if !finite {
            return Err(CoreError::InvalidWindow {
                reason: format!("corners must be finite, got {} .. {}", self.min, self.max),
            });
        }
        if self.max.re <= self.min.re || self.max.im <= self.min.im {
            return Err(CoreError::InvalidWindow {
                reason: format!(
                    "max must lie strictly above and right of min, got {} .. {}",
                    self.min, self.max
                ),
            });
        }
        Ok(())
    }

    /// Extent along the real axis.
    pub fn re_span(&self) -> f64 {
        self.max.re - self.min.re
    }

    /// Extent along the imaginary axis.
    pub fn im_span(&self) -> f64 {
        self.max.im - self.min.im
    }
}

impl Default for Window {
    /// The classic full view: `[-2, 2] × [-2, 2]` covers the whole
    /// Mandelbrot set and the typical Julia sets.
    fn default() -> Self {
        Self {
            min: Complex::new(-2.0, -2.0),
            max: Complex::new(2.0, 2.0),
        }
    }
}

/// Maps pixel coordinates to sample points on the complex plane.
///
/// The mapper precomputes the per-pixel increments
/// `inc_re = re_span / width` and `inc_im = im_span / height`; pixel
/// `(row, col)` samples `min + col·inc_re + i·row·inc_im`. Row 0 is the
/// **bottom** of the window (`min.im`), matching the row order of the
/// output grid.
#[derive(Debug, Clone, Copy)]
pub struct SampleGrid {
    origin: Complex,
    inc_re: f64,
    inc_im: f64,
    width: u32,
    height: u32,
}

impl SampleGrid {
    /// Build the mapper for `window` over a `width × height` pixel grid.
    ///
    /// Fails if either dimension is zero or the window is invalid; both
    /// checks run here so the rasterizer can validate everything before
    /// dispatching any work.
    pub fn new(window: &Window, width: u32, height: u32) -> crate::Result<Self> {
        window.validate()?;
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        Ok(Self {
            origin: window.min,
            inc_re: window.re_span() / width as f64,
            inc_im: window.im_span() / height as f64,
            width,
            height,
        })
    }

    /// The complex-plane sample for pixel `(row, col)`.
    #[inline]
    pub fn sample(&self, row: u32, col: u32) -> Complex {
        Complex::new(
            self.origin.re + col as f64 * self.inc_re,
            self.origin.im + row as f64 * self.inc_im,
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Real-axis distance between horizontally adjacent samples.
    pub fn inc_re(&self) -> f64 {
        self.inc_re
    }

    /// Imaginary-axis distance between vertically adjacent samples.
    pub fn inc_im(&self) -> f64 {
        self.inc_im
    }
}
