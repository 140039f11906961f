use rasterbrot_core::CoreError;

/// Row-major store of per-pixel escape times for one rasterization.
///
/// The grid is created zero-initialized, filled in place by the
/// rasterizer's workers (each owning a disjoint set of rows), and only
/// handed to the caller once fully populated. Outside this crate it is
/// read-only. Row 0 corresponds to the bottom of the complex-plane
/// window (`window.min.im`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl Grid {
    /// Allocate a zeroed grid. Both dimensions must be positive.
    pub fn new(width: u32, height: u32) -> Result<Self, CoreError> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Escape time at `(row, col)`. Panics if out of range.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> u32 {
        assert!(row < self.height && col < self.width, "cell out of range");
        self.data[row as usize * self.width as usize + col as usize]
    }

    /// One row of escape times.
    pub fn row(&self, row: u32) -> &[u32] {
        let w = self.width as usize;
        let start = row as usize * w;
        &self.data[start..start + w]
    }

    /// The whole grid, row-major.
    pub fn values(&self) -> &[u32] {
        &self.data
    }

    /// Mutable row slices for the workers. Crate-private so a grid can
    /// never be observed mid-fill from outside.
    pub(crate) fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, u32> {
        self.data.chunks_mut(self.width as usize)
    }
}
