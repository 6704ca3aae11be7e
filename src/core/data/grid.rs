use thiserror::Error;

use crate::core::data::cell::Cell;
use crate::core::data::resolution::Resolution;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("resolution {width}x{height} needs {expected} values, got {actual}")]
    ShapeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Row-major escape-time values for one viewport at one resolution.
///
/// Row 0 corresponds to `imag_min`, column 0 to `real_min`. A grid is never
/// mutated after construction; a new computation produces a new grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    resolution: Resolution,
    values: Vec<u32>,
}

impl Grid {
    pub fn from_data(resolution: Resolution, values: Vec<u32>) -> Result<Self, GridError> {
        if values.len() != resolution.size() {
            return Err(GridError::ShapeMismatch {
                width: resolution.width(),
                height: resolution.height(),
                expected: resolution.size(),
                actual: values.len(),
            });
        }

        Ok(Self { resolution, values })
    }

    /// For drivers that allocate exactly `resolution.size()` values.
    pub(crate) fn from_evaluated(resolution: Resolution, values: Vec<u32>) -> Self {
        debug_assert_eq!(values.len(), resolution.size());

        Self { resolution, values }
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.resolution.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.resolution.height()
    }

    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<u32> {
        if cell.row >= self.height() || cell.col >= self.width() {
            return None;
        }

        let index = cell.row as usize * self.width() as usize + cell.col as usize;
        self.values.get(index).copied()
    }

    #[must_use]
    pub fn row(&self, row: u32) -> Option<&[u32]> {
        self.rows().nth(row as usize)
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u32]> + '_ {
        self.values.chunks_exact(self.width() as usize)
    }

    #[must_use]
    pub fn max_value(&self) -> Option<u32> {
        self.values.iter().copied().max()
    }

    #[must_use]
    pub fn into_values(self) -> Vec<u32> {
        self.values
    }
}
