use crate::core::data::cell::Cell;
use crate::core::data::resolution::Resolution;

/// A per-cell computation with no dependency between cells.
pub trait FieldAlgorithm {
    fn resolution(&self) -> Resolution;

    fn compute(&self, cell: Cell) -> u32;
}
