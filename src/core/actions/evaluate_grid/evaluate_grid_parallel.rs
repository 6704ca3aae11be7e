use rayon::prelude::*;

use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_CELLS, CancelToken, Cancelled, NeverCancel};
use crate::core::actions::evaluate_grid::ports::field_algorithm::FieldAlgorithm;
use crate::core::data::cell::Cell;
use crate::core::data::grid::Grid;

/// Evaluates a grid in parallel using rayon's work-stealing scheduler.
///
/// Each row is handed to a worker as a disjoint `&mut` slice of the output,
/// so no synchronisation is needed while cells are computed. Runs on
/// whichever rayon pool is current; call inside `ThreadPool::install` to use
/// a dedicated pool.
///
/// For cancel-aware evaluation, use [`evaluate_grid_parallel_cancelable`].
pub fn evaluate_grid_parallel<Alg>(algorithm: &Alg) -> Grid
where
    Alg: FieldAlgorithm + Sync,
{
    match evaluate_grid_parallel_cancelable(algorithm, &NeverCancel) {
        Ok(grid) => grid,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Like [`evaluate_grid_parallel`], but polls `cancel` at the start of each
/// row and every [`CANCEL_CHECK_INTERVAL_CELLS`] cells within a row.
///
/// Returns [`Cancelled`] as soon as any worker observes cancellation; the
/// partially written output is dropped.
pub fn evaluate_grid_parallel_cancelable<Alg, C>(algorithm: &Alg, cancel: &C) -> Result<Grid, Cancelled>
where
    Alg: FieldAlgorithm + Sync,
    C: CancelToken,
{
    let resolution = algorithm.resolution();
    let width = resolution.width() as usize;
    let mut values = vec![0; resolution.size()];

    values
        .par_chunks_mut(width)
        .enumerate()
        .try_for_each(|(row, out)| {
            for (col, slot) in out.iter_mut().enumerate() {
                if col % CANCEL_CHECK_INTERVAL_CELLS == 0 && cancel.is_cancelled() {
                    return Err(Cancelled);
                }

                *slot = algorithm.compute(Cell::new(row as u32, col as u32));
            }

            Ok(())
        })?;

    Ok(Grid::from_evaluated(resolution, values))
}
