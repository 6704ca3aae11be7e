use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_CELLS, CancelToken, Cancelled, NeverCancel};
use crate::core::actions::evaluate_grid::ports::field_algorithm::FieldAlgorithm;
use crate::core::data::cell::Cell;
use crate::core::data::grid::Grid;

pub fn evaluate_grid_serial<Alg: FieldAlgorithm>(algorithm: &Alg) -> Grid {
    match evaluate_grid_serial_cancelable(algorithm, &NeverCancel) {
        Ok(grid) => grid,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Evaluates every cell on the calling thread, row by row.
pub fn evaluate_grid_serial_cancelable<Alg, C>(algorithm: &Alg, cancel: &C) -> Result<Grid, Cancelled>
where
    Alg: FieldAlgorithm,
    C: CancelToken,
{
    let resolution = algorithm.resolution();
    let width = resolution.width() as usize;
    let mut values = vec![0; resolution.size()];

    for (row, out) in values.chunks_mut(width).enumerate() {
        for (col, slot) in out.iter_mut().enumerate() {
            if col % CANCEL_CHECK_INTERVAL_CELLS == 0 && cancel.is_cancelled() {
                return Err(Cancelled);
            }

            *slot = algorithm.compute(Cell::new(row as u32, col as u32));
        }
    }

    Ok(Grid::from_evaluated(resolution, values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::resolution::Resolution;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubAlgorithm {
        resolution: Resolution,
    }

    impl FieldAlgorithm for StubAlgorithm {
        fn resolution(&self) -> Resolution {
            self.resolution
        }

        fn compute(&self, cell: Cell) -> u32 {
            cell.row * 100 + cell.col
        }
    }

    #[test]
    fn test_serial_fills_grid_row_major() {
        let algorithm = StubAlgorithm {
            resolution: Resolution::new(3, 2).unwrap(),
        };

        let grid = evaluate_grid_serial(&algorithm);

        assert_eq!(grid.values(), &[0, 1, 2, 100, 101, 102]);
    }

    #[test]
    fn test_serial_single_cell() {
        let algorithm = StubAlgorithm {
            resolution: Resolution::new(1, 1).unwrap(),
        };

        assert_eq!(evaluate_grid_serial(&algorithm).values(), &[0]);
    }

    #[test]
    fn test_serial_stops_when_cancelled_mid_grid() {
        let algorithm = StubAlgorithm {
            resolution: Resolution::new(4, 6).unwrap(),
        };
        let polls = AtomicUsize::new(0);
        let cancel_token = || polls.fetch_add(1, Ordering::Relaxed) >= 2;

        let result = evaluate_grid_serial_cancelable(&algorithm, &cancel_token);

        assert_eq!(result, Err(Cancelled));
        assert_eq!(polls.load(Ordering::Relaxed), 3);
    }
}
