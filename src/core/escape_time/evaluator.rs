use std::time::Instant;

use log::debug;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::evaluate_grid::evaluate_grid_parallel::evaluate_grid_parallel_cancelable;
use crate::core::actions::evaluate_grid::evaluate_grid_serial::evaluate_grid_serial_cancelable;
use crate::core::data::grid::Grid;
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::{Bounds, Viewport};
use crate::core::escape_time::algorithm::EscapeTimeAlgorithm;
use crate::core::escape_time::errors::EvaluateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Parallel,
    Serial,
}

/// Produces escape-time grids. Holds no state between calls beyond the
/// worker pool, so identical inputs always give identical grids.
#[derive(Debug, Default)]
pub struct Evaluator {
    strategy: Strategy,
    pool: Option<ThreadPool>,
}

impl Evaluator {
    /// Parallel evaluation on rayon's global pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn serial() -> Self {
        Self {
            strategy: Strategy::Serial,
            pool: None,
        }
    }

    /// Parallel evaluation on a dedicated pool of `threads` workers.
    pub fn with_threads(threads: usize) -> Result<Self, EvaluateError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("escape-field-{index}"))
            .build()?;

        Ok(Self {
            strategy: Strategy::Parallel,
            pool: Some(pool),
        })
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[must_use]
    pub fn threads(&self) -> usize {
        match (self.strategy, &self.pool) {
            (Strategy::Serial, _) => 1,
            (Strategy::Parallel, Some(pool)) => pool.current_num_threads(),
            (Strategy::Parallel, None) => rayon::current_num_threads(),
        }
    }

    #[must_use]
    pub fn evaluate(&self, viewport: &Viewport, resolution: Resolution, budget: IterationBudget) -> Grid {
        match self.evaluate_cancelable(viewport, resolution, budget, &NeverCancel) {
            Ok(grid) => grid,
            Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
        }
    }

    pub fn evaluate_cancelable<C: CancelToken>(
        &self,
        viewport: &Viewport,
        resolution: Resolution,
        budget: IterationBudget,
        cancel: &C,
    ) -> Result<Grid, Cancelled> {
        let algorithm = EscapeTimeAlgorithm::new(*viewport, resolution, budget);
        let start = Instant::now();

        let result = match (self.strategy, &self.pool) {
            (Strategy::Serial, _) => evaluate_grid_serial_cancelable(&algorithm, cancel),
            (Strategy::Parallel, Some(pool)) => {
                pool.install(|| evaluate_grid_parallel_cancelable(&algorithm, cancel))
            }
            (Strategy::Parallel, None) => evaluate_grid_parallel_cancelable(&algorithm, cancel),
        };

        match &result {
            Ok(_) => debug!(
                "evaluated {}x{} grid, {} max iterations, {} threads in {:?}",
                resolution.width(),
                resolution.height(),
                budget.max_iterations(),
                self.threads(),
                start.elapsed()
            ),
            Err(Cancelled) => debug!("evaluation cancelled after {:?}", start.elapsed()),
        }

        result
    }
}

/// Validates raw parameters and evaluates them on rayon's global pool.
///
/// Checks run in the order viewport, resolution, budget, and nothing is
/// computed if any of them fails.
pub fn evaluate_escape_times(
    bounds: Bounds,
    width: u32,
    height: u32,
    max_iterations: u32,
) -> Result<Grid, EvaluateError> {
    let viewport = Viewport::from_bounds(bounds)?;
    let resolution = Resolution::new(width, height)?;
    let budget = IterationBudget::new(max_iterations)?;

    Ok(Evaluator::new().evaluate(&viewport, resolution, budget))
}
