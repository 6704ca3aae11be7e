use crate::core::actions::evaluate_grid::ports::field_algorithm::FieldAlgorithm;
use crate::core::data::cell::Cell;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;

/// `|z| > 2` compared as `|z|² > 4`.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `z ← z² + c` from `z = 0` and returns the first iteration at
/// which `|z| > 2`, or `max_iterations` if the orbit never escapes.
///
/// The magnitude test runs before each update, so iteration 0 always sees
/// `z = 0` and the smallest possible result for an escaping point is 1.
#[inline]
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        z = z * z + c;
    }

    max_iterations
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeAlgorithm {
    viewport: Viewport,
    resolution: Resolution,
    budget: IterationBudget,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, resolution: Resolution, budget: IterationBudget) -> Self {
        Self {
            viewport,
            resolution,
            budget,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn budget(&self) -> IterationBudget {
        self.budget
    }
}

impl FieldAlgorithm for EscapeTimeAlgorithm {
    fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[inline]
    fn compute(&self, cell: Cell) -> u32 {
        let c = self.viewport.point_at(cell, self.resolution);

        escape_time(c, self.budget.max_iterations())
    }
}
