use std::path::PathBuf;

use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::data::iteration_budget::{BudgetError, IterationBudget};
use crate::core::data::resolution::{Resolution, ResolutionError};
use crate::core::data::viewport::{Bounds, Viewport, ViewportError};
use crate::core::escape_time::errors::EvaluateError;
use crate::core::escape_time::evaluator::Evaluator;

pub const DEFAULT_BOUNDS: Bounds = Bounds::new(-2.0, 1.0, -1.0, 1.0);
pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 1000;
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;
pub const DEFAULT_OUTPUT_PATH: &str = "output/mandelbrot.ppm";

/// Raw explorer settings. Nothing here is validated until one of the typed
/// accessors is called.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub bounds: Bounds,
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    /// `None` runs on rayon's global pool.
    pub threads: Option<usize>,
    pub colour_map: ColourMapKind,
    pub output_path: PathBuf,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            bounds: DEFAULT_BOUNDS,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            threads: None,
            colour_map: ColourMapKind::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl ExplorerConfig {
    pub fn viewport(&self) -> Result<Viewport, ViewportError> {
        Viewport::from_bounds(self.bounds)
    }

    pub fn resolution(&self) -> Result<Resolution, ResolutionError> {
        Resolution::new(self.width, self.height)
    }

    pub fn budget(&self) -> Result<IterationBudget, BudgetError> {
        IterationBudget::new(self.max_iterations)
    }

    pub fn evaluator(&self) -> Result<Evaluator, EvaluateError> {
        match self.threads {
            Some(threads) => Evaluator::with_threads(threads),
            None => Ok(Evaluator::new()),
        }
    }

    pub fn reset_view(&mut self) {
        self.bounds = DEFAULT_BOUNDS;
    }
}
