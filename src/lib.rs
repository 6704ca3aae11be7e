mod config;
mod controllers;
mod core;
mod presenters;

pub use crate::config::ExplorerConfig;
pub use crate::controllers::cli::render::{CliError, CliRenderController};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::controllers::viewport::controller::ViewportController;
pub use crate::controllers::viewport::data::grid_frame::GridFrame;
pub use crate::controllers::viewport::errors::ControllerError;
pub use crate::controllers::viewport::ports::grid_listener::GridListener;
pub use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_CELLS, CancelToken, CancellationFlag, Cancelled, NeverCancel};
pub use crate::core::actions::evaluate_grid::evaluate_grid_parallel::{evaluate_grid_parallel, evaluate_grid_parallel_cancelable};
pub use crate::core::actions::evaluate_grid::evaluate_grid_serial::{evaluate_grid_serial, evaluate_grid_serial_cancelable};
pub use crate::core::actions::evaluate_grid::ports::field_algorithm::FieldAlgorithm;
pub use crate::core::actions::render_grid::ports::colour_map::{ColourMap, ColourMapError};
pub use crate::core::actions::render_grid::render_grid::{RenderGridError, render_grid};
pub use crate::core::colour_maps::factory::colour_map_factory;
pub use crate::core::colour_maps::grayscale::Grayscale;
pub use crate::core::colour_maps::hot::Hot;
pub use crate::core::colour_maps::kinds::ColourMapKind;
pub use crate::core::data::cell::Cell;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::grid::{Grid, GridError};
pub use crate::core::data::iteration_budget::{BudgetError, IterationBudget};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::resolution::{Resolution, ResolutionError};
pub use crate::core::data::viewport::{Axis, Bounds, Viewport, ViewportError};
pub use crate::core::escape_time::algorithm::{EscapeTimeAlgorithm, escape_time};
pub use crate::core::escape_time::errors::EvaluateError;
pub use crate::core::escape_time::evaluator::{Evaluator, Strategy, evaluate_escape_times};
pub use crate::presenters::file::ppm::{PpmFilePresenter, encode_ppm};
