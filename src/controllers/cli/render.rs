use std::path::Path;
use std::time::Instant;

use log::info;
use thiserror::Error;

use crate::config::ExplorerConfig;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_grid::render_grid::{RenderGridError, render_grid};
use crate::core::colour_maps::factory::colour_map_factory;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::escape_time::errors::EvaluateError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Evaluate(#[from] EvaluateError),
    #[error(transparent)]
    Render(#[from] RenderGridError),
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
    #[error("nothing rendered yet, call generate first")]
    NothingRendered,
}

/// One-shot render of a configured view to an image file.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    config: ExplorerConfig,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P, config: ExplorerConfig) -> Self {
        Self {
            presenter,
            config,
            buffer: None,
        }
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn generate(&mut self) -> Result<(), CliError> {
        let viewport = self.config.viewport().map_err(EvaluateError::from)?;
        let resolution = self.config.resolution().map_err(EvaluateError::from)?;
        let budget = self.config.budget().map_err(EvaluateError::from)?;
        let evaluator = self.config.evaluator()?;

        info!(
            "rendering {}x{} grid, {} max iterations, {} threads",
            resolution.width(),
            resolution.height(),
            budget.max_iterations(),
            evaluator.threads()
        );

        let start = Instant::now();
        let grid = evaluator.evaluate(&viewport, resolution, budget);
        info!("elapsed: {:?}", start.elapsed());

        let colour_map = colour_map_factory(self.config.colour_map, budget.max_iterations());
        self.buffer = Some(render_grid(&grid, &colour_map)?);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), CliError> {
        let buffer = self.buffer.as_ref().ok_or(CliError::NothingRendered)?;

        self.presenter.present(buffer, filepath.as_ref())?;
        info!("saved to {}", filepath.as_ref().display());

        Ok(())
    }
}
