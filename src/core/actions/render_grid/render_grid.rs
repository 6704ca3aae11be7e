use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::render_grid::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::grid::Grid;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};

#[derive(Debug, Error)]
pub enum RenderGridError {
    #[error("colour map error: {0}")]
    ColourMap(#[from] ColourMapError),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Colour-maps a grid into an RGB image.
///
/// Grid row 0 holds `imag_min`, so it becomes the bottom image row and the
/// imaginary axis points up in the output.
pub fn render_grid<CMap>(grid: &Grid, colour_map: &CMap) -> Result<PixelBuffer, RenderGridError>
where
    CMap: ColourMap + ?Sized,
{
    let width = grid.width() as usize;
    let height = grid.height() as usize;
    let mut bytes = vec![0; grid.resolution().size() * 3];

    bytes
        .par_chunks_mut(width * 3)
        .enumerate()
        .try_for_each(|(y, out)| -> Result<(), ColourMapError> {
            let row = &grid.values()[(height - 1 - y) * width..(height - y) * width];

            for (pixel, &value) in out.chunks_exact_mut(3).zip(row) {
                let colour = colour_map.map(value)?;
                pixel.copy_from_slice(&[colour.r, colour.g, colour.b]);
            }

            Ok(())
        })?;

    Ok(PixelBuffer::from_data(grid.resolution(), bytes)?)
}
