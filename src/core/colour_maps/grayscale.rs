use crate::core::actions::render_grid::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::data::colour::Colour;

#[derive(Debug)]
pub struct Grayscale {
    max_iterations: u32,
}

impl Grayscale {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for Grayscale {
    fn map(&self, value: u32) -> Result<Colour, ColourMapError> {
        if value > self.max_iterations {
            return Err(ColourMapError::ValueExceedsMax {
                value,
                max_iterations: self.max_iterations,
            });
        }

        let level = (value as f64 / self.max_iterations as f64 * 255.0).round() as u8;

        Ok(Colour {
            r: level,
            g: level,
            b: level,
        })
    }

    fn display_name(&self) -> &str {
        ColourMapKind::Grayscale.display_name()
    }
}
