use crate::core::actions::render_grid::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::data::colour::Colour;

// Where red saturates and green and blue start ramping.
const RED_END: f64 = 0.365079;
const GREEN_END: f64 = 0.746032;

fn ramp(t: f64, start: f64, end: f64) -> u8 {
    (((t - start) / (end - start)).clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Black through red and yellow to white. Points that never escape are
/// white.
#[derive(Debug)]
pub struct Hot {
    max_iterations: u32,
}

impl Hot {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for Hot {
    fn map(&self, value: u32) -> Result<Colour, ColourMapError> {
        if value > self.max_iterations {
            return Err(ColourMapError::ValueExceedsMax {
                value,
                max_iterations: self.max_iterations,
            });
        }

        let t = value as f64 / self.max_iterations as f64;

        Ok(Colour {
            r: ramp(t, 0.0, RED_END),
            g: ramp(t, RED_END, GREEN_END),
            b: ramp(t, GREEN_END, 1.0),
        })
    }

    fn display_name(&self) -> &str {
        ColourMapKind::Hot.display_name()
    }
}
