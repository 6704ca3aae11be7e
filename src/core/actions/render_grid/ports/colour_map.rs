use thiserror::Error;

use crate::core::data::colour::Colour;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColourMapError {
    #[error("escape time {value} exceeds maximum {max_iterations}")]
    ValueExceedsMax { value: u32, max_iterations: u32 },
}

pub trait ColourMap: Send + Sync {
    fn map(&self, value: u32) -> Result<Colour, ColourMapError>;

    fn display_name(&self) -> &str;
}

impl ColourMap for Box<dyn ColourMap> {
    fn map(&self, value: u32) -> Result<Colour, ColourMapError> {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
