pub mod cell;
pub mod colour;
pub mod complex;
pub mod grid;
pub mod iteration_budget;
pub mod pixel_buffer;
pub mod resolution;
pub mod viewport;
