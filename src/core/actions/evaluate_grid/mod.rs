pub mod evaluate_grid_parallel;
pub mod evaluate_grid_serial;
pub mod ports;
