pub mod cancellation;
pub mod evaluate_grid;
pub mod render_grid;
