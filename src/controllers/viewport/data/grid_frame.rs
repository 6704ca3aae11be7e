use std::sync::Arc;
use std::time::Duration;

use crate::core::data::grid::Grid;
use crate::core::data::viewport::Viewport;

/// A finished computation, as handed to display listeners.
#[derive(Debug, Clone)]
pub struct GridFrame {
    pub generation: u64,
    pub viewport: Viewport,
    pub grid: Arc<Grid>,
    pub duration: Duration,
}
