use thiserror::Error;

use crate::core::data::viewport::ViewportError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControllerError {
    #[error(transparent)]
    InvalidViewport(#[from] ViewportError),
    #[error("computation for generation {generation} superseded by generation {current}")]
    Superseded { generation: u64, current: u64 },
    #[error("computation for generation {generation} cancelled")]
    Cancelled { generation: u64 },
}
