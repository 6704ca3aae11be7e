use thiserror::Error;

use crate::core::actions::cancellation::Cancelled;
use crate::core::data::iteration_budget::BudgetError;
use crate::core::data::resolution::ResolutionError;
use crate::core::data::viewport::ViewportError;

#[derive(Debug, Error)]
pub enum EvaluateError {
    #[error(transparent)]
    InvalidViewport(#[from] ViewportError),
    #[error(transparent)]
    InvalidResolution(#[from] ResolutionError),
    #[error(transparent)]
    InvalidBudget(#[from] BudgetError),
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
