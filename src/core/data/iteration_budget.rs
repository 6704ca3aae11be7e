use std::num::NonZeroU32;

use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    #[error("maximum iterations must be greater than zero")]
    Zero,
}

/// The per-point iteration cap. Also the value recorded for points that
/// never escape.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct IterationBudget(NonZeroU32);

impl IterationBudget {
    pub fn new(max_iterations: u32) -> Result<Self, BudgetError> {
        NonZeroU32::new(max_iterations)
            .map(Self)
            .ok_or(BudgetError::Zero)
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.0.get()
    }
}
