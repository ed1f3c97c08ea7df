//! Step results.

use crate::Observation;

/// Side information reported with every step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepInfo {
    /// The requested position was outside the world; the cursor did not move.
    pub out_of_bounds: bool,
    /// The digit that was under the cursor *before* the action was applied.
    pub digit: u8,
}

/// The result of one environment step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    /// Observation after the action was applied.
    pub observation: Observation,
    /// Reward contribution of this step.
    pub reward: f64,
    /// Whether the episode has reached its configured length.
    pub done: bool,
    /// Side information about the step.
    pub info: StepInfo,
}
