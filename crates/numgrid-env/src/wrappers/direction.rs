//! Direction-relative actions.

use crate::environment::{action_kind, Environment};
use crate::error::{PipelineError, StepError};
use numgrid_core::{Action, Observation, Step, Vec2};
use numgrid_space::{ActionSpace, DirectionSpace, Discrete, ObservationSpace};

/// Rewrites `(digit, direction)` actions into `(digit, position)` actions.
///
/// The target position is the inner world's live cursor position displaced
/// `distance` pixels along the direction; positions that would leave the
/// world are handled by the base world's normal out-of-bounds flagging.
///
/// Requires an inner layer exposing a digit+position action space.
#[derive(Debug)]
pub struct DirectionAdapter<E> {
    inner: E,
    distance: i64,
    digit: Discrete,
}

impl<E: Environment> DirectionAdapter<E> {
    /// Wrap `inner`, moving `distance` pixels per step.
    ///
    /// # Errors
    ///
    /// `PipelineError::UnsupportedSpace` if `inner` does not expose a
    /// digit+position action space.
    pub fn new(inner: E, distance: i64) -> Result<Self, PipelineError> {
        match inner.action_space() {
            ActionSpace::DigitPosition { digit, .. } => Ok(Self {
                inner,
                distance,
                digit,
            }),
            other => Err(PipelineError::UnsupportedSpace {
                expected: "digit+position",
                found: other.kind(),
            }),
        }
    }

    /// Pixels moved per step.
    pub fn distance(&self) -> i64 {
        self.distance
    }

    /// The wrapped inner layer.
    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: Environment> Environment for DirectionAdapter<E> {
    fn reset(&mut self) -> Result<Observation, StepError> {
        self.inner.reset()
    }

    fn step(&mut self, action: Action) -> Result<Step, StepError> {
        match action {
            Action::DigitDirection { digit, direction } => {
                let pos = self.cursor_move(direction, self.distance);
                self.inner.step(Action::DigitPosition { digit, pos })
            }
            other => Err(StepError::UnsupportedAction {
                expected: "digit+direction",
                found: action_kind(&other),
            }),
        }
    }

    fn action_space(&self) -> ActionSpace {
        ActionSpace::DigitDirection {
            digit: self.digit,
            direction: DirectionSpace,
        }
    }

    fn observation_space(&self) -> ObservationSpace {
        self.inner.observation_space()
    }

    fn cursor_pos(&self) -> Vec2 {
        self.inner.cursor_pos()
    }
}
