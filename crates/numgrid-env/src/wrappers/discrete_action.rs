//! Linear-index actions over a flattened tuple space.

use crate::environment::{action_kind, Environment};
use crate::error::{PipelineError, StepError};
use numgrid_core::{Action, Coord, Observation, Step, Vec2};
use numgrid_space::{
    ActionSpace, DirectionSpace, Discrete, DiscreteMapping, MultiDiscrete, ObservationSpace,
    SpaceError,
};
use smallvec::smallvec;

/// Which tuple shape the inner layer accepts.
#[derive(Clone, Copy, Debug)]
enum InnerKind {
    /// `(digit, x, y)` — three mapped axes.
    Position,
    /// `(digit, direction index)` — two mapped axes.
    Direction,
}

/// Exposes a single linear discrete action space over the inner layer's
/// tuple space.
///
/// Built for tabular agents that index a table by action number. The total
/// mapping covers the full cartesian product of the inner space's axes, so
/// every index decodes to exactly one inner action and back.
///
/// Works over either digit+position or digit+direction inner spaces;
/// wrapping an already-discrete layer fails at construction.
#[derive(Debug)]
pub struct DiscreteActionAdapter<E> {
    inner: E,
    mapping: DiscreteMapping,
    space: Discrete,
    kind: InnerKind,
}

impl<E: Environment> DiscreteActionAdapter<E> {
    /// Wrap `inner`, building the total mapping over its action space.
    ///
    /// # Errors
    ///
    /// `PipelineError::UnsupportedSpace` if the inner action space is
    /// already a discrete index; `PipelineError::Space` if the mapping
    /// would exceed its size ceiling.
    pub fn new(inner: E) -> Result<Self, PipelineError> {
        let (flat, kind) = match inner.action_space() {
            ActionSpace::DigitPosition { digit, position } => {
                let mut high: Vec<i64> = vec![digit.len() as i64 - 1];
                high.extend_from_slice(position.high());
                (MultiDiscrete::new(&high)?, InnerKind::Position)
            }
            ActionSpace::DigitDirection { digit, direction } => (
                MultiDiscrete::new(&[digit.len() as i64 - 1, direction.len() as i64 - 1])?,
                InnerKind::Direction,
            ),
            other => {
                return Err(PipelineError::UnsupportedSpace {
                    expected: "digit+position or digit+direction",
                    found: other.kind(),
                })
            }
        };
        let mapping = DiscreteMapping::new(&flat)?;
        let space = Discrete::new(mapping.len())?;
        Ok(Self {
            inner,
            mapping,
            space,
            kind,
        })
    }

    /// The inner-layer action a linear index stands for.
    ///
    /// # Errors
    ///
    /// `StepError::Space` if the index is outside the mapping.
    pub fn decode_action(&self, index: u64) -> Result<Action, StepError> {
        let coord = self.mapping.decode(index)?;
        let digit = coord[0] as u8;
        match self.kind {
            InnerKind::Position => Ok(Action::DigitPosition {
                digit,
                pos: Vec2::new(coord[1], coord[2]),
            }),
            InnerKind::Direction => {
                let direction = DirectionSpace.get(coord[1] as usize).ok_or(
                    SpaceError::UnmappedIndex {
                        index: coord[1] as u64,
                        size: DirectionSpace.len(),
                    },
                )?;
                Ok(Action::DigitDirection { digit, direction })
            }
        }
    }

    /// The linear index standing for an inner-layer action.
    ///
    /// Reverse lookup through the mapping's index; checked even though the
    /// mapping is total.
    ///
    /// # Errors
    ///
    /// `StepError::UnsupportedAction` if the action's variant does not
    /// match the inner layer; `StepError::Space` if a component falls
    /// outside the mapped space.
    pub fn encode_action(&self, action: &Action) -> Result<u64, StepError> {
        let coord: Coord = match (self.kind, action) {
            (InnerKind::Position, Action::DigitPosition { digit, pos }) => {
                smallvec![*digit as i64, pos.x, pos.y]
            }
            (InnerKind::Direction, Action::DigitDirection { digit, direction }) => {
                let index = DirectionSpace.index_of(*direction).ok_or_else(|| {
                    SpaceError::UnmappedCoord {
                        coord: direction.to_coord(),
                    }
                })?;
                smallvec![*digit as i64, index as i64]
            }
            (InnerKind::Position, other) => {
                return Err(StepError::UnsupportedAction {
                    expected: "digit+position",
                    found: action_kind(other),
                })
            }
            (InnerKind::Direction, other) => {
                return Err(StepError::UnsupportedAction {
                    expected: "digit+direction",
                    found: action_kind(other),
                })
            }
        };
        Ok(self.mapping.encode(&coord)?)
    }

    /// The wrapped inner layer.
    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: Environment> Environment for DiscreteActionAdapter<E> {
    fn reset(&mut self) -> Result<Observation, StepError> {
        self.inner.reset()
    }

    fn step(&mut self, action: Action) -> Result<Step, StepError> {
        let index = match action {
            Action::Index(index) => index,
            other => {
                return Err(StepError::UnsupportedAction {
                    expected: "discrete index",
                    found: action_kind(&other),
                })
            }
        };
        let decoded = self.decode_action(index)?;
        self.inner.step(decoded)
    }

    fn action_space(&self) -> ActionSpace {
        ActionSpace::Index(self.space)
    }

    fn observation_space(&self) -> ObservationSpace {
        self.inner.observation_space()
    }

    fn cursor_pos(&self) -> Vec2 {
        self.inner.cursor_pos()
    }
}
