//! Linear-index observations over the position space.

use crate::environment::Environment;
use crate::error::{PipelineError, StepError};
use numgrid_core::{Action, Observation, Step, Vec2};
use numgrid_space::{ActionSpace, Discrete, DiscreteMapping, ObservationSpace, SpaceError};

/// Encodes raw cursor-position observations as a single linear index.
///
/// The counterpart of
/// [`DiscreteActionAdapter`](crate::wrappers::DiscreteActionAdapter) on the
/// observation side, for tabular agents that index a table by state
/// number. Requires an inner layer emitting position observations.
#[derive(Debug)]
pub struct DiscreteObservationAdapter<E> {
    inner: E,
    mapping: DiscreteMapping,
    space: Discrete,
}

impl<E: Environment> DiscreteObservationAdapter<E> {
    /// Wrap `inner`, building the total mapping over its position space.
    ///
    /// # Errors
    ///
    /// `PipelineError::UnsupportedSpace` if the inner observation space is
    /// already a discrete index; `PipelineError::Space` if the mapping
    /// would exceed its size ceiling.
    pub fn new(inner: E) -> Result<Self, PipelineError> {
        let mapping = match inner.observation_space() {
            ObservationSpace::Position(position) => DiscreteMapping::new(&position)?,
            other => {
                return Err(PipelineError::UnsupportedSpace {
                    expected: "position",
                    found: other.kind(),
                })
            }
        };
        let space = Discrete::new(mapping.len())?;
        Ok(Self {
            inner,
            mapping,
            space,
        })
    }

    /// The cursor position a linear observation index stands for.
    ///
    /// # Errors
    ///
    /// `StepError::Space` if the index is outside the mapping.
    pub fn decode_observation(&self, index: u64) -> Result<Vec2, StepError> {
        let coord = self.mapping.decode(index)?;
        Vec2::from_coord(coord).ok_or_else(|| {
            SpaceError::UnmappedIndex {
                index,
                size: self.mapping.len(),
            }
            .into()
        })
    }

    fn encode(&self, observation: Observation) -> Result<Observation, StepError> {
        match observation {
            Observation::Position(pos) => {
                Ok(Observation::Index(self.mapping.encode(&pos.to_coord())?))
            }
            already @ Observation::Index(_) => Ok(already),
        }
    }

    /// The wrapped inner layer.
    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: Environment> Environment for DiscreteObservationAdapter<E> {
    fn reset(&mut self) -> Result<Observation, StepError> {
        let observation = self.inner.reset()?;
        self.encode(observation)
    }

    fn step(&mut self, action: Action) -> Result<Step, StepError> {
        let mut step = self.inner.step(action)?;
        step.observation = self.encode(step.observation)?;
        Ok(step)
    }

    fn action_space(&self) -> ActionSpace {
        self.inner.action_space()
    }

    fn observation_space(&self) -> ObservationSpace {
        ObservationSpace::Index(self.space)
    }

    fn cursor_pos(&self) -> Vec2 {
        self.inner.cursor_pos()
    }
}
