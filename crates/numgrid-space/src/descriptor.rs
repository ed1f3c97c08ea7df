//! Space descriptors exposed by each layer of the environment pipeline.

use crate::direction::DirectionSpace;
use crate::discrete::Discrete;
use crate::multi_discrete::MultiDiscrete;
use numgrid_core::{Action, Observation};
use rand::Rng;

/// The action space exposed by one layer of the environment pipeline.
///
/// The base world exposes [`ActionSpace::DigitPosition`]; each adapter
/// shadows its inner layer's descriptor with its own. The set is closed so
/// adapters can match exhaustively and fail fast on incompatible inners.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionSpace {
    /// A digit guess paired with an absolute cursor position.
    DigitPosition {
        /// Guess space, `[0, 10]` (10 = no guess).
        digit: Discrete,
        /// Valid cursor positions, width axis first.
        position: MultiDiscrete,
    },
    /// A digit guess paired with an orthogonal unit direction.
    DigitDirection {
        /// Guess space, `[0, 10]` (10 = no guess).
        digit: Discrete,
        /// The four orthogonal unit moves.
        direction: DirectionSpace,
    },
    /// A single linear index over a total discrete mapping.
    Index(Discrete),
}

impl ActionSpace {
    /// Draw a uniform action from this space.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Action {
        match self {
            Self::DigitPosition { digit, position } => Action::DigitPosition {
                digit: digit.sample(rng) as u8,
                // The position space is 2-axis by construction.
                pos: position
                    .sample_pos(rng)
                    .unwrap_or_default(),
            },
            Self::DigitDirection { digit, direction } => Action::DigitDirection {
                digit: digit.sample(rng) as u8,
                direction: direction.sample(rng),
            },
            Self::Index(space) => Action::Index(space.sample(rng)),
        }
    }

    /// Whether an action value belongs to this space.
    ///
    /// A value of a different variant than the space never belongs.
    pub fn contains(&self, action: &Action) -> bool {
        match (self, action) {
            (Self::DigitPosition { digit, position }, Action::DigitPosition { digit: d, pos }) => {
                digit.contains(*d as u64) && position.contains_pos(*pos)
            }
            (
                Self::DigitDirection { digit, direction },
                Action::DigitDirection {
                    digit: d,
                    direction: dir,
                },
            ) => digit.contains(*d as u64) && direction.contains(*dir),
            (Self::Index(space), Action::Index(i)) => space.contains(*i),
            _ => false,
        }
    }

    /// Short human-readable name of the space kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DigitPosition { .. } => "digit+position",
            Self::DigitDirection { .. } => "digit+direction",
            Self::Index(_) => "discrete index",
        }
    }
}

/// The observation space exposed by one layer of the environment pipeline.
#[derive(Clone, Debug, PartialEq)]
pub enum ObservationSpace {
    /// Raw cursor positions, width axis first.
    Position(MultiDiscrete),
    /// Cursor positions encoded as a linear index.
    Index(Discrete),
}

impl ObservationSpace {
    /// Draw a uniform observation from this space.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Observation {
        match self {
            Self::Position(space) => {
                Observation::Position(space.sample_pos(rng).unwrap_or_default())
            }
            Self::Index(space) => Observation::Index(space.sample(rng)),
        }
    }

    /// Whether an observation value belongs to this space.
    pub fn contains(&self, observation: &Observation) -> bool {
        match (self, observation) {
            (Self::Position(space), Observation::Position(pos)) => space.contains_pos(*pos),
            (Self::Index(space), Observation::Index(i)) => space.contains(*i),
            _ => false,
        }
    }

    /// Short human-readable name of the space kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Position(_) => "position",
            Self::Index(_) => "discrete index",
        }
    }
}
