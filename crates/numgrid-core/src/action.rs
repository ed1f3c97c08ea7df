//! Action and observation values exchanged with an environment.

use crate::Vec2;

/// The digit-guess value meaning "no guess this step".
///
/// A raw action carries a guess in `[0, 10]`: `[0, 9]` claims a digit,
/// [`NO_GUESS`] skips the guess and contributes no reward.
pub const NO_GUESS: u8 = 10;

/// An action submitted to some layer of the environment pipeline.
///
/// Which variant a layer accepts is described by its
/// `ActionSpace`; submitting a mismatched variant is a malformed action
/// and fails the step. The base world accepts [`Action::DigitPosition`];
/// adapters rewrite the other variants down to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// A digit guess plus an absolute target cursor position.
    DigitPosition {
        /// Digit claim in `[0, 9]`, or [`NO_GUESS`].
        digit: u8,
        /// Requested cursor position in mosaic pixels.
        pos: Vec2,
    },
    /// A digit guess plus an orthogonal unit movement direction.
    DigitDirection {
        /// Digit claim in `[0, 9]`, or [`NO_GUESS`].
        digit: u8,
        /// One of the four orthogonal unit vectors.
        direction: Vec2,
    },
    /// A single linear index into a total discrete mapping.
    Index(u64),
}

/// An observation emitted by some layer of the environment pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation {
    /// The cursor position in mosaic pixels (base-world form).
    Position(Vec2),
    /// The cursor position encoded as a linear discrete index.
    Index(u64),
}
