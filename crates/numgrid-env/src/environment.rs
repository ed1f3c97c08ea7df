//! The environment contract shared by the base world and every adapter.

use crate::error::StepError;
use numgrid_core::{Action, Observation, Step, Vec2};
use numgrid_space::{ActionSpace, DirectionSpace, ObservationSpace};
use tracing::warn;

/// One layer of the environment pipeline.
///
/// Implemented by the base [`NumGrid`](crate::NumGrid) world and by every
/// adapter in [`wrappers`](crate::wrappers). An adapter wraps exactly one
/// inner layer, shadows its action/observation space descriptors, and
/// delegates everything it does not rewrite — in particular the live
/// cursor position, which is forwarded through the whole chain so
/// direction-relative adapters work at any depth.
pub trait Environment {
    /// Start a fresh episode and return its first observation.
    ///
    /// Callable repeatedly; each call re-randomizes the cursor and resets
    /// the step counter regardless of prior state.
    fn reset(&mut self) -> Result<Observation, StepError>;

    /// Apply one action.
    ///
    /// # Errors
    ///
    /// Fails only on a malformed action (wrong variant for this layer's
    /// space, or an out-of-range guess). An out-of-bounds cursor target is
    /// a normal outcome flagged in the step's `info`.
    fn step(&mut self, action: Action) -> Result<Step, StepError>;

    /// The action space this layer exposes to its caller.
    fn action_space(&self) -> ActionSpace;

    /// The observation space this layer exposes to its caller.
    fn observation_space(&self) -> ObservationSpace;

    /// The live cursor position of the underlying world.
    fn cursor_pos(&self) -> Vec2;

    /// Where the cursor would land if moved `distance` pixels in
    /// `direction`, without mutating any state.
    ///
    /// An invalid direction (anything but the four orthogonal unit
    /// vectors) is tolerated: it logs a warning and returns the unmoved
    /// position.
    fn cursor_move(&self, direction: Vec2, distance: i64) -> Vec2 {
        cursor_move_from(self.cursor_pos(), direction, distance)
    }
}

/// The pure movement rule behind [`Environment::cursor_move`].
pub fn cursor_move_from(pos: Vec2, direction: Vec2, distance: i64) -> Vec2 {
    if !DirectionSpace.contains(direction) {
        warn!(%direction, "invalid direction, returning unmoved cursor position");
        return pos;
    }
    pos + direction * distance
}

/// Diagnostic name of an action value's variant.
pub(crate) fn action_kind(action: &Action) -> &'static str {
    match action {
        Action::DigitPosition { .. } => "digit+position",
        Action::DigitDirection { .. } => "digit+direction",
        Action::Index(_) => "discrete index",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_directions_displace_the_position() {
        let pos = Vec2::new(5, 5);
        assert_eq!(cursor_move_from(pos, Vec2::new(1, 0), 3), Vec2::new(8, 5));
        assert_eq!(cursor_move_from(pos, Vec2::new(0, -1), 2), Vec2::new(5, 3));
    }

    #[test]
    fn invalid_directions_return_the_unmoved_position() {
        let pos = Vec2::new(5, 5);
        assert_eq!(cursor_move_from(pos, Vec2::new(1, 1), 3), pos);
        assert_eq!(cursor_move_from(pos, Vec2::new(0, 0), 1), pos);
        assert_eq!(cursor_move_from(pos, Vec2::new(2, 0), 1), pos);
    }
}
