//! Action and observation adapters.
//!
//! Each adapter wraps exactly one inner [`Environment`](crate::Environment)
//! by value, rewrites actions on the way in and observations on the way
//! out, and shadows the inner space descriptor with its own. Constructors
//! validate the inner space and fail fast on a mismatch, so an
//! incompatible stack is rejected at assembly time rather than mid-episode.

mod direction;
mod discrete_action;
mod discrete_observation;

pub use direction::DirectionAdapter;
pub use discrete_action::DiscreteActionAdapter;
pub use discrete_observation::DiscreteObservationAdapter;
