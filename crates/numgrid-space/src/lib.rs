//! Action and observation spaces for the numgrid simulation.
//!
//! This crate defines the closed set of space kinds the environment
//! pipeline works with — [`Discrete`], [`MultiDiscrete`], and
//! [`DirectionSpace`] — plus the tagged unions [`ActionSpace`] and
//! [`ObservationSpace`] that each pipeline layer exposes. Keeping the set
//! closed lets adapters match exhaustively instead of downcasting.
//!
//! Every space is a first-class value with `sample` and `contains`.
//! Sampling takes an explicit `&mut impl Rng` so determinism is the
//! caller's choice, not hidden global state.
//!
//! [`DiscreteMapping`] builds the total bijection between a linear index
//! and the coordinate tuples of a [`MultiDiscrete`] space, used by the
//! discrete-index adapters.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod descriptor;
mod direction;
mod discrete;
mod error;
mod mapping;
mod multi_discrete;

pub use descriptor::{ActionSpace, ObservationSpace};
pub use direction::DirectionSpace;
pub use discrete::Discrete;
pub use error::SpaceError;
pub use mapping::DiscreteMapping;
pub use multi_discrete::MultiDiscrete;
