//! Core value types for the numgrid simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: 2D vectors,
//! coordinate tuples, actions, observations, and step results.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod action;
mod step;
mod vec2;

pub use action::{Action, Observation, NO_GUESS};
pub use step::{Step, StepInfo};
pub use vec2::Vec2;

use smallvec::SmallVec;

/// A coordinate tuple in a multi-axis discrete space.
///
/// Inline capacity of 4 covers every space in this workspace: positions are
/// 2 axes, the flattened digit+position action space is 3.
pub type Coord = SmallVec<[i64; 4]>;
