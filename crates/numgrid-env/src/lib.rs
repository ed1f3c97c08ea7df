//! The digit-mosaic grid world and its adapter pipeline.
//!
//! [`NumGrid`] is the base simulation: a mosaic of handwritten-digit tiles,
//! a cursor, and a reward for guessing the digit under the cursor. It
//! accepts raw `(digit, position)` actions and emits raw cursor-position
//! observations.
//!
//! Everything else an agent might want — direction-relative movement,
//! single-integer action and observation spaces — is layered on through
//! adapters implementing the same [`Environment`] trait:
//!
//! ```text
//! agent -> DiscreteActionAdapter -> DirectionAdapter -> NumGrid
//!            (index -> tuple)       (direction -> position)
//! ```
//!
//! Adapters rewrite actions on the way down and observations on the way
//! up; the base world's semantics never change. Each adapter validates its
//! inner layer's space at construction and fails fast with
//! [`PipelineError::UnsupportedSpace`] on a mismatch.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod config;
mod environment;
mod error;
mod world;
pub mod wrappers;

pub use config::WorldConfig;
pub use environment::{cursor_move_from, Environment};
pub use error::{PipelineError, StepError, WorldError};
pub use world::{NumGrid, GUESS_REWARD};
pub use wrappers::{DirectionAdapter, DiscreteActionAdapter, DiscreteObservationAdapter};
