//! NumGrid: a handwritten-digit grid world for reinforcement learning agents.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all NumGrid sub-crates. For most users, adding `numgrid` as a single
//! dependency is sufficient.
//!
//! The world is a mosaic of digit tiles loaded from gzip IDX datasets
//! (MNIST-compatible). An agent moves a cursor over the mosaic and is
//! rewarded for correctly guessing the digit under it. The base world takes
//! raw `(digit, position)` actions; adapters restate the interface for
//! direction-relative movement or single-integer (tabular) agents.
//!
//! # Quick start
//!
//! ```rust
//! use numgrid::prelude::*;
//! use std::io::Cursor;
//!
//! // A tiny synthetic dataset stands in for MNIST here; point
//! // `WorldConfig::images_path`/`labels_path` at the real files and use
//! // `NumGrid::new` instead.
//! let (images, labels) = numgrid_test_utils::digit_dataset(&[3, 1, 4, 1], 8, 8);
//! let config = WorldConfig {
//!     size: (2, 2),
//!     cursor_size: (8, 8),
//!     num_steps: Some(50),
//!     seed: 7,
//!     ..Default::default()
//! };
//! let world = NumGrid::from_readers(&config, Cursor::new(images), Cursor::new(labels)).unwrap();
//!
//! // Direction-relative movement, then everything flattened to integers.
//! let world = DirectionAdapter::new(world, 1).unwrap();
//! let world = DiscreteActionAdapter::new(world).unwrap();
//! let mut world = DiscreteObservationAdapter::new(world).unwrap();
//!
//! let observation = world.reset().unwrap();
//! assert!(matches!(observation, Observation::Index(_)));
//!
//! let step = world.step(Action::Index(0)).unwrap();
//! assert!(step.reward == 3.0 || step.reward == -3.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `numgrid-core` | Vectors, actions, observations, step results |
//! | [`space`] | `numgrid-space` | Space descriptors and the discrete mapping |
//! | [`idx`] | `numgrid-idx` | Gzip IDX dataset loading, full and sparse |
//! | [`env`] | `numgrid-env` | The base world and the adapter pipeline |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`numgrid-core`).
///
/// Contains [`types::Vec2`], the [`types::Action`] and
/// [`types::Observation`] enums, and the [`types::Step`] result. All are
/// also available in the [`prelude`].
pub use numgrid_core as types;

/// Space descriptors and index mapping (`numgrid-space`).
///
/// Provides [`space::Discrete`], [`space::MultiDiscrete`],
/// [`space::DirectionSpace`], and the bijective [`space::DiscreteMapping`]
/// behind the flattening adapters.
pub use numgrid_space as space;

/// Gzip IDX dataset loading (`numgrid-idx`).
///
/// [`idx::load_idx`] reads whole datasets or a sparse ascending subset of
/// records without materializing the rest of the stream.
pub use numgrid_idx as idx;

/// The world and its adapter pipeline (`numgrid-env`).
///
/// [`env::NumGrid`] is the base simulation; [`env::wrappers`] holds the
/// adapters that restate its action and observation interface.
pub use numgrid_env as env;

/// Common imports for typical NumGrid usage.
///
/// ```rust
/// use numgrid::prelude::*;
/// ```
///
/// This imports the world, its configuration, the [`prelude::Environment`]
/// trait, the adapters, and the core action/observation types.
pub mod prelude {
    // Core types
    pub use numgrid_core::{Action, Observation, Step, StepInfo, Vec2, NO_GUESS};

    // Spaces
    pub use numgrid_space::{ActionSpace, ObservationSpace};

    // Errors
    pub use numgrid_env::{PipelineError, StepError, WorldError};

    // World and adapters
    pub use numgrid_env::{
        DirectionAdapter, DiscreteActionAdapter, DiscreteObservationAdapter, Environment, NumGrid,
        WorldConfig,
    };
}
