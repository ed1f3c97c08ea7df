//! Error types for world construction, stepping, and pipeline assembly.

use numgrid_idx::IdxError;
use numgrid_space::SpaceError;
use std::fmt;

/// Errors detected while constructing a [`NumGrid`](crate::NumGrid) world.
#[derive(Debug)]
pub enum WorldError {
    /// The grid has zero tiles along some axis.
    EmptyGrid,
    /// The cursor has zero pixels along some axis.
    ZeroCursor,
    /// The cursor is larger than the assembled mosaic.
    CursorTooLarge {
        /// Configured cursor size in pixels, width first.
        cursor: (u32, u32),
        /// Mosaic size in pixels, width first.
        mosaic: (usize, usize),
    },
    /// The configured digit filter contains a value outside `[0, 9]`.
    InvalidDigit {
        /// The offending value.
        digit: u8,
    },
    /// The dataset has too few eligible records to fill the grid.
    NotEnoughRecords {
        /// Tiles to fill.
        needed: usize,
        /// Eligible records found.
        available: usize,
    },
    /// Image records are not 2-dimensional pixel arrays.
    RecordRank {
        /// Dimensionality of one record in the dataset.
        ndim: usize,
    },
    /// Dataset loading failed.
    Idx(IdxError),
    /// Space construction failed.
    Space(SpaceError),
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must be at least one tile in each axis"),
            Self::ZeroCursor => write!(f, "cursor must be at least one pixel in each axis"),
            Self::CursorTooLarge { cursor, mosaic } => write!(
                f,
                "cursor {}x{} does not fit the {}x{} mosaic",
                cursor.0, cursor.1, mosaic.0, mosaic.1
            ),
            Self::InvalidDigit { digit } => {
                write!(f, "digit filter value {digit} outside [0, 9]")
            }
            Self::NotEnoughRecords { needed, available } => write!(
                f,
                "grid needs {needed} records but only {available} are eligible"
            ),
            Self::RecordRank { ndim } => {
                write!(f, "image records must be 2-dimensional, got {ndim} axes")
            }
            Self::Idx(err) => write!(f, "dataset load failed: {err}"),
            Self::Space(err) => write!(f, "space construction failed: {err}"),
        }
    }
}

impl std::error::Error for WorldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Idx(err) => Some(err),
            Self::Space(err) => Some(err),
            _ => None,
        }
    }
}

impl From<IdxError> for WorldError {
    fn from(err: IdxError) -> Self {
        Self::Idx(err)
    }
}

impl From<SpaceError> for WorldError {
    fn from(err: SpaceError) -> Self {
        Self::Space(err)
    }
}

/// Errors from `step` or `reset` on some pipeline layer.
///
/// Out-of-bounds cursor targets are *not* errors — they are a normal
/// outcome flagged in [`StepInfo`](numgrid_core::StepInfo).
#[derive(Debug)]
pub enum StepError {
    /// The action's variant does not match the layer's exposed space.
    UnsupportedAction {
        /// The space kind this layer accepts.
        expected: &'static str,
        /// The kind of action that was submitted.
        found: &'static str,
    },
    /// The digit-guess component is outside `[0, 10]`.
    InvalidGuess {
        /// The offending guess.
        digit: u8,
    },
    /// A mapping lookup failed while rewriting the action or observation.
    Space(SpaceError),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedAction { expected, found } => {
                write!(f, "expected a {expected} action, got {found}")
            }
            Self::InvalidGuess { digit } => {
                write!(f, "digit guess {digit} outside [0, 10]")
            }
            Self::Space(err) => write!(f, "space lookup failed: {err}"),
        }
    }
}

impl std::error::Error for StepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Space(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SpaceError> for StepError {
    fn from(err: SpaceError) -> Self {
        Self::Space(err)
    }
}

/// Errors from assembling the adapter pipeline.
#[derive(Debug)]
pub enum PipelineError {
    /// An adapter was wrapped around an incompatible inner space.
    UnsupportedSpace {
        /// The inner space kind the adapter requires.
        expected: &'static str,
        /// The space kind the inner layer actually exposes.
        found: &'static str,
    },
    /// Building the adapter's discrete mapping failed.
    Space(SpaceError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSpace { expected, found } => {
                write!(f, "adapter requires a {expected} inner space, found {found}")
            }
            Self::Space(err) => write!(f, "mapping construction failed: {err}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Space(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SpaceError> for PipelineError {
    fn from(err: SpaceError) -> Self {
        Self::Space(err)
    }
}
