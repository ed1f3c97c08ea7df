//! Error types for space construction and mapping lookups.

use numgrid_core::Coord;
use std::fmt;

/// Errors arising from space construction or discrete-mapping lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a space with zero elements.
    EmptySpace,
    /// A [`MultiDiscrete`](crate::MultiDiscrete) axis maximum is negative.
    NegativeBound {
        /// The offending axis index.
        axis: usize,
        /// The configured inclusive maximum.
        high: i64,
    },
    /// Building a total mapping would exceed the configured ceiling.
    MappingTooLarge {
        /// Total size of the requested mapping.
        size: u64,
        /// The ceiling it exceeded.
        limit: u64,
    },
    /// A linear index has no entry in the mapping.
    UnmappedIndex {
        /// The offending index.
        index: u64,
        /// The mapping's total size.
        size: u64,
    },
    /// A coordinate tuple has no entry in the mapping.
    ///
    /// Unreachable for tuples inside the mapped space (the mapping is
    /// total), but checked defensively on every reverse lookup.
    UnmappedCoord {
        /// The offending coordinate.
        coord: Coord,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "space must have at least one element"),
            Self::NegativeBound { axis, high } => {
                write!(f, "axis {axis} has negative inclusive maximum {high}")
            }
            Self::MappingTooLarge { size, limit } => {
                write!(f, "mapping of size {size} exceeds ceiling {limit}")
            }
            Self::UnmappedIndex { index, size } => {
                write!(f, "index {index} outside mapping of size {size}")
            }
            Self::UnmappedCoord { coord } => {
                write!(f, "coordinate {coord:?} not present in mapping")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
