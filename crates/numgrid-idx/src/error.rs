//! Error types for IDX loading.

use crate::element::ElementType;
use std::fmt;
use std::io;

/// Errors arising while reading an IDX dataset.
///
/// All variants are fatal to the load: the data source is assumed static
/// and local, so there is no retry policy.
#[derive(Debug)]
pub enum IdxError {
    /// The stream ended inside the magic number or dimension table.
    TruncatedHeader,
    /// Magic byte 3 is not one of the six known element-type codes.
    UnknownElementType {
        /// The unrecognized code.
        code: u8,
    },
    /// The file's element type does not match the requested Rust type.
    ElementTypeMismatch {
        /// Type implied by the requested Rust element.
        expected: ElementType,
        /// Type declared by the file header.
        found: ElementType,
    },
    /// A requested record index is at or past the declared record count.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The declared record count.
        count: usize,
    },
    /// The outer shape's product disagrees with the number of indices.
    ShapeMismatch {
        /// Product of the requested outer shape.
        outer_size: usize,
        /// Number of requested indices.
        index_count: usize,
    },
    /// Requested indices are not strictly ascending.
    ///
    /// The sparse reader skips forward between picks, so indices must be
    /// sorted and free of duplicates.
    UnsortedIndices {
        /// Position in the index list where order broke.
        position: usize,
    },
    /// The underlying stream failed or ended early.
    Io(io::Error),
}

impl fmt::Display for IdxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedHeader => write!(f, "stream ended inside the IDX header"),
            Self::UnknownElementType { code } => {
                write!(f, "unknown IDX element type code {code:#04x}")
            }
            Self::ElementTypeMismatch { expected, found } => {
                write!(f, "requested {expected} elements but file holds {found}")
            }
            Self::OutOfRange { index, count } => {
                write!(f, "record index {index} out of range for {count} records")
            }
            Self::ShapeMismatch {
                outer_size,
                index_count,
            } => write!(
                f,
                "outer shape of size {outer_size} does not match {index_count} indices"
            ),
            Self::UnsortedIndices { position } => {
                write!(f, "record indices must be strictly ascending (position {position})")
            }
            Self::Io(err) => write!(f, "i/o error reading IDX stream: {err}"),
        }
    }
}

impl std::error::Error for IdxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for IdxError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
