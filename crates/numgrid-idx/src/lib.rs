//! Sparse record loading from gzip IDX datasets.
//!
//! The IDX format is a big-endian, length-prefixed binary stream:
//! `[4-byte magic][d x 4-byte dims][records...]`, where magic byte 3
//! selects the element type and byte 4 gives the dimension count. The
//! first dimension is the record count; the rest are the per-record shape.
//!
//! [`load_idx`] reads a contiguous or sparse subset of records from such a
//! stream into a freshly allocated [`ndarray::ArrayD`]. Sparse subsets are
//! read with forward skips between picks, so I/O is proportional to the
//! highest requested index rather than memory to the whole file.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod element;
mod error;
mod header;
mod load;

pub use element::{ElementType, IdxElement};
pub use error::IdxError;
pub use header::IdxHeader;
pub use load::{load_idx, load_idx_file};
