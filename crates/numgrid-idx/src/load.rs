//! Record retrieval with forward-skip sparse reads.

use crate::element::IdxElement;
use crate::error::IdxError;
use crate::header::IdxHeader;
use flate2::read::GzDecoder;
use ndarray::{ArrayD, IxDyn};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Load records from a gzip IDX stream.
///
/// Four retrieval modes, selected by which arguments are supplied:
///
/// | `outer_shape` | `indices` | behavior |
/// |---------------|-----------|----------|
/// | `None` | `None` | all records, outer shape `(count,)` |
/// | `Some(s)` | `None` | first `product(s)` records, outer shape `s` |
/// | `None` | `Some(i)` | exactly those records, outer shape `(i.len(),)` |
/// | `Some(s)` | `Some(i)` | those records reshaped to `s` |
///
/// Indices must be strictly ascending: between consecutive picks the
/// reader skips exactly `(next - (prev + 1)) * record_byte_size` bytes, so
/// a sparse load costs I/O up to the highest index and memory only for the
/// requested records.
///
/// The returned array has shape `outer_shape + record_shape` and is owned
/// by the caller.
///
/// # Errors
///
/// - `ElementTypeMismatch` if `T` differs from the file's element type
/// - `OutOfRange` if any requested record index is `>= count`
/// - `ShapeMismatch` if both arguments are given and
///   `product(outer_shape) != indices.len()`
/// - `UnsortedIndices` if indices are not strictly ascending
/// - header and I/O errors from the underlying stream
pub fn load_idx<T: IdxElement, R: Read>(
    source: R,
    outer_shape: Option<&[usize]>,
    indices: Option<&[usize]>,
) -> Result<ArrayD<T>, IdxError> {
    let mut reader = GzDecoder::new(source);
    let header = IdxHeader::read_from(&mut reader)?;

    if T::TYPE != header.element() {
        return Err(IdxError::ElementTypeMismatch {
            expected: T::TYPE,
            found: header.element(),
        });
    }

    let count = header.record_count();
    let (outer, picks) = resolve_modes(outer_shape, indices, count)?;
    validate_indices(&picks, count)?;

    let record_len = header.record_len();
    let record_bytes = header.record_byte_size();
    let mut data = Vec::with_capacity(picks.len() * record_len);
    let mut buf = vec![0u8; record_bytes];

    // Next unread record in the stream; picks are ascending so the skip
    // distance is never negative.
    let mut cursor = 0usize;
    for &index in &picks {
        skip_bytes(&mut reader, ((index - cursor) * record_bytes) as u64)?;
        reader.read_exact(&mut buf)?;
        data.extend(buf.chunks_exact(T::SIZE).map(T::from_be_bytes));
        cursor = index + 1;
    }

    let mut shape = outer;
    shape.extend(header.record_shape().iter().map(|&d| d as usize));
    ArrayD::from_shape_vec(IxDyn(&shape), data).map_err(|_| IdxError::ShapeMismatch {
        outer_size: shape.iter().product(),
        index_count: picks.len(),
    })
}

/// [`load_idx`] over a gzip IDX file on disk.
///
/// The file handle is opened, read, and dropped entirely within this call,
/// including on the error path.
pub fn load_idx_file<T: IdxElement>(
    path: impl AsRef<Path>,
    outer_shape: Option<&[usize]>,
    indices: Option<&[usize]>,
) -> Result<ArrayD<T>, IdxError> {
    let file = File::open(path)?;
    load_idx(file, outer_shape, indices)
}

/// Resolve the four retrieval modes into (outer shape, record indices).
fn resolve_modes(
    outer_shape: Option<&[usize]>,
    indices: Option<&[usize]>,
    count: usize,
) -> Result<(Vec<usize>, Vec<usize>), IdxError> {
    match (outer_shape, indices) {
        (None, None) => Ok((vec![count], (0..count).collect())),
        (Some(shape), None) => {
            let n: usize = shape.iter().product();
            if n > count {
                return Err(IdxError::OutOfRange {
                    index: n.saturating_sub(1),
                    count,
                });
            }
            Ok((shape.to_vec(), (0..n).collect()))
        }
        (None, Some(picks)) => Ok((vec![picks.len()], picks.to_vec())),
        (Some(shape), Some(picks)) => {
            let n: usize = shape.iter().product();
            if n != picks.len() {
                return Err(IdxError::ShapeMismatch {
                    outer_size: n,
                    index_count: picks.len(),
                });
            }
            Ok((shape.to_vec(), picks.to_vec()))
        }
    }
}

fn validate_indices(picks: &[usize], count: usize) -> Result<(), IdxError> {
    for (position, window) in picks.windows(2).enumerate() {
        if window[1] <= window[0] {
            return Err(IdxError::UnsortedIndices {
                position: position + 1,
            });
        }
    }
    if let Some(&last) = picks.last() {
        // Ascending order means the last index is the largest.
        if last >= count {
            return Err(IdxError::OutOfRange { index: last, count });
        }
    }
    Ok(())
}

fn skip_bytes<R: Read>(reader: &mut R, len: u64) -> Result<(), IdxError> {
    if len == 0 {
        return Ok(());
    }
    let copied = io::copy(&mut reader.take(len), &mut io::sink())?;
    if copied < len {
        return Err(IdxError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stream ended while skipping records",
        )));
    }
    Ok(())
}
