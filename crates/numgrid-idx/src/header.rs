//! IDX header parsing.

use crate::element::ElementType;
use crate::error::IdxError;
use std::io::Read;

/// The parsed header of an IDX stream.
///
/// Dimension 0 is the total record count; the remaining dimensions are the
/// shape of every individual record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdxHeader {
    element: ElementType,
    dims: Vec<u32>,
}

impl IdxHeader {
    /// Parse the magic number and dimension table from the start of a
    /// stream.
    ///
    /// # Errors
    ///
    /// `TruncatedHeader` if the stream ends inside the header,
    /// `UnknownElementType` if magic byte 3 is outside the closed set,
    /// `Io` for underlying stream failures.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self, IdxError> {
        let magic = read_exact_or_truncated(reader, 4)?;
        let element = ElementType::from_code(magic[2])?;
        let ndims = magic[3] as usize;

        let mut dims = Vec::with_capacity(ndims);
        for _ in 0..ndims {
            let raw = read_exact_or_truncated(reader, 4)?;
            dims.push(u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]));
        }
        Ok(Self { element, dims })
    }

    /// Element type declared by the magic number.
    pub fn element(&self) -> ElementType {
        self.element
    }

    /// All declared dimensions, record count first.
    pub fn dims(&self) -> &[u32] {
        &self.dims
    }

    /// Total number of records (dimension 0; zero for a dimensionless
    /// stream).
    pub fn record_count(&self) -> usize {
        self.dims.first().copied().unwrap_or(0) as usize
    }

    /// Shape of one record (dimensions after the first).
    pub fn record_shape(&self) -> &[u32] {
        self.dims.get(1..).unwrap_or(&[])
    }

    /// Elements per record (product of the record shape).
    pub fn record_len(&self) -> usize {
        self.record_shape().iter().map(|&d| d as usize).product()
    }

    /// Bytes per record in the stream.
    pub fn record_byte_size(&self) -> usize {
        self.record_len() * self.element.byte_size()
    }
}

fn read_exact_or_truncated<R: Read>(reader: &mut R, len: usize) -> Result<Vec<u8>, IdxError> {
    let mut buf = vec![0u8; len];
    match reader.read_exact(&mut buf) {
        Ok(()) => Ok(buf),
        Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => {
            Err(IdxError::TruncatedHeader)
        }
        Err(err) => Err(IdxError::Io(err)),
    }
}
