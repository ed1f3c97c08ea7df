//! Shared test fixtures for numgrid development.
//!
//! Builds synthetic gzip-compressed IDX datasets in memory so loader and
//! environment tests never touch the filesystem.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

/// IDX element-type code for `u8`.
pub const U8_CODE: u8 = 0x08;

/// Gzip-compress an already-assembled IDX byte stream.
pub fn gzip(raw: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::fast());
    encoder.write_all(raw).expect("in-memory write");
    encoder.finish().expect("in-memory finish")
}

/// Assemble a gzip IDX stream from a type code, dimensions, and the raw
/// big-endian element payload.
pub fn encode_idx(type_code: u8, dims: &[u32], payload: &[u8]) -> Vec<u8> {
    let mut raw = vec![0, 0, type_code, dims.len() as u8];
    for &dim in dims {
        raw.extend_from_slice(&dim.to_be_bytes());
    }
    raw.extend_from_slice(payload);
    gzip(&raw)
}

/// Assemble a gzip IDX stream of `u8` elements.
pub fn encode_idx_u8(dims: &[u32], data: &[u8]) -> Vec<u8> {
    encode_idx(U8_CODE, dims, data)
}

/// Build a matching (images, labels) gzip IDX pair.
///
/// One image record per label, each `tile_h x tile_w` pixels filled with
/// the value `pixel_for(label)`, so tests can identify which record landed
/// where in a mosaic.
pub fn digit_dataset(labels: &[u8], tile_h: u32, tile_w: u32) -> (Vec<u8>, Vec<u8>) {
    let mut pixels = Vec::with_capacity(labels.len() * (tile_h * tile_w) as usize);
    for &label in labels {
        pixels.extend(std::iter::repeat(pixel_for(label)).take((tile_h * tile_w) as usize));
    }
    let images = encode_idx_u8(&[labels.len() as u32, tile_h, tile_w], &pixels);
    let label_stream = encode_idx_u8(&[labels.len() as u32], labels);
    (images, label_stream)
}

/// The fill value [`digit_dataset`] uses for a label's image record.
pub fn pixel_for(label: u8) -> u8 {
    label * 10 + 1
}
