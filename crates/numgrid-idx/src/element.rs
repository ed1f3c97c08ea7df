//! The closed set of IDX element types.

use crate::error::IdxError;
use std::fmt;

/// Element type declared by magic byte 3 of an IDX header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementType {
    /// Unsigned byte (`0x08`).
    U8,
    /// Signed byte (`0x09`).
    I8,
    /// Big-endian signed 16-bit integer (`0x0B`).
    I16,
    /// Big-endian signed 32-bit integer (`0x0C`).
    I32,
    /// Big-endian IEEE-754 single (`0x0D`).
    F32,
    /// Big-endian IEEE-754 double (`0x0E`).
    F64,
}

impl ElementType {
    /// Decode a magic-number type byte.
    ///
    /// # Errors
    ///
    /// Returns `IdxError::UnknownElementType` for codes outside the closed
    /// set.
    pub fn from_code(code: u8) -> Result<Self, IdxError> {
        match code {
            0x08 => Ok(Self::U8),
            0x09 => Ok(Self::I8),
            0x0B => Ok(Self::I16),
            0x0C => Ok(Self::I32),
            0x0D => Ok(Self::F32),
            0x0E => Ok(Self::F64),
            _ => Err(IdxError::UnknownElementType { code }),
        }
    }

    /// The magic-number code for this type.
    pub fn code(self) -> u8 {
        match self {
            Self::U8 => 0x08,
            Self::I8 => 0x09,
            Self::I16 => 0x0B,
            Self::I32 => 0x0C,
            Self::F32 => 0x0D,
            Self::F64 => 0x0E,
        }
    }

    /// Bytes per element in the stream.
    pub fn byte_size(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::I16 => 2,
            Self::I32 | Self::F32 => 4,
            Self::F64 => 8,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::U8 => "u8",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::F32 => "f32",
            Self::F64 => "f64",
        };
        f.write_str(name)
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A Rust type that can be decoded from IDX element bytes.
///
/// Sealed: the six implementations mirror the closed [`ElementType`] set.
pub trait IdxElement: sealed::Sealed + Copy + 'static {
    /// The IDX element type this Rust type decodes.
    const TYPE: ElementType;
    /// Bytes per element in the stream.
    const SIZE: usize;

    /// Decode one element from exactly [`SIZE`](Self::SIZE) big-endian
    /// bytes.
    fn from_be_bytes(bytes: &[u8]) -> Self;
}

macro_rules! impl_idx_element {
    ($ty:ty, $variant:ident, $size:expr) => {
        impl IdxElement for $ty {
            const TYPE: ElementType = ElementType::$variant;
            const SIZE: usize = $size;

            fn from_be_bytes(bytes: &[u8]) -> Self {
                let mut buf = [0u8; $size];
                buf.copy_from_slice(bytes);
                <$ty>::from_be_bytes(buf)
            }
        }
    };
}

impl_idx_element!(u8, U8, 1);
impl_idx_element!(i8, I8, 1);
impl_idx_element!(i16, I16, 2);
impl_idx_element!(i32, I32, 4);
impl_idx_element!(f32, F32, 4);
impl_idx_element!(f64, F64, 8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for code in [0x08, 0x09, 0x0B, 0x0C, 0x0D, 0x0E] {
            let ty = ElementType::from_code(code).unwrap();
            assert_eq!(ty.code(), code);
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        for code in [0x00, 0x0A, 0x0F, 0xFF] {
            assert!(matches!(
                ElementType::from_code(code),
                Err(IdxError::UnknownElementType { code: c }) if c == code
            ));
        }
    }

    #[test]
    fn element_sizes_match_declared_type() {
        assert_eq!(<u8 as IdxElement>::SIZE, ElementType::U8.byte_size());
        assert_eq!(<i16 as IdxElement>::SIZE, ElementType::I16.byte_size());
        assert_eq!(<f64 as IdxElement>::SIZE, ElementType::F64.byte_size());
    }

    #[test]
    fn big_endian_decode() {
        assert_eq!(<i16 as IdxElement>::from_be_bytes(&[0x01, 0x02]), 0x0102);
        assert_eq!(
            <i32 as IdxElement>::from_be_bytes(&[0, 0, 0x01, 0x00]),
            256
        );
        assert_eq!(
            <f32 as IdxElement>::from_be_bytes(&1.5f32.to_be_bytes()),
            1.5
        );
    }
}
