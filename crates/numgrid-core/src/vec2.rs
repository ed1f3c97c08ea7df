//! 2D integer vectors for cursor positions and directions.

use crate::Coord;
use smallvec::smallvec;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A 2D integer vector with top-left origin.
///
/// Used for cursor positions, cursor/world sizes, and movement directions.
/// Signed so that transient out-of-bounds positions (e.g. a cursor move past
/// the left edge) stay representable; the environment flags them rather than
/// wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2 {
    /// Horizontal component (column, width axis).
    pub x: i64,
    /// Vertical component (row, height axis).
    pub y: i64,
}

impl Vec2 {
    /// Create a vector from its components.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Convert to a 2-axis coordinate tuple, `[x, y]`.
    pub fn to_coord(self) -> Coord {
        smallvec![self.x, self.y]
    }

    /// Convert a 2-axis coordinate tuple back to a vector.
    ///
    /// Returns `None` if the tuple does not have exactly two axes.
    pub fn from_coord(coord: &[i64]) -> Option<Self> {
        match coord {
            &[x, y] => Some(Self { x, y }),
            _ => None,
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: i64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(i64, i64)> for Vec2 {
    fn from((x, y): (i64, i64)) -> Self {
        Vec2::new(x, y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_matches_componentwise_expectation() {
        let a = Vec2::new(3, -1);
        let b = Vec2::new(1, 4);
        assert_eq!(a + b, Vec2::new(4, 3));
        assert_eq!(a - b, Vec2::new(2, -5));
        assert_eq!(b * 3, Vec2::new(3, 12));
    }

    #[test]
    fn coord_round_trip() {
        let v = Vec2::new(7, 2);
        assert_eq!(Vec2::from_coord(&v.to_coord()), Some(v));
        assert_eq!(Vec2::from_coord(&[1]), None);
        assert_eq!(Vec2::from_coord(&[1, 2, 3]), None);
    }
}
