//! Multi-axis discrete space with inclusive per-axis maxima.

use crate::error::SpaceError;
use numgrid_core::{Coord, Vec2};
use rand::Rng;
use smallvec::SmallVec;

/// A product of discrete axes, each ranging over `[0, high[axis]]`
/// inclusive.
///
/// Axis order is the declared order of the wrapped quantity — for cursor
/// positions that is width before height (`[x, y]`).
///
/// # Examples
///
/// ```
/// use numgrid_space::MultiDiscrete;
///
/// let space = MultiDiscrete::new(&[2, 3]).unwrap();
/// assert_eq!(space.total_size(), 12);
/// assert!(space.contains(&[2, 0]));
/// assert!(!space.contains(&[3, 0]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiDiscrete {
    high: Coord,
}

impl MultiDiscrete {
    /// Create a space from inclusive per-axis maxima.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if `high` is empty and
    /// `Err(SpaceError::NegativeBound)` if any maximum is negative.
    pub fn new(high: &[i64]) -> Result<Self, SpaceError> {
        if high.is_empty() {
            return Err(SpaceError::EmptySpace);
        }
        for (axis, &h) in high.iter().enumerate() {
            if h < 0 {
                return Err(SpaceError::NegativeBound { axis, high: h });
            }
        }
        Ok(Self {
            high: SmallVec::from_slice(high),
        })
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.high.len()
    }

    /// Inclusive per-axis maxima.
    pub fn high(&self) -> &[i64] {
        &self.high
    }

    /// Cardinality of one axis (`high + 1`).
    pub fn cardinality(&self, axis: usize) -> u64 {
        self.high[axis] as u64 + 1
    }

    /// Product of all axis cardinalities.
    pub fn total_size(&self) -> u64 {
        (0..self.ndim()).map(|a| self.cardinality(a)).product()
    }

    /// Draw a uniform sample, one value per axis.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Coord {
        self.high
            .iter()
            .map(|&h| rng.random_range(0..=h))
            .collect()
    }

    /// Whether every component of `coord` lies inside its axis range.
    ///
    /// A tuple with the wrong number of axes is never contained.
    pub fn contains(&self, coord: &[i64]) -> bool {
        coord.len() == self.ndim()
            && coord
                .iter()
                .zip(self.high.iter())
                .all(|(&c, &h)| c >= 0 && c <= h)
    }

    /// [`sample`](Self::sample) for a 2-axis space, as a [`Vec2`].
    ///
    /// Returns `None` if the space is not 2-dimensional.
    pub fn sample_pos<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Vec2> {
        Vec2::from_coord(&self.sample(rng))
    }

    /// [`contains`](Self::contains) for a [`Vec2`] against a 2-axis space.
    pub fn contains_pos(&self, pos: Vec2) -> bool {
        self.contains(&pos.to_coord())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn rejects_bad_bounds() {
        assert_eq!(MultiDiscrete::new(&[]), Err(SpaceError::EmptySpace));
        assert_eq!(
            MultiDiscrete::new(&[3, -1]),
            Err(SpaceError::NegativeBound { axis: 1, high: -1 })
        );
    }

    #[test]
    fn total_size_is_product_of_cardinalities() {
        let space = MultiDiscrete::new(&[10, 4, 0]).unwrap();
        assert_eq!(space.total_size(), 11 * 5);
    }

    #[test]
    fn samples_stay_in_range() {
        let space = MultiDiscrete::new(&[5, 2]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let coord = space.sample(&mut rng);
            assert!(space.contains(&coord), "sampled {coord:?}");
        }
    }

    #[test]
    fn vec2_helpers_track_axis_order() {
        let space = MultiDiscrete::new(&[9, 3]).unwrap();
        assert!(space.contains_pos(Vec2::new(9, 3)));
        assert!(!space.contains_pos(Vec2::new(3, 9)));
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(space.sample_pos(&mut rng).is_some());

        let three_axis = MultiDiscrete::new(&[1, 1, 1]).unwrap();
        assert!(three_axis.sample_pos(&mut rng).is_none());
    }
}
