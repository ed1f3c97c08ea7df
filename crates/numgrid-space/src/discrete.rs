//! Linear discrete space.

use crate::error::SpaceError;
use rand::Rng;

/// A discrete space over the integers `[0, n)`.
///
/// # Examples
///
/// ```
/// use numgrid_space::Discrete;
///
/// let digits = Discrete::new(11).unwrap();
/// assert!(digits.contains(10));
/// assert!(!digits.contains(11));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Discrete {
    n: u64,
}

impl Discrete {
    /// Create a discrete space with `n` elements.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if `n` is 0.
    pub fn new(n: u64) -> Result<Self, SpaceError> {
        if n == 0 {
            return Err(SpaceError::EmptySpace);
        }
        Ok(Self { n })
    }

    /// Number of elements.
    pub fn len(&self) -> u64 {
        self.n
    }

    /// Always `false`; construction rejects empty spaces.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Draw a uniform sample from `[0, n)`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        rng.random_range(0..self.n)
    }

    /// Whether `value` lies in `[0, n)`.
    pub fn contains(&self, value: u64) -> bool {
        value < self.n
    }
}
