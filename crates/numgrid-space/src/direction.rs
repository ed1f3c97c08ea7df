//! The four-element space of orthogonal unit moves.

use numgrid_core::Vec2;
use rand::Rng;

/// Discrete space consisting of the four orthogonal unit directions.
///
/// The element order — left, right, up, down — is fixed and public: the
/// discrete-index adapters rely on it to enumerate directions stably.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectionSpace;

impl DirectionSpace {
    /// The directions in canonical order: left, right, up, down.
    pub const VALUES: [Vec2; 4] = [
        Vec2::new(-1, 0),
        Vec2::new(1, 0),
        Vec2::new(0, -1),
        Vec2::new(0, 1),
    ];

    /// Number of directions.
    pub fn len(&self) -> u64 {
        Self::VALUES.len() as u64
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Draw a uniformly random direction.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        Self::VALUES[rng.random_range(0..Self::VALUES.len())]
    }

    /// Whether `value` is one of the four unit directions.
    pub fn contains(&self, value: Vec2) -> bool {
        Self::VALUES.contains(&value)
    }

    /// The direction at `index` in canonical order.
    pub fn get(&self, index: usize) -> Option<Vec2> {
        Self::VALUES.get(index).copied()
    }

    /// The canonical index of a direction.
    pub fn index_of(&self, value: Vec2) -> Option<usize> {
        Self::VALUES.iter().position(|&d| d == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn contains_exactly_the_unit_vectors() {
        let space = DirectionSpace;
        for d in DirectionSpace::VALUES {
            assert!(space.contains(d));
        }
        assert!(!space.contains(Vec2::new(1, 1)));
        assert!(!space.contains(Vec2::new(0, 0)));
        assert!(!space.contains(Vec2::new(-2, 0)));
    }

    #[test]
    fn index_round_trip() {
        let space = DirectionSpace;
        for (i, d) in DirectionSpace::VALUES.iter().enumerate() {
            assert_eq!(space.index_of(*d), Some(i));
            assert_eq!(space.get(i), Some(*d));
        }
        assert_eq!(space.get(4), None);
        assert_eq!(space.index_of(Vec2::new(2, 0)), None);
    }

    #[test]
    fn sampling_covers_all_directions() {
        let space = DirectionSpace;
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut seen = [false; 4];
        for _ in 0..100 {
            let d = space.sample(&mut rng);
            seen[space.index_of(d).unwrap()] = true;
        }
        assert_eq!(seen, [true; 4]);
    }
}
