//! Total bijection between a linear index and multi-axis coordinates.

use crate::error::SpaceError;
use crate::multi_discrete::MultiDiscrete;
use indexmap::IndexMap;
use numgrid_core::Coord;

/// A total discrete mapping over a [`MultiDiscrete`] space.
///
/// Associates every coordinate tuple of the space's cartesian product with
/// a unique index in `[0, total_size)`. Enumeration order is fixed: the
/// first declared axis varies fastest, so for a position space (`[x, y]`)
/// the width coordinate cycles before the height coordinate advances.
///
/// The mapping is built once at construction — an O(total_size) allocation
/// guarded by an explicit ceiling — and both lookup directions are O(1)
/// afterwards (the reverse direction through an [`IndexMap`]).
///
/// # Examples
///
/// ```
/// use numgrid_space::{DiscreteMapping, MultiDiscrete};
///
/// let space = MultiDiscrete::new(&[1, 2]).unwrap();
/// let mapping = DiscreteMapping::new(&space).unwrap();
/// assert_eq!(mapping.len(), 6);
/// assert_eq!(mapping.decode(1).unwrap().as_slice(), &[1, 0]);
/// assert_eq!(mapping.decode(2).unwrap().as_slice(), &[0, 1]);
/// assert_eq!(mapping.encode(&[1, 2]).unwrap(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct DiscreteMapping {
    forward: Vec<Coord>,
    reverse: IndexMap<Coord, u64>,
}

impl DiscreteMapping {
    /// Default ceiling on the number of mapped coordinates.
    pub const DEFAULT_MAX_SIZE: u64 = 1 << 20;

    /// Build the total mapping with the default size ceiling.
    ///
    /// # Errors
    ///
    /// Returns `SpaceError::MappingTooLarge` if the space's total size
    /// exceeds [`DEFAULT_MAX_SIZE`](Self::DEFAULT_MAX_SIZE).
    pub fn new(space: &MultiDiscrete) -> Result<Self, SpaceError> {
        Self::with_limit(space, Self::DEFAULT_MAX_SIZE)
    }

    /// Build the total mapping, failing if the total size exceeds `limit`.
    pub fn with_limit(space: &MultiDiscrete, limit: u64) -> Result<Self, SpaceError> {
        let size = space.total_size();
        if size > limit {
            return Err(SpaceError::MappingTooLarge { size, limit });
        }

        let mut forward = Vec::with_capacity(size as usize);
        let mut reverse = IndexMap::with_capacity(size as usize);
        for index in 0..size {
            let mut rem = index;
            let coord: Coord = (0..space.ndim())
                .map(|axis| {
                    let card = space.cardinality(axis);
                    let c = (rem % card) as i64;
                    rem /= card;
                    c
                })
                .collect();
            reverse.insert(coord.clone(), index);
            forward.push(coord);
        }
        Ok(Self { forward, reverse })
    }

    /// Total number of mapped coordinates.
    pub fn len(&self) -> u64 {
        self.forward.len() as u64
    }

    /// Whether the mapping is empty (never: the space has at least one
    /// element).
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// The coordinate tuple for a linear index.
    ///
    /// # Errors
    ///
    /// Returns `SpaceError::UnmappedIndex` if `index >= len()`.
    pub fn decode(&self, index: u64) -> Result<&Coord, SpaceError> {
        self.forward
            .get(index as usize)
            .ok_or(SpaceError::UnmappedIndex {
                index,
                size: self.len(),
            })
    }

    /// The linear index for a coordinate tuple.
    ///
    /// # Errors
    ///
    /// Returns `SpaceError::UnmappedCoord` if the tuple is not in the
    /// mapping. Unreachable for tuples inside the mapped space, but checked
    /// on every call.
    pub fn encode(&self, coord: &[i64]) -> Result<u64, SpaceError> {
        self.reverse
            .get(coord)
            .copied()
            .ok_or_else(|| SpaceError::UnmappedCoord {
                coord: Coord::from_slice(coord),
            })
    }

    /// Iterate over `(index, coordinate)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &Coord)> {
        self.forward
            .iter()
            .enumerate()
            .map(|(i, c)| (i as u64, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_axis_varies_fastest() {
        let space = MultiDiscrete::new(&[2, 1]).unwrap();
        let mapping = DiscreteMapping::new(&space).unwrap();
        let coords: Vec<_> = mapping.iter().map(|(_, c)| c.to_vec()).collect();
        assert_eq!(
            coords,
            vec![
                vec![0, 0],
                vec![1, 0],
                vec![2, 0],
                vec![0, 1],
                vec![1, 1],
                vec![2, 1],
            ]
        );
    }

    #[test]
    fn ceiling_is_enforced() {
        let space = MultiDiscrete::new(&[99, 99]).unwrap();
        let err = DiscreteMapping::with_limit(&space, 100).unwrap_err();
        assert_eq!(
            err,
            SpaceError::MappingTooLarge {
                size: 10_000,
                limit: 100
            }
        );
    }

    #[test]
    fn out_of_range_lookups_are_errors() {
        let space = MultiDiscrete::new(&[1, 1]).unwrap();
        let mapping = DiscreteMapping::new(&space).unwrap();
        assert_eq!(
            mapping.decode(4),
            Err(SpaceError::UnmappedIndex { index: 4, size: 4 })
        );
        assert!(matches!(
            mapping.encode(&[2, 0]),
            Err(SpaceError::UnmappedCoord { .. })
        ));
    }
}
