//! Sparse index sets.
//!
//! The wire describes subsets of a sibling array (usable exits of an
//! intersection, usable lanes of an approach) as a dense boolean array,
//! one flag per position. In memory they are held as the sorted set of
//! positions that are set. The set alone cannot recover the length of the
//! array it indexes, so encoding requires that universe to be given.

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[cfg(test)]
mod test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// The position lies outside a universe of the given length.
    OutOfBounds { index: usize, universe: usize },
}

impl Display for IndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexError::OutOfBounds { index, universe } => {
                write!(f, "index {index} is outside a universe of {universe}")
            }
        }
    }
}

impl Error for IndexError {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IndexSet(BTreeSet<usize>);

impl IndexSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The positions of `flags` which are set.
    pub fn from_dense(flags: &[bool]) -> Self {
        flags
            .iter()
            .enumerate()
            .filter_map(|(index, set)| set.then_some(index))
            .collect()
    }

    /// Expands the set into `universe` flags, unset by default.
    pub fn to_dense(&self, universe: usize) -> Result<Vec<bool>, IndexError> {
        self.check_bounds(universe)?;

        let mut flags = vec![false; universe];
        self.0.iter().for_each(|index| flags[*index] = true);
        Ok(flags)
    }

    /// Fails on the first member at or beyond `universe`.
    pub fn check_bounds(&self, universe: usize) -> Result<(), IndexError> {
        match self.0.last() {
            Some(&index) if index >= universe => Err(IndexError::OutOfBounds { index, universe }),
            _ => Ok(()),
        }
    }

    pub fn insert(&mut self, index: usize) -> bool {
        self.0.insert(index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Positions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<usize> for IndexSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        IndexSet(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[usize; N]> for IndexSet {
    fn from(value: [usize; N]) -> Self {
        value.into_iter().collect()
    }
}
