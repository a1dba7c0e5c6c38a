use crate::blokus::prelude::*;

type SubSet = u32;
const SUBSET_SIZE: usize = MAX_BOARD_SIZE;
const NUM_SUBSETS: usize = MAX_BOARD_SIZE;

/// A set of board coordinates, one bit-row per board row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CoordSet([SubSet; NUM_SUBSETS]);

impl CoordSet {
    #[inline]
    fn _index(coord: &Coord) -> (usize, usize) {
        (coord.row, coord.col)
    }
}

impl Default for CoordSet {
    fn default() -> Self {
        CoordSet([SubSet::default(); NUM_SUBSETS])
    }
}

impl SetOps<Coord> for CoordSet {
    fn contains(&self, value: Coord) -> bool {
        let (ia, ib) = CoordSet::_index(&value);
        ia < NUM_SUBSETS && ib < SUBSET_SIZE && (self.0[ia] >> ib) & 1 == 1
    }

    fn len(&self) -> usize {
        self.0.iter().map(|sub| sub.count_ones() as usize).sum()
    }

    fn is_empty(&self) -> bool {
        self.0.iter().all(|sub| *sub == 0)
    }

    fn iter(&self) -> impl Iterator<Item = Coord> {
        CoordSetIterator::new(self.0)
    }

    fn insert(&mut self, value: Coord) -> &mut Self {
        let (ia, ib) = CoordSet::_index(&value);
        debug_assert!(ia < NUM_SUBSETS && ib < SUBSET_SIZE, "coord {value:?} does not fit a CoordSet");
        self.0[ia] |= (1 as SubSet) << ib;
        self
    }

    fn remove(&mut self, value: Coord) -> &mut Self {
        let (ia, ib) = CoordSet::_index(&value);
        if ia < NUM_SUBSETS && ib < SUBSET_SIZE {
            self.0[ia] &= !((1 as SubSet) << ib);
        }
        self
    }

    fn intersect(&self, other: &Self) -> Self {
        let mut s = *self;
        s.intersect_inplace(other);
        s
    }

    fn intersect_inplace(&mut self, other: &Self) -> &mut Self {
        self.0.iter_mut().zip(other.0.iter()).for_each(|(l, r)| {
            *l &= r;
        });
        self
    }

    fn intersects(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).any(|(l, r)| l & r != 0)
    }

    fn union(&self, other: &Self) -> Self {
        let mut s = *self;
        s.union_inplace(other);
        s
    }

    fn union_inplace(&mut self, other: &Self) -> &mut Self {
        self.0.iter_mut().zip(other.0.iter()).for_each(|(l, r)| {
            *l |= r;
        });
        self
    }

    fn difference(&self, other: &Self) -> Self {
        let mut s = *self;
        s.difference_inplace(other);
        s
    }

    fn difference_inplace(&mut self, other: &Self) -> &mut Self {
        self.0.iter_mut().zip(other.0.iter()).for_each(|(l, r)| {
            *l &= !r;
        });
        self
    }
}

impl<'a> FromIterator<&'a Coord> for CoordSet {
    fn from_iter<T: IntoIterator<Item = &'a Coord>>(iter: T) -> Self {
        let mut s = CoordSet::default();
        iter.into_iter().for_each(|i| {
            s.insert(*i);
        });
        s
    }
}

impl FromIterator<Coord> for CoordSet {
    fn from_iter<T: IntoIterator<Item = Coord>>(iter: T) -> Self {
        let mut s = CoordSet::default();
        iter.into_iter().for_each(|i| {
            s.insert(i);
        });
        s
    }
}

/// Walks the set row by row, peeling off the lowest set bit each step.
pub struct CoordSetIterator {
    data: [SubSet; NUM_SUBSETS],
    current_subset: usize,
}

impl CoordSetIterator {
    pub fn new(data: [SubSet; NUM_SUBSETS]) -> CoordSetIterator {
        CoordSetIterator { data, current_subset: 0 }
    }
}

impl Iterator for CoordSetIterator {
    type Item = Coord;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_subset >= NUM_SUBSETS {
                return None;
            }

            let subject = self.data[self.current_subset];
            if subject == 0 {
                self.current_subset += 1;
                continue;
            }

            let tz = subject.trailing_zeros() as usize;
            self.data[self.current_subset] &= subject - 1; // clear the lowest set bit
            return Some(Coord::new(self.current_subset, tz));
        }
    }
}

impl IntoIterator for CoordSet {
    type IntoIter = CoordSetIterator;
    type Item = Coord;
    fn into_iter(self) -> Self::IntoIter {
        CoordSetIterator::new(self.0)
    }
}

impl IntoIterator for &CoordSet {
    type IntoIter = CoordSetIterator;
    type Item = Coord;
    fn into_iter(self) -> Self::IntoIter {
        CoordSetIterator::new(self.0)
    }
}
