mod coordset;
mod shapeset;

pub use coordset::CoordSet;
pub use shapeset::ShapeSet;

/// Fixed-capacity bitset operations shared by the board and inventory sets.
pub trait SetOps<T: Copy> {
    fn contains(&self, value: T) -> bool;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> impl Iterator<Item = T>;

    fn insert(&mut self, value: T) -> &mut Self;
    fn remove(&mut self, value: T) -> &mut Self;

    fn intersect(&self, other: &Self) -> Self;
    fn intersect_inplace(&mut self, other: &Self) -> &mut Self;
    fn intersects(&self, other: &Self) -> bool;

    fn union(&self, other: &Self) -> Self;
    fn union_inplace(&mut self, other: &Self) -> &mut Self;

    fn difference(&self, other: &Self) -> Self;
    fn difference_inplace(&mut self, other: &Self) -> &mut Self;
}
