use crate::blokus::prelude::*;

type SubSet = u32;
const FULL_MASK: SubSet = ((1 as SubSet) << NUM_SHAPES) - 1;

/// An inventory of shapes; each of the 21 shapes is either present or not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ShapeSet(SubSet);

impl ShapeSet {
    /// The complete set of 21 shapes every player starts with.
    pub fn full() -> ShapeSet {
        ShapeSet(FULL_MASK)
    }

    /// The total number of cells across every shape in the set.
    pub fn squares(&self) -> usize {
        self.iter().map(|shape| shape.size()).sum()
    }
}

impl SetOps<Shape> for ShapeSet {
    fn contains(&self, value: Shape) -> bool {
        (self.0 >> value as u8) & 1 == 1
    }

    fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    fn iter(&self) -> impl Iterator<Item = Shape> {
        let bits = self.0;
        Shape::all().into_iter().filter(move |shape| (bits >> *shape as u8) & 1 == 1)
    }

    fn insert(&mut self, value: Shape) -> &mut Self {
        self.0 |= (1 as SubSet) << value as u8;
        self
    }

    fn remove(&mut self, value: Shape) -> &mut Self {
        self.0 &= !((1 as SubSet) << value as u8);
        self
    }

    fn intersect(&self, other: &Self) -> Self {
        ShapeSet(self.0 & other.0)
    }

    fn intersect_inplace(&mut self, other: &Self) -> &mut Self {
        self.0 &= other.0;
        self
    }

    fn intersects(&self, other: &Self) -> bool {
        self.0 & other.0 != 0
    }

    fn union(&self, other: &Self) -> Self {
        ShapeSet(self.0 | other.0)
    }

    fn union_inplace(&mut self, other: &Self) -> &mut Self {
        self.0 |= other.0;
        self
    }

    fn difference(&self, other: &Self) -> Self {
        ShapeSet(self.0 & !other.0)
    }

    fn difference_inplace(&mut self, other: &Self) -> &mut Self {
        self.0 &= !other.0;
        self
    }
}

impl FromIterator<Shape> for ShapeSet {
    fn from_iter<T: IntoIterator<Item = Shape>>(iter: T) -> Self {
        let mut s = ShapeSet::default();
        iter.into_iter().for_each(|shape| {
            s.insert(shape);
        });
        s
    }
}
