pub mod catalog;
pub mod transform;

use serde::{Deserialize, Serialize};

use super::prelude::*;

pub use catalog::{Orientation, PieceCatalog};
pub use transform::Transform;

/// The 21 polyomino shapes each player owns one copy of.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Shape {
    I1 = 0,
    I2 = 1,
    I3 = 2,
    L3 = 3,
    I4 = 4,
    L4 = 5,
    T4 = 6,
    O4 = 7,
    S4 = 8,
    F = 9,
    I5 = 10,
    L5 = 11,
    N = 12,
    P = 13,
    T5 = 14,
    U = 15,
    V = 16,
    W = 17,
    X = 18,
    Y = 19,
    Z = 20,
}

impl Shape {
    /// Gets the shapes in canonical order, smallest first.
    pub fn all() -> [Shape; NUM_SHAPES] {
        [
            Shape::I1, Shape::I2, Shape::I3, Shape::L3, Shape::I4, Shape::L4, Shape::T4,
            Shape::O4, Shape::S4, Shape::F, Shape::I5, Shape::L5, Shape::N, Shape::P,
            Shape::T5, Shape::U, Shape::V, Shape::W, Shape::X, Shape::Y, Shape::Z,
        ]
    }

    /// The number of cells in the shape.
    pub fn size(&self) -> usize {
        self.template().len()
    }

    /// Whether this is the single-cell piece, which earns the closing bonus.
    pub fn is_monomino(&self) -> bool {
        *self == Shape::I1
    }

    /// The canonical notation for the shape.
    pub fn notate(&self) -> String {
        format!("{self:?}")
    }

    /// Gets the base shape as a set of offsets from the top-left of its bounding box.
    pub fn template(&self) -> &'static [OffsetCoord] {
        TEMPLATES[*self as usize]
    }
}

const fn oc(rows: isize, cols: isize) -> OffsetCoord {
    OffsetCoord { rows, cols }
}

/// Base shapes, indexed by `Shape` discriminant.
static TEMPLATES: [&[OffsetCoord]; NUM_SHAPES] = [
    &[oc(0, 0)],                                         // I1
    &[oc(0, 0), oc(0, 1)],                               // I2
    &[oc(0, 0), oc(0, 1), oc(0, 2)],                     // I3
    &[oc(0, 0), oc(0, 1), oc(1, 0)],                     // L3
    &[oc(0, 0), oc(0, 1), oc(0, 2), oc(0, 3)],           // I4
    &[oc(0, 0), oc(1, 0), oc(2, 0), oc(2, 1)],           // L4
    &[oc(0, 1), oc(1, 0), oc(1, 1), oc(1, 2)],           // T4
    &[oc(0, 0), oc(0, 1), oc(1, 0), oc(1, 1)],           // O4
    &[oc(0, 0), oc(0, 1), oc(1, 1), oc(1, 2)],           // S4
    &[oc(0, 1), oc(0, 2), oc(1, 0), oc(1, 1), oc(2, 1)], // F
    &[oc(0, 0), oc(0, 1), oc(0, 2), oc(0, 3), oc(0, 4)], // I5
    &[oc(0, 0), oc(1, 0), oc(2, 0), oc(3, 0), oc(3, 1)], // L5
    &[oc(0, 0), oc(1, 0), oc(1, 1), oc(2, 1), oc(3, 1)], // N
    &[oc(0, 0), oc(0, 1), oc(1, 0), oc(1, 1), oc(2, 0)], // P
    &[oc(0, 0), oc(0, 1), oc(0, 2), oc(1, 1), oc(2, 1)], // T5
    &[oc(0, 0), oc(0, 2), oc(1, 0), oc(1, 1), oc(1, 2)], // U
    &[oc(0, 0), oc(1, 0), oc(2, 0), oc(2, 1), oc(2, 2)], // V
    &[oc(0, 0), oc(1, 0), oc(1, 1), oc(2, 1), oc(2, 2)], // W
    &[oc(0, 1), oc(1, 0), oc(1, 1), oc(1, 2), oc(2, 1)], // X
    &[oc(0, 1), oc(1, 0), oc(1, 1), oc(2, 1), oc(3, 1)], // Y
    &[oc(0, 0), oc(0, 1), oc(1, 1), oc(2, 1), oc(2, 2)], // Z
];

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::str::FromStr for Shape {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Shape::all()
            .into_iter()
            .find(|shape| shape.notate() == upper)
            .ok_or_else(|| anyhow!("invalid notation {s} for Shape"))
    }
}

impl TryFrom<String> for Shape {
    type Error = Error;
    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Shape> for String {
    fn from(value: Shape) -> Self {
        value.notate()
    }
}

/// A concrete move: one orientation of a shape, translated so its offsets start at `anchor`.
///
/// The anchor is signed because move generation lines a piece up against a contact
/// cell, which can put the top-left of the bounding box off the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Placement {
    pub shape: Shape,
    pub orientation: usize,
    pub anchor: OffsetCoord,
}

impl Placement {
    /// Constructs a placement; the orientation index is not validated here.
    pub fn new(shape: Shape, orientation: usize, row: isize, col: isize) -> Placement {
        Placement { shape, orientation, anchor: OffsetCoord::new(row, col) }
    }

    /// Looks up the orientation in the catalog, if the index names one.
    pub fn try_orientation(&self) -> Option<&'static Orientation> {
        PieceCatalog::get().orientation(self.shape, self.orientation)
    }

    /// Gets the absolute (possibly off-board) cells covered by this placement.
    ///
    /// Panics on an orientation index the catalog does not know; check with
    /// `try_orientation` first when the placement came from outside the engine.
    pub fn cells(&self) -> impl Iterator<Item = OffsetCoord> + 'static {
        let anchor = self.anchor;
        PieceCatalog::get()
            .orientations(self.shape)[self.orientation]
            .points()
            .iter()
            .map(move |p| anchor + p)
    }

    /// The canonical notation for the placement: `shape/orientation@row,col`.
    pub fn notate(&self) -> String {
        format!("{}/{}@{},{}", self.shape.notate(), self.orientation, self.anchor.rows, self.anchor.cols)
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_add_up() {
        assert_eq!(Shape::all().iter().map(|s| s.size()).sum::<usize>(), TOTAL_SQUARES);
        assert_eq!(Shape::all().iter().filter(|s| s.size() == 5).count(), 12);
        assert!(Shape::I1.is_monomino());
    }

    #[test]
    fn discriminants_follow_canonical_order() {
        for (i, shape) in Shape::all().into_iter().enumerate() {
            assert_eq!(shape as usize, i);
        }
    }

    #[test]
    fn parses_shape_notation() {
        assert_eq!("t5".parse::<Shape>().unwrap(), Shape::T5);
        assert_eq!("X".parse::<Shape>().unwrap(), Shape::X);
        assert!("Q7".parse::<Shape>().is_err());
    }

    #[test]
    fn placements_translate_offsets() {
        let cells = Placement::new(Shape::I2, 0, -1, 3).cells().collect::<Vec<_>>();
        assert_eq!(cells, vec![OffsetCoord::new(-1, 3), OffsetCoord::new(-1, 4)]);
        assert!(Placement::new(Shape::I2, 2, 0, 0).try_orientation().is_none());
    }
}
