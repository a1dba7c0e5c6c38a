use serde::{Deserialize, Serialize};

use crate::blokus::prelude::*;

/// Simple board coordinate; always non-negative, bounded by the board it is used on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl std::str::FromStr for Coord {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let Some((row, col)) = s.split_once(',') else {
            return Err(anyhow!("expected a coordinate of the form row,col; received {s}"));
        };
        let [row, col] = [row, col].map(|x| x.trim().parse::<usize>());
        Ok(Coord { row: row?, col: col? })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Coord {
    /// Determines whether or not the coord is on a board of the given size.
    pub fn in_bounds(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Constructs a new coord.
    pub fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// The canonical notation of the coord.
    pub fn notate(&self) -> String {
        format!("{},{}", self.row, self.col)
    }
}

// Simple offset pair that can be used to calculate neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct OffsetCoord {
    pub rows: isize,
    pub cols: isize,
}

/// Offsets that turn a coordinate into one of its orthogonal neighbours.
pub static ORTHOGONAL_OFFSETS: [OffsetCoord; 4] = [
    OffsetCoord { rows: -1, cols: 0 },
    OffsetCoord { rows: 0, cols: -1 },
    OffsetCoord { rows: 0, cols: 1 },
    OffsetCoord { rows: 1, cols: 0 },
];

/// Offsets that turn a coordinate into one of its diagonal neighbours.
pub static DIAGONAL_OFFSETS: [OffsetCoord; 4] = [
    OffsetCoord { rows: -1, cols: -1 },
    OffsetCoord { rows: -1, cols: 1 },
    OffsetCoord { rows: 1, cols: -1 },
    OffsetCoord { rows: 1, cols: 1 },
];

impl OffsetCoord {
    /// Coerces the offset into a coordinate unchecked; only call on in-bounds offsets.
    pub fn coerce(&self) -> Coord {
        Coord {
            row: self.rows as usize,
            col: self.cols as usize,
        }
    }

    /// Converts to a board coordinate if the offset lies on a board of the given size.
    pub fn on_board(&self, size: usize) -> Option<Coord> {
        self.in_bounds_signed(size).then(|| self.coerce())
    }

    /// Determines whether or not the coord is in bounds.
    pub fn in_bounds_signed(&self, size: usize) -> bool {
        0 <= self.rows && self.rows < size as isize && 0 <= self.cols && self.cols < size as isize
    }

    /// Constructs a new offset coord.
    pub fn new(rows: isize, cols: isize) -> OffsetCoord {
        OffsetCoord { rows, cols }
    }
}

// C -> OC

impl From<Coord> for OffsetCoord {
    fn from(value: Coord) -> Self {
        OffsetCoord {
            rows: value.row as isize,
            cols: value.col as isize,
        }
    }
}

impl From<&Coord> for OffsetCoord {
    fn from(value: &Coord) -> Self {
        OffsetCoord::from(*value)
    }
}

// OC + OC

impl Add<OffsetCoord> for OffsetCoord {
    type Output = OffsetCoord;
    fn add(self, rhs: OffsetCoord) -> Self::Output {
        OffsetCoord {
            rows: self.rows + rhs.rows,
            cols: self.cols + rhs.cols,
        }
    }
}

impl Add<&OffsetCoord> for OffsetCoord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        self + *rhs
    }
}

// C + OC

impl Add<OffsetCoord> for Coord {
    type Output = OffsetCoord;
    fn add(self, rhs: OffsetCoord) -> Self::Output {
        OffsetCoord::from(self) + rhs
    }
}

impl Add<&OffsetCoord> for Coord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        OffsetCoord::from(self) + *rhs
    }
}

impl Add<&OffsetCoord> for &Coord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        OffsetCoord::from(self) + *rhs
    }
}

// C - C

impl Sub<Coord> for Coord {
    type Output = OffsetCoord;
    fn sub(self, rhs: Coord) -> Self::Output {
        OffsetCoord::from(self) - OffsetCoord::from(rhs)
    }
}

// OC - OC

impl Sub<OffsetCoord> for OffsetCoord {
    type Output = OffsetCoord;
    fn sub(self, rhs: OffsetCoord) -> Self::Output {
        OffsetCoord {
            rows: self.rows - rhs.rows,
            cols: self.cols - rhs.cols,
        }
    }
}

impl Sub<&OffsetCoord> for OffsetCoord {
    type Output = OffsetCoord;
    fn sub(self, rhs: &OffsetCoord) -> Self::Output {
        self - *rhs
    }
}
