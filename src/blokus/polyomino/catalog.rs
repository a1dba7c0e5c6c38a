use std::sync::OnceLock;

use itertools::Itertools;

use crate::blokus::prelude::*;

static CATALOG: OnceLock<PieceCatalog> = OnceLock::new();

/// One distinct orientation of a shape: normalized, sorted offsets plus the transform that produced them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Orientation {
    pub shape: Shape,
    pub index: usize,
    pub transform: Transform,
    points: Vec<OffsetCoord>,
}

impl Orientation {
    /// The offsets of this orientation; minimum row and column are zero.
    pub fn points(&self) -> &[OffsetCoord] {
        &self.points
    }

    /// The (height, width) of the bounding box.
    pub fn bounding_box(&self) -> (usize, usize) {
        let height = self.points.iter().map(|p| p.rows).max().unwrap_or(-1) + 1;
        let width = self.points.iter().map(|p| p.cols).max().unwrap_or(-1) + 1;
        (height as usize, width as usize)
    }

    /// Renders the orientation as rows of `#` and `.`.
    pub fn pretty(&self) -> String {
        let (height, width) = self.bounding_box();
        (0..height as isize).map(|r| {
            (0..width as isize).map(|c| {
                if self.points.contains(&OffsetCoord::new(r, c)) { '#' } else { '.' }
            }).collect::<String>()
        }).join("\n")
    }
}

/// Precomputed orientations for all 21 shapes. Read-only and shared by every game in the process.
#[derive(Clone, Debug)]
pub struct PieceCatalog {
    orientations: [Vec<Orientation>; NUM_SHAPES],
}

impl PieceCatalog {
    /// Gets the process-wide catalog, building it on first use.
    pub fn get() -> &'static PieceCatalog {
        CATALOG.get_or_init(PieceCatalog::build)
    }

    /// Builds the catalog by running every transform over every template, keeping
    /// the first transform that yields each distinct point set.
    fn build() -> PieceCatalog {
        let orientations = Shape::all().map(|shape| {
            let mut seen: Vec<Vec<OffsetCoord>> = vec![];
            let mut list = vec![];
            for transform in Transform::all() {
                let points = transform.apply(shape.template());
                if seen.contains(&points) {
                    continue;
                }
                seen.push(points.clone());
                list.push(Orientation { shape, index: list.len(), transform, points });
            }
            list
        });
        PieceCatalog { orientations }
    }

    /// Gets every distinct orientation of a shape in canonical order.
    pub fn orientations(&self, shape: Shape) -> &[Orientation] {
        &self.orientations[shape as usize]
    }

    /// Gets one orientation of a shape, if the index is in range.
    pub fn orientation(&self, shape: Shape, index: usize) -> Option<&Orientation> {
        self.orientations(shape).get(index)
    }

    /// How many distinct orientations a shape has (1, 2, 4 or 8).
    pub fn num_orientations(&self, shape: Shape) -> usize {
        self.orientations(shape).len()
    }

    /// Every (shape, orientation) pair in the catalog.
    pub fn iter(&self) -> impl Iterator<Item = &Orientation> {
        self.orientations.iter().flatten()
    }
}
