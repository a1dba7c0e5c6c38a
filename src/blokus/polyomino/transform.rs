use crate::blokus::prelude::*;

/// An enum that represents the 8 symmetries of the square grid.
///
/// Identity refers to the null transformation, while Reflect refers to reflecting
/// the piece in a mirror parallel to the x-axis (i.e. a vertical flip).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Transform {
    Identity,
    Rot90,
    Rot180,
    Rot270,
    Reflect,
    ReflRot90,
    ReflRot180,
    ReflRot270,
}

impl Add for Transform {
    type Output = Transform;
    fn add(self, rhs: Self) -> Self::Output {
        match rhs {
            Transform::Identity   => self,
            Transform::Rot90      => self.rotate(),
            Transform::Rot180     => self.rotate().rotate(),
            Transform::Rot270     => self.rotate().rotate().rotate(),
            Transform::Reflect    => self.reflect(),
            Transform::ReflRot90  => self.reflect().rotate(),
            Transform::ReflRot180 => self.reflect().rotate().rotate(),
            Transform::ReflRot270 => self.reflect().rotate().rotate().rotate(),
        }
    }
}

impl Transform {
    /// Gets all transforms in canonical order: the four rotations, then the four reflected rotations.
    pub fn all() -> [Transform; 8] {
        [
            Transform::Identity,
            Transform::Rot90,
            Transform::Rot180,
            Transform::Rot270,
            Transform::Reflect,
            Transform::ReflRot90,
            Transform::ReflRot180,
            Transform::ReflRot270,
        ]
    }

    /// Applies a transformation to a set of offsets and normalizes the result, so that
    /// the minimum row and column are both zero and the points are sorted.
    pub fn apply(&self, points: &[OffsetCoord]) -> Vec<OffsetCoord> {
        normalize(points.iter().map(|p| self.apply_one(p)))
    }

    /// Applies a transformation to an offset point.
    pub fn apply_one(&self, offset: &OffsetCoord) -> OffsetCoord {
        let OffsetCoord { rows: r, cols: c } = *offset;
        match self {
            Transform::Identity   => OffsetCoord::new(r, c),
            Transform::Rot90      => OffsetCoord::new(c, -r),
            Transform::Rot180     => OffsetCoord::new(-r, -c),
            Transform::Rot270     => OffsetCoord::new(-c, r),
            Transform::Reflect    => OffsetCoord::new(-r, c),
            Transform::ReflRot90  => OffsetCoord::new(c, r),
            Transform::ReflRot180 => OffsetCoord::new(r, -c),
            Transform::ReflRot270 => OffsetCoord::new(-c, -r),
        }
    }

    /// Returns the transform given by reflecting this transform.
    pub fn reflect(&self) -> Transform {
        match self {
            Transform::Identity   => Transform::Reflect,
            Transform::Rot90      => Transform::ReflRot270,
            Transform::Rot180     => Transform::ReflRot180,
            Transform::Rot270     => Transform::ReflRot90,
            Transform::Reflect    => Transform::Identity,
            Transform::ReflRot90  => Transform::Rot270,
            Transform::ReflRot180 => Transform::Rot180,
            Transform::ReflRot270 => Transform::Rot90,
        }
    }

    /// Returns the transform given by rotating this transform by 90 degrees.
    pub fn rotate(&self) -> Transform {
        match self {
            Transform::Identity   => Transform::Rot90,
            Transform::Rot90      => Transform::Rot180,
            Transform::Rot180     => Transform::Rot270,
            Transform::Rot270     => Transform::Identity,
            Transform::Reflect    => Transform::ReflRot90,
            Transform::ReflRot90  => Transform::ReflRot180,
            Transform::ReflRot180 => Transform::ReflRot270,
            Transform::ReflRot270 => Transform::Reflect,
        }
    }
}

/// Shifts a point cloud so its bounding box starts at (0, 0), and sorts it.
pub fn normalize(points: impl Iterator<Item = OffsetCoord>) -> Vec<OffsetCoord> {
    let points = points.collect::<Vec<_>>();
    let min_rows = points.iter().map(|p| p.rows).min().unwrap_or(0);
    let min_cols = points.iter().map(|p| p.cols).min().unwrap_or(0);
    let origin = OffsetCoord::new(min_rows, min_cols);
    let mut shifted = points.into_iter().map(|p| p - origin).collect::<Vec<_>>();
    shifted.sort();
    shifted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_rotations_are_the_identity() {
        let p = OffsetCoord::new(2, -1);
        let spun = (0..4).fold(p, |acc, _| Transform::Rot90.apply_one(&acc));
        assert_eq!(spun, p);
    }

    #[test]
    fn composition_agrees_with_pointwise_application() {
        let p = OffsetCoord::new(1, 3);
        for lhs in Transform::all() {
            for rhs in Transform::all() {
                let composed = lhs + rhs;
                let stepwise = rhs.apply_one(&lhs.apply_one(&p));
                assert_eq!(composed.apply_one(&p), stepwise, "{lhs:?} then {rhs:?}");
            }
        }
    }

    #[test]
    fn normalization_anchors_at_origin() {
        let pts = normalize([OffsetCoord::new(-2, 5), OffsetCoord::new(-1, 4)].into_iter());
        assert_eq!(pts, vec![OffsetCoord::new(0, 1), OffsetCoord::new(1, 0)]);
    }
}
