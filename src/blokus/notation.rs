use std::sync::LazyLock;

use regex::Regex;

use crate::blokus::prelude::*;

static MOVE_PATTERN: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(r"^(?<shape>[A-Za-z][0-9]?)/(?<orientation>[0-9]+)@(?<row>-?[0-9]+),(?<col>-?[0-9]+)$")
});

/// A move as written on the wire: a placement like `L5/3@4,5`, or `pass`.
/// The orientation index is taken as written; it is checked when the move is played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveString {
    pub repr: String,
    pub placement: Option<Placement>,
}

impl MoveString {
    /// Whether the move is a pass.
    pub fn is_pass(&self) -> bool {
        self.placement.is_none()
    }
}

impl std::str::FromStr for MoveString {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("pass") {
            return Ok(MoveString { repr: "pass".to_owned(), placement: None });
        }

        let pattern = MOVE_PATTERN.as_ref().map_err(Clone::clone)?;
        let Some(matches) = pattern.captures(s) else {
            return Err(anyhow!("could not parse movestring {s}"));
        };

        let shape = matches["shape"].parse::<Shape>()?;
        let orientation = matches["orientation"].parse::<usize>()?;
        let row = matches["row"].parse::<isize>()?;
        let col = matches["col"].parse::<isize>()?;

        let placement = Placement::new(shape, orientation, row, col);
        Ok(MoveString { repr: placement.notate(), placement: Some(placement) })
    }
}

impl std::fmt::Display for MoveString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.repr)
    }
}

impl From<Placement> for MoveString {
    fn from(placement: Placement) -> Self {
        MoveString { repr: placement.notate(), placement: Some(placement) }
    }
}
