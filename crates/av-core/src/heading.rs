//! Compass headings and the fixed rotation tables.
//!
//! Rotation is table-driven rather than arithmetic: the two 4-cycles below
//! are the whole specification of turning, and the unit tests assert they
//! are mutual inverses.

use std::fmt;
use std::str::FromStr;

use crate::AvError;

/// The compass direction a car currently faces.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    North,
    South,
    East,
    West,
}

/// Left-turn successors, indexed by discriminant: N→W, S→E, E→N, W→S.
const LEFT: [Heading; 4] = [Heading::West, Heading::East, Heading::North, Heading::South];

/// Right-turn successors, the inverse cycle: N→E, S→W, E→S, W→N.
const RIGHT: [Heading; 4] = [Heading::East, Heading::West, Heading::South, Heading::North];

impl Heading {
    /// All headings, in discriminant order.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::South, Heading::East, Heading::West];

    /// The heading after a 90° counter-clockwise turn.
    #[inline]
    pub fn left(self) -> Heading {
        LEFT[self as usize]
    }

    /// The heading after a 90° clockwise turn.
    #[inline]
    pub fn right(self) -> Heading {
        RIGHT[self as usize]
    }

    /// Unit offset `(dx, dy)` of one forward step.  North is `+y`, East `+x`.
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::South => (0, -1),
            Heading::East => (1, 0),
            Heading::West => (-1, 0),
        }
    }

    /// Canonical single-letter label.
    pub fn as_str(self) -> &'static str {
        match self {
            Heading::North => "N",
            Heading::South => "S",
            Heading::East => "E",
            Heading::West => "W",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Heading {
    type Err = AvError;

    /// Parses the single letters `N`/`S`/`E`/`W`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "N" | "n" => Ok(Heading::North),
            "S" | "s" => Ok(Heading::South),
            "E" | "e" => Ok(Heading::East),
            "W" | "w" => Ok(Heading::West),
            other => Err(AvError::Parse(format!(
                "invalid heading {other:?}: expected one of N, S, E, W"
            ))),
        }
    }
}
