//! Grid geometry: cell positions and the bounded field.

use std::fmt;

use crate::heading::Heading;
use crate::{AvError, AvResult};

// ── Position ──────────────────────────────────────────────────────────────────

/// A cell on the simulation grid.
///
/// Coordinates are signed so that a forward target one step beyond the field
/// edge is representable; [`Field::contains`] decides whether such a cell is
/// actually on the field.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one step from `self` in direction `heading`.
    ///
    /// Pure arithmetic; the result may lie outside any field.
    #[inline]
    pub fn step(self, heading: Heading) -> Position {
        let (dx, dy) = heading.offset();
        Position { x: self.x + dx, y: self.y + dy }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Field ─────────────────────────────────────────────────────────────────────

/// The rectangular simulation field: cells `(x, y)` with `0 ≤ x < width` and
/// `0 ≤ y < height`.
///
/// Immutable after construction; both dimensions are guaranteed positive.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    width: i32,
    height: i32,
}

impl Field {
    /// Create a field of `width` by `height` cells.
    ///
    /// # Errors
    ///
    /// Returns [`AvError::Config`] if either dimension is zero or negative.
    pub fn new(width: i32, height: i32) -> AvResult<Field> {
        if width <= 0 || height <= 0 {
            return Err(AvError::Config(format!(
                "field dimensions must be positive, got {width} x {height}"
            )));
        }
        Ok(Field { width, height })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// `true` iff `p` lies on the field.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}
