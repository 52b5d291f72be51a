//! Grid coordinates.

use serde::{Deserialize, Serialize};

use crate::core::Direction;

/// A cell on the 9×9 grid, by row and column.
///
/// Signed so that stepping off the edge yields a coordinate the grid simply
/// does not contain, rather than wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Coord {
        let (dr, dc) = direction.offset();
        Coord::new(self.row + dr, self.col + dc)
    }
}

impl From<(i8, i8)> for Coord {
    fn from((row, col): (i8, i8)) -> Self {
        Coord::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}
