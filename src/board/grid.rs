//! The hexagonal playing area laid out on a square grid.
//!
//! A hexagon of radius 4 fits a 9×9 grid when one diagonal is sheared away:
//! cell `(r, c)` belongs to the hexagon iff `|r - c| <= 4`. The outermost ring
//! of the hexagon is wall, the middle cell is the center piece, and everything
//! else inside is open for play.
//!
//! ```text
//! xxxxx____
//! xoooox___
//! xooooox__
//! xoooooox_
//! xooo0ooox
//! _xoooooox
//! __xooooox
//! ___xoooox
//! ____xxxxx
//! ```

use super::coord::Coord;
use crate::tiles::{Piece, RenderTag};

/// Hexagon radius, in cells from the center.
pub const RADIUS: i8 = 4;

/// Side of the square grid holding the hexagon.
pub const GRID_SIZE: i8 = 2 * RADIUS + 1;

/// Where the center piece sits.
pub const CENTER: Coord = Coord::new(RADIUS, RADIUS);

/// Fixed-size storage of one piece per cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Piece>,
}

impl Grid {
    /// Lay out the hexagon: center, open interior, border ring, placeholders.
    #[must_use]
    pub fn hexagon() -> Self {
        let mut cells = Vec::with_capacity((GRID_SIZE as usize).pow(2));
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                cells.push(Self::initial_piece(Coord::new(row, col)));
            }
        }
        Self { cells }
    }

    fn initial_piece(at: Coord) -> Piece {
        let last = GRID_SIZE - 1;
        let skew = (at.row - at.col).abs();

        if at == CENTER {
            Piece::Center
        } else if skew > RADIUS {
            Piece::Placeholder
        } else if skew == RADIUS || at.row == 0 || at.col == 0 || at.row == last || at.col == last {
            Piece::Border
        } else {
            Piece::Empty
        }
    }

    fn index(at: Coord) -> Option<usize> {
        let in_range = |v: i8| (0..GRID_SIZE).contains(&v);
        if in_range(at.row) && in_range(at.col) {
            Some(at.row as usize * GRID_SIZE as usize + at.col as usize)
        } else {
            None
        }
    }

    /// The piece at `at`, or `None` off the grid.
    #[must_use]
    pub fn get(&self, at: Coord) -> Option<&Piece> {
        Self::index(at).map(|i| &self.cells[i])
    }

    /// Replace the piece at `at`. Returns the previous piece, or `None` (and
    /// changes nothing) off the grid.
    pub fn set(&mut self, at: Coord, piece: Piece) -> Option<Piece> {
        Self::index(at).map(|i| std::mem::replace(&mut self.cells[i], piece))
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Piece]> {
        self.cells.chunks(GRID_SIZE as usize)
    }

    /// Render tags for every cell, row by row.
    #[must_use]
    pub fn render_tags(&self) -> Vec<Vec<RenderTag>> {
        self.rows()
            .map(|row| row.iter().map(Piece::render_tag).collect())
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::hexagon()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for piece in row {
                write!(f, "{}", piece.render_tag().symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
