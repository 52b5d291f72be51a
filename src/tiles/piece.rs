//! What occupies a grid cell, and how a chain treats it.

use serde::{Deserialize, Serialize};

use super::tile::Tile;

/// Contents of one grid cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Piece {
    /// Outside the playing area. Never reached by a chain.
    Placeholder,
    /// Playable cell still waiting for a tile.
    Empty,
    /// Wall around the playing area.
    Border,
    /// The fixed starting piece.
    Center,
    /// A tile placed by the player.
    Normal(Tile),
}

/// How a chain reacts on reaching a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reach<'a> {
    /// The chain ends for good and the game is over.
    Terminal,
    /// The chain waits here for a future tile.
    Halt,
    /// The chain crosses this tile.
    Traverse(&'a Tile),
}

/// Symbolic per-cell value handed to renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderTag {
    Center,
    Border,
    Empty,
    Placeholder,
    Occupied,
}

impl RenderTag {
    /// Single-character form used by the textual board dump.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            RenderTag::Center => '0',
            RenderTag::Border => 'x',
            RenderTag::Empty => 'o',
            RenderTag::Placeholder => '_',
            RenderTag::Occupied => '@',
        }
    }
}

impl Piece {
    /// Decide what a chain does when it reaches this piece.
    #[must_use]
    pub fn reach(&self) -> Reach<'_> {
        match self {
            Piece::Border | Piece::Center => Reach::Terminal,
            Piece::Placeholder | Piece::Empty => Reach::Halt,
            Piece::Normal(tile) => Reach::Traverse(tile),
        }
    }

    #[must_use]
    pub const fn render_tag(&self) -> RenderTag {
        match self {
            Piece::Placeholder => RenderTag::Placeholder,
            Piece::Empty => RenderTag::Empty,
            Piece::Border => RenderTag::Border,
            Piece::Center => RenderTag::Center,
            Piece::Normal(_) => RenderTag::Occupied,
        }
    }

    /// Check if a player tile sits here.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Piece::Normal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile() -> Tile {
        Tile::from_pairs(&[(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11)]).unwrap()
    }

    #[test]
    fn test_reach() {
        assert_eq!(Piece::Border.reach(), Reach::Terminal);
        assert_eq!(Piece::Center.reach(), Reach::Terminal);
        assert_eq!(Piece::Empty.reach(), Reach::Halt);
        assert_eq!(Piece::Placeholder.reach(), Reach::Halt);

        let normal = Piece::Normal(tile());
        assert_eq!(normal.reach(), Reach::Traverse(&tile()));
    }

    #[test]
    fn test_render_tags() {
        let symbols: String = [
            Piece::Center,
            Piece::Border,
            Piece::Empty,
            Piece::Placeholder,
            Piece::Normal(tile()),
        ]
        .iter()
        .map(|p| p.render_tag().symbol())
        .collect();
        assert_eq!(symbols, "0xo_@");
    }

    #[test]
    fn test_occupied() {
        assert!(Piece::Normal(tile()).is_occupied());
        assert!(!Piece::Empty.is_occupied());
        assert!(!Piece::Center.is_occupied());
    }
}
