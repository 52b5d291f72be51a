//! Human-readable session state for diagnostics.

use serde::{Deserialize, Serialize};

use crate::board::{Coord, Path};
use crate::tiles::Tile;

/// Point-in-time copy of everything a driver may want to print.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub game_over: bool,
    pub score: u64,
    pub upcoming: Tile,
    pub pocket: Tile,
    pub next_place: Coord,
    pub path: Path,
}

impl std::fmt::Display for SessionSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Is over: {}", self.game_over)?;
        writeln!(f, "Score: {}", self.score)?;
        writeln!(f, "Next tile: {}", self.upcoming)?;
        writeln!(f, "Pocket: {}", self.pocket)?;
        write!(f, "Path: {}", self.path)
    }
}
