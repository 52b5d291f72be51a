//! Error types shared by every layer of the engine.

use super::pin::Pin;
use crate::board::Coord;

/// What is wrong with a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TileDefect {
    /// No connection on the tile contains this pin.
    #[display("no connection at pin {}", _0)]
    Unconnected(Pin),

    /// A pin number outside `0..12`.
    #[display("pin {} is outside 0..12", _0)]
    PinOutOfRange(u8),

    /// The connections do not use every pin exactly once.
    #[display("connections do not pair up all twelve pins")]
    NotPartition,
}

/// Error raised by board and session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The chain already reached a border or the center.
    #[display("Game is already over")]
    GameOver,

    /// A tile was built or queried in a way its connections cannot answer.
    #[display("Invalid tile: {}", _0)]
    InvalidTile(TileDefect),

    /// A path was asked for its last item before it had any.
    #[display("Path has no items")]
    EmptyPath,

    /// The next place lies outside the grid.
    #[display("Cell {} is off the board", _0)]
    OffBoard(Coord),
}

impl std::error::Error for GameError {}

impl From<TileDefect> for GameError {
    fn from(defect: TileDefect) -> Self {
        GameError::InvalidTile(defect)
    }
}
