//! Game sessions: the tiles in hand, scoring, and the board they play on.

pub mod game;
pub mod snapshot;

pub use game::{points_for, Rotation, Session};
pub use snapshot::SessionSnapshot;
