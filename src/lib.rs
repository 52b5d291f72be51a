//! # entanglement
//!
//! Connection-chain engine for a hexagonal tile-laying puzzle.
//!
//! The player places tiles, each a pairing of twelve edge pins into six
//! connections, next to the end of a growing chain. A placement can set off a
//! cascade: the chain crosses the new tile, then any tiles already on the
//! board that it runs into, until it reaches an empty cell (and waits), or a
//! border or the center (and the game ends).
//!
//! ## Design Principles
//!
//! 1. **One chain walk**: scoring dry runs and committed placements share a
//!    single propagation loop over a [`ChainStore`](board::ChainStore).
//!
//! 2. **Closed piece taxonomy**: what a cell holds is a [`Piece`] enum and
//!    its effect on a chain is an exhaustive [`Reach`] match.
//!
//! 3. **Injected randomness**: sessions pull tiles from a [`PieceSource`];
//!    [`RandomPieces`] is seeded, [`ScriptedPieces`] is fully scripted.
//!
//! ## Modules
//!
//! - `core`: pins, directions, errors, RNG, configuration
//! - `tiles`: tiles, pieces, render tags, piece sources
//! - `board`: grid, path, propagation, board state
//! - `session`: pocket and upcoming tiles, scoring, snapshots
//!
//! ## Example
//!
//! ```
//! use entanglement::{Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::new().with_seed(42));
//! while !session.is_game_over() {
//!     session.place_tile().unwrap();
//! }
//! assert!(session.score() > 0);
//! ```

pub mod board;
pub mod core;
pub mod session;
pub mod tiles;

// Re-export commonly used types
pub use crate::core::{Direction, GameError, GameRng, Pin, SessionConfig, TileDefect};

pub use crate::tiles::{Piece, PieceSource, RandomPieces, Reach, RenderTag, ScriptedPieces, Tile};

pub use crate::board::{Board, Coord, Grid, Path, PathItem, Propagation};

pub use crate::session::{points_for, Rotation, Session, SessionSnapshot};
