//! Tiles, the pieces that hold them, and sources of new tiles.
//!
//! - `Tile`: connection graph over twelve pins, with rotation and traversal
//! - `Piece`: what a grid cell holds and how a chain reacts to it
//! - `PieceSource`: supplier of fresh tiles (random or scripted)

pub mod piece;
pub mod source;
pub mod tile;

pub use piece::{Piece, Reach, RenderTag};
pub use source::{PieceSource, RandomPieces, ScriptedPieces};
pub use tile::{Connection, Tile};
