//! The board and the chain that grows across it.
//!
//! - `Grid`: the hexagon of pieces on a 9×9 grid
//! - `Path`: append-only trace of crossed cells
//! - `propagation`: the one chain walk behind both dry runs and placements
//! - `Board`: grid, committed path, next place and the finished flag

pub mod coord;
pub mod grid;
pub mod path;
pub mod propagation;
pub mod state;

pub use coord::Coord;
pub use grid::{Grid, CENTER, GRID_SIZE, RADIUS};
pub use path::{Path, PathItem};
pub use propagation::{propagate, ChainStore, Propagation, Rehearsal};
pub use state::Board;
