//! The chain walk shared by dry runs and committed placements.
//!
//! A walk starts at the cell awaiting a tile and keeps crossing placed tiles,
//! following each exit pin to the neighbouring cell, until it reaches:
//! - a border or the center: the chain is finished and so is the game
//! - an empty cell: the chain dangles there until a tile is placed
//!
//! The walk itself never decides where cells or path items live. It talks to
//! a [`ChainStore`]: the live [`Board`](super::Board) for commits, or a
//! [`Rehearsal`] that overlays the candidate on a borrowed grid and writes to
//! a throwaway path.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::coord::Coord;
use super::grid::Grid;
use super::path::{Path, PathItem};
use crate::core::GameError;
use crate::tiles::{Reach, Tile};

/// Cell lookup and trace storage for a chain walk.
pub trait ChainStore {
    /// How the chain reacts on reaching `at`.
    fn reach(&self, at: Coord) -> Reach<'_>;

    /// The trace written so far.
    fn path(&self) -> &Path;

    /// Append a crossed cell to the trace.
    fn record(&mut self, item: PathItem);

    /// The chain now awaits its next piece at `next`.
    fn advance(&mut self, next: Coord);

    /// The chain hit a border or the center.
    fn finish(&mut self);
}

/// Outcome of one chain walk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Propagation {
    /// Cells newly crossed, in order.
    pub segment: Vec<PathItem>,
    /// Where the chain awaits its next piece.
    pub next_place: Coord,
    /// Whether the walk ended on a border or the center.
    pub finished: bool,
}

impl Propagation {
    /// Number of cells crossed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segment.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segment.is_empty()
    }
}

/// Walk the chain from `start` until it halts or finishes.
pub fn propagate<S: ChainStore>(store: &mut S, start: Coord) -> Result<Propagation, GameError> {
    let mut current = start;
    let mut segment = Vec::new();

    loop {
        let last_exit = store.path().last_output()?;

        let item = match store.reach(current) {
            Reach::Terminal => {
                debug!(at = %current, "chain reached a terminal piece");
                store.finish();
                return Ok(Propagation {
                    segment,
                    next_place: current,
                    finished: true,
                });
            }
            Reach::Halt => break,
            Reach::Traverse(tile) => PathItem::new(
                current,
                Tile::input(last_exit),
                tile.output_from_neighbour_output(last_exit)?,
            ),
        };

        trace!(at = %item.at, entry = %item.entry, exit = %item.exit, "chain crossed tile");
        store.record(item);
        segment.push(item);

        let next = item.next_coord();
        store.advance(next);
        if next == current {
            break;
        }
        current = next;
    }

    Ok(Propagation {
        segment,
        next_place: current,
        finished: false,
    })
}

/// Dry-run storage: the committed grid plus one candidate tile, and a path
/// that is thrown away afterwards.
pub struct Rehearsal<'a> {
    grid: &'a Grid,
    candidate_at: Coord,
    candidate: &'a Tile,
    path: Path,
}

impl<'a> Rehearsal<'a> {
    /// Treat `candidate` as sitting at `candidate_at` and start the trace
    /// from `seed`.
    #[must_use]
    pub fn new(grid: &'a Grid, candidate_at: Coord, candidate: &'a Tile, seed: PathItem) -> Self {
        Self {
            grid,
            candidate_at,
            candidate,
            path: Path::starting_at(seed),
        }
    }
}

impl ChainStore for Rehearsal<'_> {
    fn reach(&self, at: Coord) -> Reach<'_> {
        if at == self.candidate_at {
            Reach::Traverse(self.candidate)
        } else {
            self.grid.get(at).map_or(Reach::Halt, |piece| piece.reach())
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn record(&mut self, item: PathItem) {
        self.path.push(item);
    }

    fn advance(&mut self, _next: Coord) {}

    fn finish(&mut self) {}
}
