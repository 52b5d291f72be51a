//! The board: placed pieces, the committed chain, and where it goes next.

use tracing::{debug, info, instrument};

use super::coord::Coord;
use super::grid::{Grid, CENTER};
use super::path::{Path, PathItem};
use super::propagation::{propagate, ChainStore, Propagation, Rehearsal};
use crate::core::{GameError, Pin, TileDefect};
use crate::tiles::{Piece, Reach, RenderTag, Tile};

/// Game board.
///
/// Starts `Active` with the chain leaving the center through pin 0. Becomes
/// finished, for good, the first time a committed chain reaches a border or
/// the center.
#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    path: Path,
    next_place: Coord,
    finished: bool,
}

impl Board {
    /// Create a fresh board with the hexagon laid out and the chain seeded
    /// at the center.
    #[must_use]
    pub fn new() -> Self {
        let seed = PathItem::new(CENTER, Pin::ZERO, Pin::ZERO);
        Self {
            grid: Grid::hexagon(),
            path: Path::starting_at(seed),
            next_place: seed.next_coord(),
            finished: false,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The committed chain, starting with the synthetic center item.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The cell the next tile goes into.
    #[must_use]
    pub fn next_place(&self) -> Coord {
        self.next_place
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Render tags for every cell, row by row.
    #[must_use]
    pub fn render_tags(&self) -> Vec<Vec<RenderTag>> {
        self.grid.render_tags()
    }

    fn check_playable(&self, candidate: &Tile) -> Result<(), GameError> {
        if self.finished {
            return Err(GameError::GameOver);
        }
        if !candidate.is_partition() {
            return Err(TileDefect::NotPartition.into());
        }
        if self.grid.get(self.next_place).is_none() {
            return Err(GameError::OffBoard(self.next_place));
        }
        Ok(())
    }

    /// Work out how far `candidate` would carry the chain if placed now.
    ///
    /// Leaves the board untouched; repeated calls give the same answer.
    #[instrument(level = "debug", skip_all)]
    pub fn find_future_path(&self, candidate: &Tile) -> Result<Propagation, GameError> {
        self.check_playable(candidate)?;

        let seed = *self.path.last().ok_or(GameError::EmptyPath)?;
        let mut rehearsal = Rehearsal::new(&self.grid, self.next_place, candidate, seed);
        let outcome = propagate(&mut rehearsal, self.next_place)?;

        debug!(
            at = %self.next_place,
            length = outcome.len(),
            finishes = outcome.finished,
            "dry run"
        );
        Ok(outcome)
    }

    /// Place `candidate` at the next place and let the chain run.
    ///
    /// Extends the committed path, moves the next place, and finishes the
    /// board if the chain reaches a border or the center.
    #[instrument(level = "debug", skip_all)]
    pub fn place_tile(&mut self, candidate: Tile) -> Result<Propagation, GameError> {
        self.check_playable(&candidate)?;

        let at = self.next_place;
        self.grid
            .set(at, Piece::Normal(candidate))
            .ok_or(GameError::OffBoard(at))?;
        let outcome = propagate(self, at)?;

        debug!(
            %at,
            length = outcome.len(),
            next = %outcome.next_place,
            "placed tile"
        );
        if outcome.finished {
            info!(path_len = self.path.len(), "chain finished");
        }
        Ok(outcome)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainStore for Board {
    fn reach(&self, at: Coord) -> Reach<'_> {
        self.grid.get(at).map_or(Reach::Halt, Piece::reach)
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn record(&mut self, item: PathItem) {
        self.path.push(item);
    }

    fn advance(&mut self, next: Coord) {
        self.next_place = next;
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.grid, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin(raw: u8) -> Pin {
        Pin::new(raw).unwrap()
    }

    fn tile(pairs: &[(u8, u8)]) -> Tile {
        Tile::from_pairs(pairs).unwrap()
    }

    /// Enters at 7, leaves through 0: keeps heading down-right.
    fn straight() -> Tile {
        tile(&[(0, 7), (1, 2), (3, 4), (5, 6), (8, 9), (10, 11)])
    }

    /// Enters at 7, leaves through 6: straight back into the center.
    fn homeward() -> Tile {
        tile(&[(7, 6), (0, 1), (2, 3), (4, 5), (8, 9), (10, 11)])
    }

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.next_place(), Coord::new(5, 5));
        assert!(!board.is_finished());
        assert_eq!(board.path().len(), 1);
        assert_eq!(board.path().last(), Some(&PathItem::new(CENTER, pin(0), pin(0))));
        assert_eq!(board.grid().get(CENTER), Some(&Piece::Center));
    }

    #[test]
    fn test_find_future_path_is_pure() {
        let board = Board::new();
        let first = board.find_future_path(&straight()).unwrap();
        let second = board.find_future_path(&straight()).unwrap();

        assert_eq!(first, second);
        assert_eq!(board.next_place(), Coord::new(5, 5));
        assert_eq!(board.path().len(), 1);
        assert_eq!(board.grid().get(Coord::new(5, 5)), Some(&Piece::Empty));
    }

    #[test]
    fn test_dry_run_does_not_finish() {
        let board = Board::new();
        let outcome = board.find_future_path(&homeward()).unwrap();
        assert!(outcome.finished);
        assert!(!board.is_finished());
    }

    #[test]
    fn test_place_tile_matches_dry_run() {
        let mut board = Board::new();
        let preview = board.find_future_path(&straight()).unwrap();
        let placed = board.place_tile(straight()).unwrap();

        assert_eq!(preview, placed);
        assert_eq!(board.next_place(), Coord::new(6, 6));
        assert_eq!(board.path().len(), 2);
        assert!(board.grid().get(Coord::new(5, 5)).is_some_and(Piece::is_occupied));
    }

    #[test]
    fn test_straight_line_to_border() {
        let mut board = Board::new();
        board.place_tile(straight()).unwrap();
        board.place_tile(straight()).unwrap();
        assert!(!board.is_finished());

        // (7, 7) leads down-right to the corner wall at (8, 8).
        let outcome = board.place_tile(straight()).unwrap();
        assert!(outcome.finished);
        assert_eq!(outcome.len(), 1);
        assert_eq!(outcome.next_place, Coord::new(8, 8));
        assert!(board.is_finished());
    }

    #[test]
    fn test_finished_board_rejects_play() {
        let mut board = Board::new();
        board.place_tile(homeward()).unwrap();
        assert!(board.is_finished());

        assert_eq!(board.find_future_path(&straight()), Err(GameError::GameOver));
        assert_eq!(board.place_tile(straight()), Err(GameError::GameOver));
    }

    #[test]
    fn test_rejects_incomplete_tile() {
        let mut board = Board::new();
        let center = Tile::center();
        let expected = Err(GameError::InvalidTile(TileDefect::NotPartition));

        assert_eq!(board.find_future_path(&center), expected);
        assert_eq!(board.place_tile(center), expected);
        assert_eq!(board.grid().get(Coord::new(5, 5)), Some(&Piece::Empty));
    }

    #[test]
    fn test_off_board_next_place_fails() {
        let mut board = Board::new();
        let off = Coord::new(-1, 3);
        board.next_place = off;

        assert_eq!(board.find_future_path(&straight()), Err(GameError::OffBoard(off)));
        assert_eq!(board.place_tile(straight()), Err(GameError::OffBoard(off)));
        assert_eq!(board.path().len(), 1);
        assert!(!board.is_finished());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place_tile(straight()).unwrap();
        let rendered = board.to_string();
        assert_eq!(rendered.lines().nth(5), Some("_xooo@oox"));
    }
}
