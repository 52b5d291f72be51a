//! A single game: the board, the two tiles in hand, and the score.

use tracing::{debug, info, instrument};

use super::snapshot::SessionSnapshot;
use crate::board::{Board, Propagation};
use crate::core::{GameError, SessionConfig};
use crate::tiles::{PieceSource, RandomPieces, Tile};

/// Which way to turn the upcoming tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// ↻
    Right,
    /// ↺
    Left,
}

impl Rotation {
    /// Signed sixths of a turn.
    #[must_use]
    pub const fn steps(self) -> i32 {
        match self {
            Rotation::Right => 1,
            Rotation::Left => -1,
        }
    }
}

/// Points for a chain extended by `len` cells: `1 + 2 + ... + len`.
///
/// Later cells in a cascade are worth progressively more.
#[must_use]
pub fn points_for(len: usize) -> u64 {
    let len = len as u64;
    len * (len + 1) / 2
}

/// One game in progress.
///
/// Holds two tiles: the upcoming one, which the next placement uses, and a
/// pocket tile that can be swapped in. Pieces come from the injected
/// [`PieceSource`].
#[derive(Clone, Debug)]
pub struct Session<S = RandomPieces> {
    board: Board,
    upcoming: Tile,
    pocket: Tile,
    score: u64,
    source: S,
}

impl Session<RandomPieces> {
    /// Start a game dealing uniformly random tiles.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let source = RandomPieces::new(config.rng());
        info!(seed = source.seed(), "starting session");
        Self::with_source(source)
    }

    /// The seed of the piece generator, for replaying this game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.source.seed()
    }
}

impl<S: PieceSource> Session<S> {
    /// Start a game dealing tiles from `source`.
    ///
    /// The first tile dealt becomes the upcoming tile, the second the pocket.
    pub fn with_source(mut source: S) -> Self {
        let upcoming = source.next_piece();
        let pocket = source.next_piece();
        Self {
            board: Board::new(),
            upcoming,
            pocket,
            score: 0,
            source,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn upcoming(&self) -> &Tile {
        &self.upcoming
    }

    #[must_use]
    pub fn pocket(&self) -> &Tile {
        &self.pocket
    }

    /// Total points so far. Never decreases.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.board.is_finished()
    }

    /// Deal a fresh tile from the source.
    pub fn generate_piece(&mut self) -> Tile {
        self.source.next_piece()
    }

    /// Swap the pocket and upcoming tiles.
    pub fn use_pocket(&mut self) {
        std::mem::swap(&mut self.pocket, &mut self.upcoming);
    }

    /// Turn the upcoming tile. The pocket is left alone.
    pub fn rotate_upcoming(&mut self, rotation: Rotation) {
        self.upcoming.rotate(rotation.steps());
    }

    pub fn rotate_upcoming_right(&mut self) {
        self.rotate_upcoming(Rotation::Right);
    }

    pub fn rotate_upcoming_left(&mut self) {
        self.rotate_upcoming(Rotation::Left);
    }

    /// How far the upcoming tile would carry the chain, without placing it.
    pub fn preview(&self) -> Result<Propagation, GameError> {
        self.board.find_future_path(&self.upcoming)
    }

    /// Points the upcoming tile would score if placed now.
    pub fn preview_points(&self) -> Result<u64, GameError> {
        self.preview().map(|outcome| points_for(outcome.len()))
    }

    /// Place the upcoming tile, deal a new one, and bank the points.
    ///
    /// Returns the points scored by this placement.
    #[instrument(level = "debug", skip_all)]
    pub fn place_tile(&mut self) -> Result<u64, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        let points = self.preview_points()?;
        let fresh = self.source.next_piece();
        let placed = std::mem::replace(&mut self.upcoming, fresh);
        let outcome = self.board.place_tile(placed)?;
        self.score += points;

        debug!(points, score = self.score, cells = outcome.len(), "scored placement");
        if outcome.finished {
            info!(score = self.score, "game over");
        }
        Ok(points)
    }

    /// Copy of the state a driver prints for diagnostics.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            game_over: self.is_game_over(),
            score: self.score,
            upcoming: self.upcoming.clone(),
            pocket: self.pocket.clone(),
            next_place: self.board.next_place(),
            path: self.board.path().clone(),
        }
    }
}

impl Default for Session<RandomPieces> {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::ScriptedPieces;

    fn tile(pairs: &[(u8, u8)]) -> Tile {
        Tile::from_pairs(pairs).unwrap()
    }

    fn straight() -> Tile {
        tile(&[(0, 7), (1, 2), (3, 4), (5, 6), (8, 9), (10, 11)])
    }

    fn homeward() -> Tile {
        tile(&[(7, 6), (0, 1), (2, 3), (4, 5), (8, 9), (10, 11)])
    }

    #[test]
    fn test_points_for() {
        assert_eq!(points_for(0), 0);
        assert_eq!(points_for(1), 1);
        assert_eq!(points_for(3), 6);
        assert_eq!(points_for(10), 55);
    }

    #[test]
    fn test_rotation_steps() {
        assert_eq!(Rotation::Right.steps(), 1);
        assert_eq!(Rotation::Left.steps(), -1);
    }

    #[test]
    fn test_deal_order() {
        let session = Session::with_source(ScriptedPieces::new(straight(), [homeward()]));
        assert_eq!(session.upcoming(), &straight());
        assert_eq!(session.pocket(), &homeward());
        assert_eq!(session.score(), 0);
        assert!(!session.is_game_over());
    }

    #[test]
    fn test_use_pocket_twice_restores() {
        let mut session = Session::with_source(ScriptedPieces::new(straight(), [homeward()]));
        session.use_pocket();
        assert_eq!(session.upcoming(), &homeward());
        assert_eq!(session.pocket(), &straight());

        session.use_pocket();
        assert_eq!(session.upcoming(), &straight());
        assert_eq!(session.pocket(), &homeward());
    }

    #[test]
    fn test_rotate_upcoming_leaves_pocket() {
        let mut session = Session::with_source(ScriptedPieces::new(straight(), [homeward()]));
        session.rotate_upcoming_right();

        let mut expected = straight();
        expected.rotate_right();
        assert_eq!(session.upcoming(), &expected);
        assert_eq!(session.pocket(), &homeward());

        session.rotate_upcoming(Rotation::Left);
        assert_eq!(session.upcoming(), &straight());
    }

    #[test]
    fn test_place_tile_scores_and_deals() {
        let mut session = Session::with_source(ScriptedPieces::new(straight(), []));
        assert_eq!(session.preview_points(), Ok(1));

        assert_eq!(session.place_tile(), Ok(1));
        assert_eq!(session.score(), 1);
        assert_eq!(session.upcoming(), &straight());
        assert_eq!(session.board().path().len(), 2);
    }

    #[test]
    fn test_game_over() {
        let mut session = Session::with_source(ScriptedPieces::new(homeward(), []));
        assert_eq!(session.place_tile(), Ok(1));
        assert!(session.is_game_over());

        assert_eq!(session.place_tile(), Err(GameError::GameOver));
        assert_eq!(session.preview_points(), Err(GameError::GameOver));
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_seeded_sessions_match() {
        let a = Session::new(SessionConfig::new().with_seed(5));
        let b = Session::new(SessionConfig::new().with_seed(5));
        assert_eq!(a.seed(), 5);
        assert_eq!(a.upcoming(), b.upcoming());
        assert_eq!(a.pocket(), b.pocket());
    }

    #[test]
    fn test_snapshot_display() {
        let session = Session::with_source(ScriptedPieces::new(straight(), [homeward()]));
        let text = session.snapshot().to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Is over: false");
        assert_eq!(lines[1], "Score: 0");
        assert_eq!(lines[2], "Next tile: [(0, 7), (1, 2), (3, 4), (5, 6), (8, 9), (10, 11)]");
        assert_eq!(lines[3], "Pocket: [(7, 6), (0, 1), (2, 3), (4, 5), (8, 9), (10, 11)]");
        assert_eq!(lines[4], "Path: x -> [4, 4] 0 -> 0");
    }
}
