//! Where new tiles come from.
//!
//! Sessions never generate tiles themselves; they pull them from a
//! [`PieceSource`]. Every source must hand out tiles whose connections pair
//! up all twelve pins.

use tracing::trace;

use super::tile::{Connection, Tile};
use crate::core::{GameRng, Pin, PIN_COUNT};

/// Supplier of fresh tiles.
pub trait PieceSource {
    /// Produce the next tile. Its six connections partition the twelve pins.
    fn next_piece(&mut self) -> Tile;
}

/// Uniform random pairing of the twelve pins.
///
/// Each connection takes two pins drawn at random from those not yet used.
#[derive(Clone, Debug)]
pub struct RandomPieces {
    rng: GameRng,
}

impl RandomPieces {
    /// Create a source driven by the given RNG.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Create a source from a seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// The seed of the underlying RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    fn draw(&mut self, pool: &mut Vec<Pin>) -> Pin {
        let index = self.rng.gen_range_usize(0..pool.len());
        pool.swap_remove(index)
    }
}

impl PieceSource for RandomPieces {
    fn next_piece(&mut self) -> Tile {
        let mut pool: Vec<Pin> = Pin::all().collect();
        let mut connections: Vec<Connection> = Vec::with_capacity(PIN_COUNT as usize / 2);

        while !pool.is_empty() {
            let a = self.draw(&mut pool);
            let b = self.draw(&mut pool);
            connections.push((a, b));
        }

        let tile = Tile::from_connections(connections);
        trace!(%tile, "generated piece");
        tile
    }
}

/// Deals a fixed list of tiles in order, starting over after the last one.
///
/// Useful for reproducible games and tests.
#[derive(Clone, Debug)]
pub struct ScriptedPieces {
    tiles: Vec<Tile>,
    next: usize,
}

impl ScriptedPieces {
    /// Create a source dealing `first`, then each of `rest`, then `first` again.
    #[must_use]
    pub fn new(first: Tile, rest: impl IntoIterator<Item = Tile>) -> Self {
        let tiles = std::iter::once(first).chain(rest).collect();
        Self { tiles, next: 0 }
    }
}

impl PieceSource for ScriptedPieces {
    fn next_piece(&mut self) -> Tile {
        let tile = self.tiles[self.next].clone();
        self.next = (self.next + 1) % self.tiles.len();
        tile
    }
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_piece(&mut self) -> Tile {
        (**self).next_piece()
    }
}
