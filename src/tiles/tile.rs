//! Tile connection graphs.
//!
//! A tile is a set of undirected connections between its twelve pins. A chain
//! entering at one end of a connection leaves through the other.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameError, Pin, TileDefect, PIN_COUNT};

/// An undirected link between two pins of one tile.
pub type Connection = (Pin, Pin);

/// A tile's connection graph.
///
/// Normal tiles carry six connections that use every pin exactly once. The
/// center tile is the exception: a single `(0, 0)` self-connection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// SmallVec holds the six connections of a full tile inline.
    connections: SmallVec<[Connection; 6]>,
}

impl Tile {
    /// Build a tile from already-validated connections.
    pub fn from_connections(connections: impl IntoIterator<Item = Connection>) -> Self {
        Self {
            connections: connections.into_iter().collect(),
        }
    }

    /// Build a normal tile from raw pin pairs.
    ///
    /// Fails unless every pin is in range and the pairs use each of the twelve
    /// pins exactly once.
    pub fn from_pairs(pairs: &[(u8, u8)]) -> Result<Self, GameError> {
        let connections = pairs
            .iter()
            .map(|&(a, b)| Ok((Pin::new(a)?, Pin::new(b)?)))
            .collect::<Result<SmallVec<[Connection; 6]>, GameError>>()?;

        let tile = Self { connections };
        if !tile.is_partition() {
            return Err(TileDefect::NotPartition.into());
        }
        Ok(tile)
    }

    /// The fixed tile at the center of the board.
    #[must_use]
    pub fn center() -> Self {
        Self::from_connections([(Pin::ZERO, Pin::ZERO)])
    }

    /// The tile's connections in construction order.
    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Check that the connections use each pin exactly once.
    #[must_use]
    pub fn is_partition(&self) -> bool {
        let mut seen = FxHashSet::default();
        let all_new = self
            .connections
            .iter()
            .flat_map(|&(a, b)| [a, b])
            .all(|pin| seen.insert(pin));
        all_new && seen.len() == PIN_COUNT as usize
    }

    /// Follow the connection containing `from` to its other end.
    pub fn output(&self, from: Pin) -> Result<Pin, GameError> {
        self.connections
            .iter()
            .find_map(|&(a, b)| {
                if a == from {
                    Some(b)
                } else if b == from {
                    Some(a)
                } else {
                    None
                }
            })
            .ok_or(GameError::InvalidTile(TileDefect::Unconnected(from)))
    }

    /// The pin of this tile that faces `to`, the exit pin of the tile just left.
    ///
    /// Purely geometric; the tile's connections are not consulted.
    #[must_use]
    pub fn input(to: Pin) -> Pin {
        to.facing()
    }

    /// Exit pin after a chain that left its previous tile through `from`
    /// enters and crosses this one.
    pub fn output_from_neighbour_output(&self, from: Pin) -> Result<Pin, GameError> {
        self.output(Self::input(from))
    }

    /// Rotate by `steps` sixths of a turn. Positive is clockwise.
    pub fn rotate(&mut self, steps: i32) {
        for (a, b) in self.connections.iter_mut() {
            *a = a.rotated(steps);
            *b = b.rotated(steps);
        }
    }

    /// ↻
    pub fn rotate_right(&mut self) {
        self.rotate(1);
    }

    /// ↺
    pub fn rotate_left(&mut self) {
        self.rotate(-1);
    }

    /// Connections as an order-independent set, for comparing tiles.
    #[must_use]
    pub fn canonical(&self) -> Vec<Connection> {
        let mut pairs: Vec<Connection> = self
            .connections
            .iter()
            .map(|&(a, b)| if a <= b { (a, b) } else { (b, a) })
            .collect();
        pairs.sort_unstable();
        pairs
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, (a, b)) in self.connections.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", a, b)?;
        }
        write!(f, "]")
    }
}
