//! The chain's trace through the grid.
//!
//! A path is append-only. Each item records the cell crossed and the pins the
//! chain entered and left through; the exit pin of one item decides where the
//! next item lies.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::coord::Coord;
use crate::core::{GameError, Pin};

/// One cell crossed by the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathItem {
    pub at: Coord,
    pub entry: Pin,
    pub exit: Pin,
}

impl PathItem {
    #[must_use]
    pub const fn new(at: Coord, entry: Pin, exit: Pin) -> Self {
        Self { at, entry, exit }
    }

    /// The cell the chain moves to after this one.
    #[must_use]
    pub const fn next_coord(&self) -> Coord {
        self.at.step(self.exit.direction())
    }
}

/// Ordered trace of path items.
///
/// Backed by `im::Vector` so the throwaway copies taken for dry runs are
/// O(1) to create.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    items: Vector<PathItem>,
}

impl Path {
    /// Create an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path whose only item is `seed`.
    #[must_use]
    pub fn starting_at(seed: PathItem) -> Self {
        let mut path = Self::new();
        path.push(seed);
        path
    }

    /// Append a crossing of `at`, entering at `entry` and leaving at `exit`.
    pub fn expand(&mut self, at: Coord, entry: Pin, exit: Pin) {
        self.push(PathItem::new(at, entry, exit));
    }

    /// Append an item.
    pub fn push(&mut self, item: PathItem) {
        self.items.push_back(item);
    }

    /// The most recent item.
    #[must_use]
    pub fn last(&self) -> Option<&PathItem> {
        self.items.last()
    }

    /// Exit pin of the most recent item.
    pub fn last_output(&self) -> Result<Pin, GameError> {
        self.last().map(|item| item.exit).ok_or(GameError::EmptyPath)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathItem> {
        self.items.iter()
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x")?;
        for item in &self.items {
            write!(f, " -> {} {} -> {}", item.at, item.entry, item.exit)?;
        }
        Ok(())
    }
}
