//! Pins and travel directions.
//!
//! A hexagonal tile has six edges with two pins each, numbered `0..12`
//! clockwise. Both pins of an edge lead to the same neighbouring cell, so the
//! edge (and with it the [`Direction`] of travel) is `pin / 2`.

use serde::{Deserialize, Serialize};

use super::error::{GameError, TileDefect};

/// Number of pins around a tile.
pub const PIN_COUNT: u8 = 12;

/// Pins per hexagon edge. One rotation step moves every pin this far.
pub const PINS_PER_EDGE: u8 = 2;

/// A connection point on a tile edge, always in `0..12`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Pin(u8);

impl Pin {
    /// Pin zero, the one the center tile connects to itself.
    pub const ZERO: Pin = Pin(0);

    /// Create a pin, rejecting values outside `0..12`.
    pub fn new(raw: u8) -> Result<Self, GameError> {
        if raw < PIN_COUNT {
            Ok(Self(raw))
        } else {
            Err(GameError::InvalidTile(TileDefect::PinOutOfRange(raw)))
        }
    }

    /// Get the raw pin number.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Iterate over all twelve pins in order.
    pub fn all() -> impl Iterator<Item = Pin> {
        (0..PIN_COUNT).map(Pin)
    }

    /// The pin on a neighbouring tile that touches this exit pin.
    ///
    /// Leaving through pin `p` enters the next tile at the pin directly
    /// across the shared edge: `p - 5` for even pins, `p + 5` for odd ones.
    #[must_use]
    pub const fn facing(self) -> Pin {
        let n = PIN_COUNT as i16;
        let shift = if self.0 % 2 == 0 { -5 } else { 5 };
        Pin(((self.0 as i16 + n + shift) % n) as u8)
    }

    /// Shift the pin by `steps` sixths of a turn (clockwise for positive steps).
    #[must_use]
    pub const fn rotated(self, steps: i32) -> Pin {
        let n = PIN_COUNT as i32;
        let shift = steps.rem_euclid(6) * PINS_PER_EDGE as i32;
        Pin(((self.0 as i32 + shift) % n) as u8)
    }

    /// The direction of travel when leaving a tile through this pin.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self.0 / PINS_PER_EDGE {
            0 => Direction::DownRight,
            1 => Direction::Down,
            2 => Direction::Left,
            3 => Direction::UpLeft,
            4 => Direction::Up,
            _ => Direction::Right,
        }
    }
}

impl TryFrom<u8> for Pin {
    type Error = GameError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Pin::new(raw)
    }
}

impl From<Pin> for u8 {
    fn from(pin: Pin) -> Self {
        pin.0
    }
}

impl std::fmt::Display for Pin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the six neighbours of a cell on the diamond-shaped grid.
///
/// Rows grow downwards and columns grow to the right; the hexagon is sheared
/// so that the `(+1, +1)` and `(-1, -1)` diagonals are neighbours while the
/// other diagonal is not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Pins 0 and 1.
    DownRight,
    /// Pins 2 and 3.
    Down,
    /// Pins 4 and 5.
    Left,
    /// Pins 6 and 7.
    UpLeft,
    /// Pins 8 and 9.
    Up,
    /// Pins 10 and 11.
    Right,
}

impl Direction {
    /// All directions in pin order.
    pub const ALL: [Direction; 6] = [
        Direction::DownRight,
        Direction::Down,
        Direction::Left,
        Direction::UpLeft,
        Direction::Up,
        Direction::Right,
    ];

    /// Row and column offset to the neighbouring cell.
    #[must_use]
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::DownRight => (1, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::UpLeft => (-1, -1),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin(raw: u8) -> Pin {
        Pin::new(raw).unwrap()
    }

    #[test]
    fn test_pin_range() {
        assert!(Pin::new(0).is_ok());
        assert!(Pin::new(11).is_ok());
        assert_eq!(
            Pin::new(12),
            Err(GameError::InvalidTile(TileDefect::PinOutOfRange(12)))
        );
        assert_eq!(Pin::all().count(), 12);
    }

    #[test]
    fn test_facing() {
        let expected = [7, 6, 9, 8, 11, 10, 1, 0, 3, 2, 5, 4];
        for (raw, facing) in expected.iter().enumerate() {
            assert_eq!(pin(raw as u8).facing(), pin(*facing), "pin {}", raw);
        }
    }

    #[test]
    fn test_facing_points_back() {
        // The facing pin sits on the edge that leads back to the tile we left.
        for p in Pin::all() {
            let (dr, dc) = p.direction().offset();
            assert_eq!(p.facing().direction().offset(), (-dr, -dc));
            assert_eq!(p.facing().facing(), p);
        }
    }

    #[test]
    fn test_rotated() {
        assert_eq!(pin(0).rotated(1), pin(2));
        assert_eq!(pin(11).rotated(1), pin(1));
        assert_eq!(pin(0).rotated(-1), pin(10));
        assert_eq!(pin(5).rotated(6), pin(5));
        assert_eq!(pin(5).rotated(-13), pin(3));
        // i32::MAX is 1 mod 6, i32::MIN is -2 mod 6.
        assert_eq!(pin(4).rotated(i32::MAX), pin(6));
        assert_eq!(pin(4).rotated(i32::MIN), pin(0));
    }

    #[test]
    fn test_direction_table() {
        assert_eq!(pin(0).direction().offset(), (1, 1));
        assert_eq!(pin(3).direction().offset(), (1, 0));
        assert_eq!(pin(4).direction().offset(), (0, -1));
        assert_eq!(pin(7).direction().offset(), (-1, -1));
        assert_eq!(pin(8).direction().offset(), (-1, 0));
        assert_eq!(pin(11).direction().offset(), (0, 1));
    }
}
