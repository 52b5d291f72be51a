//! Core engine types: pins, directions, errors, RNG, configuration.
//!
//! These are the building blocks shared by tiles, the board and sessions.

pub mod config;
pub mod error;
pub mod pin;
pub mod rng;

pub use config::SessionConfig;
pub use error::{GameError, TileDefect};
pub use pin::{Direction, Pin, PIN_COUNT, PINS_PER_EDGE};
pub use rng::GameRng;
