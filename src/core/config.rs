//! Session configuration.
//!
//! The engine has no environment or file configuration: a game is described
//! entirely by the `SessionConfig` handed to
//! [`Session::new`](crate::session::Session::new).

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Configuration for a new game session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for piece generation. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the seed so the game deals a reproducible sequence of pieces.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the RNG this configuration describes.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}
