//! Session configuration
//!
//! Fixed for the duration of a game once the session is created.

use std::fmt;

/// Default cap on half-moves per game. A full game can exceed 200 plies;
/// demos should stay around 10.
pub const DEFAULT_MAX_PLIES: u32 = 10;

/// Default render size for history artifacts, in pixels.
///
/// Deliberately a separate constant from [`DEFAULT_MAX_PLIES`]; the two
/// have nothing to do with each other and neither derives from the other.
pub const DEFAULT_BOARD_SIZE: u32 = 400;

/// Immutable per-game settings
#[derive(Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Stop the game after this many half-moves
    pub max_half_moves: u32,
    /// Render size recorded on each history artifact
    pub board_size: u32,
    /// Credential for model-backed agents; opaque to the core
    pub api_key: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_half_moves: DEFAULT_MAX_PLIES,
            board_size: DEFAULT_BOARD_SIZE,
            api_key: None,
        }
    }
}

// Manual impl to keep the credential out of logs.
impl fmt::Debug for GameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameConfig")
            .field("max_half_moves", &self.max_half_moves)
            .field("board_size", &self.board_size)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl GameConfig {
    /// Read configuration from the environment, with defaults for anything
    /// absent or malformed.
    pub fn from_env() -> Self {
        Self {
            max_half_moves: std::env::var("ARENA_MAX_PLIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_PLIES),
            board_size: std::env::var("ARENA_BOARD_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_BOARD_SIZE),
            api_key: std::env::var("ARENA_API_KEY").ok(),
        }
    }

    pub fn with_max_half_moves(mut self, max_half_moves: u32) -> Self {
        self.max_half_moves = max_half_moves;
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_independent() {
        let config = GameConfig::default();
        assert_eq!(config.max_half_moves, DEFAULT_MAX_PLIES);
        assert_eq!(config.board_size, DEFAULT_BOARD_SIZE);
        assert_ne!(DEFAULT_MAX_PLIES, DEFAULT_BOARD_SIZE);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_debug_redacts_credential() {
        let config = GameConfig::default().with_api_key("sk-very-secret");
        let printed = format!("{config:?}");
        assert!(!printed.contains("sk-very-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
