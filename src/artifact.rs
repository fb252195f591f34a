//! Rendering artifacts appended to the move history
//!
//! One artifact per executed move: the post-move position plus a single
//! highlighted arrow from source to destination. The core only appends
//! these; turning one into an actual image is a presentation-layer job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of the board right after a move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardArtifact {
    /// Position after the move, as FEN
    pub fen: String,
    /// Source square of the highlighted arrow
    pub arrow_from: String,
    /// Destination square of the highlighted arrow
    pub arrow_to: String,
    /// Requested render size in pixels (square)
    pub size: u32,
    pub recorded_at: DateTime<Utc>,
}

impl BoardArtifact {
    pub fn new(
        fen: impl Into<String>,
        arrow_from: impl Into<String>,
        arrow_to: impl Into<String>,
        size: u32,
    ) -> Self {
        Self {
            fen: fen.into(),
            arrow_from: arrow_from.into(),
            arrow_to: arrow_to.into(),
            size,
            recorded_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_round_trips_through_json() {
        let artifact = BoardArtifact::new(
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
            "e2",
            "e4",
            400,
        );
        let json = serde_json::to_string(&artifact).unwrap();
        let back: BoardArtifact = serde_json::from_str(&json).unwrap();
        assert_eq!(back, artifact);
    }
}
