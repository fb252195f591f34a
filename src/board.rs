//! Authoritative board position
//!
//! Thin wrapper over the `chess` rules crate. All mutation goes through
//! [`BoardState::apply`], which only ever receives a move that
//! [`BoardState::parse_move`] already validated, so the position stays legal
//! and reachable from the standard starting position.

use crate::error::MoveError;
use chess::{Board, BoardStatus, ChessMove, Color, MoveGen};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position status after a move, as reported back to the agents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Ongoing,
    /// Side to move is in check; advisory only, the game continues
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Checkmate and stalemate end the game; check does not
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// Outcome of a successfully executed move
///
/// `Display` renders the human-readable line handed back to the proposing
/// agent, e.g. `Moved P from e2 to e4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// Symbol of the piece now standing on the destination square
    /// (uppercase for White, lowercase for Black)
    pub piece: String,
    pub from: String,
    pub to: String,
    pub status: GameStatus,
}

impl fmt::Display for MoveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Moved {} from {} to {}", self.piece, self.from, self.to)?;
        match self.status {
            GameStatus::Checkmate => write!(f, " - Checkmate! Game over"),
            GameStatus::Stalemate => write!(f, " - Stalemate! Game over"),
            GameStatus::Check => write!(f, " - Check!"),
            GameStatus::Ongoing => Ok(()),
        }
    }
}

/// The shared chess position
#[derive(Debug, Clone)]
pub struct BoardState {
    position: Board,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// Standard starting position
    pub fn new() -> Self {
        Self {
            position: Board::default(),
        }
    }

    /// Every legal move from the current position, in generator order
    pub fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(&self.position).collect()
    }

    /// Validate a proposed UCI string against the current position.
    ///
    /// Syntax is checked first, then membership in the legal set. Fails
    /// softly either way; the position is untouched.
    pub fn parse_move(&self, input: &str) -> Result<ChessMove, MoveError> {
        let mv = ChessMove::from_str(input).map_err(|_| MoveError::invalid_syntax(input))?;
        if !self.position.legal(mv) {
            return Err(MoveError::illegal(input));
        }
        Ok(mv)
    }

    /// Apply a validated move, mutating the position.
    ///
    /// Callers must pass a move obtained from [`parse_move`] on the current
    /// position. There is no undo.
    ///
    /// [`parse_move`]: BoardState::parse_move
    pub fn apply(&mut self, mv: ChessMove) -> MoveReport {
        let from = mv.get_source();
        let to = mv.get_dest();
        self.position = self.position.make_move_new(mv);

        // After a legal move the destination square is always occupied;
        // promotions report the promoted piece.
        let piece = match (self.position.piece_on(to), self.position.color_on(to)) {
            (Some(piece), Some(color)) => piece.to_string(color),
            _ => "?".to_string(),
        };

        MoveReport {
            piece,
            from: from.to_string(),
            to: to.to_string(),
            status: self.status(),
        }
    }

    /// Status of the current position
    pub fn status(&self) -> GameStatus {
        match self.position.status() {
            BoardStatus::Checkmate => GameStatus::Checkmate,
            BoardStatus::Stalemate => GameStatus::Stalemate,
            BoardStatus::Ongoing if self.position.checkers().popcnt() > 0 => GameStatus::Check,
            BoardStatus::Ongoing => GameStatus::Ongoing,
        }
    }

    /// Current position as FEN
    pub fn fen(&self) -> String {
        self.position.to_string()
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    /// Back to the starting position
    pub fn reset(&mut self) {
        self.position = Board::default();
    }
}
