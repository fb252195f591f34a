//! Game session: the one struct a game lives in
//!
//! Bundles the board, the append-only artifact history, the turn arbiter,
//! and the per-game config. Every operation takes the session explicitly;
//! there is no ambient global state. Mutation happens only through
//! [`GameSession::try_execute`] (and the reset), so a `&mut GameSession`
//! is the whole concurrency story: one move attempt resolves fully before
//! the next can begin.

use crate::arbiter::TurnArbiter;
use crate::artifact::BoardArtifact;
use crate::board::{BoardState, GameStatus, MoveReport};
use crate::config::GameConfig;
use crate::error::MoveError;
use chess::Color;
use uuid::Uuid;

#[cfg(test)]
mod proptests;

/// One in-memory chess game between two agents
#[derive(Debug)]
pub struct GameSession {
    id: Uuid,
    config: GameConfig,
    board: BoardState,
    history: Vec<BoardArtifact>,
    arbiter: TurnArbiter,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            board: BoardState::new(),
            history: Vec::new(),
            arbiter: TurnArbiter::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Artifacts recorded so far, one per executed move
    pub fn history(&self) -> &[BoardArtifact] {
        &self.history
    }

    /// Half-moves played so far
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Every legal move from the current position as a `", "`-joined UCI
    /// list, empty on terminal positions. No side effects.
    pub fn list_legal_moves(&self) -> String {
        self.board
            .legal_moves()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Execute a proposed move, with typed results.
    ///
    /// On success this is the only place the board mutates: the position
    /// advances, one artifact is appended, and the turn arbiter is armed.
    /// On failure nothing changes at all.
    pub fn try_execute(&mut self, input: &str) -> Result<MoveReport, MoveError> {
        let mv = self.board.parse_move(input)?;
        let report = self.board.apply(mv);
        self.history.push(BoardArtifact::new(
            self.board.fen(),
            report.from.clone(),
            report.to.clone(),
            self.config.board_size,
        ));
        self.arbiter.record_move();
        tracing::debug!(
            session = %self.id,
            mv = %input,
            ply = self.history.len(),
            status = ?report.status,
            "move executed"
        );
        Ok(report)
    }

    /// String surface of [`try_execute`], as exposed to agents.
    ///
    /// Always returns one human-readable line and never fails hard; the
    /// error templates come straight from [`MoveError`]'s `Display`.
    ///
    /// [`try_execute`]: GameSession::try_execute
    pub fn execute(&mut self, input: &str) -> String {
        match self.try_execute(input) {
            Ok(report) => report.to_string(),
            Err(err) => {
                tracing::debug!(session = %self.id, mv = %input, error = %err, "move rejected");
                err.to_string()
            }
        }
    }

    /// Termination check backed by the turn arbiter: true exactly once
    /// after each successful execute.
    pub fn should_yield(&mut self) -> bool {
        self.arbiter.poll()
    }

    /// Back to the starting position, empty history, disarmed gate.
    /// Config is kept; a reset starts a new game, not a new session.
    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
        self.arbiter.reset();
        tracing::debug!(session = %self.id, "session reset");
    }
}
