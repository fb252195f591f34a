//! Game loop: alternating two proposers over one session
//!
//! The orchestrator owns the sides and the retry budget; the session owns
//! the truth. Each ply it prompts the side to move, feeding rejections back
//! to the same agent, until the session's turn gate yields or the proposal
//! cap runs out. Checkmate, stalemate, the configured half-move limit, or
//! a stalled agent end the game.

use crate::agent::{MoveProposer, ProposalContext};
use crate::board::GameStatus;
use crate::session::GameSession;
use chess::Color;

/// How many proposals one side gets per ply before the game is declared
/// stalled. Keeps a confused agent from looping forever.
pub const DEFAULT_PROPOSAL_CAP: usize = 5;

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    /// Configured max half-moves reached with the game still open
    MoveLimitReached,
    /// The side to move could not produce an accepted move
    Stalled { side: Color },
}

/// Everything worth keeping once a game is over
#[derive(Debug)]
pub struct GameReport {
    pub outcome: GameOutcome,
    pub plies_played: usize,
    pub final_fen: String,
    /// One line per proposal, accepted or rejected, in order
    pub transcript: Vec<String>,
}

impl GameReport {
    pub fn summary(&self) -> String {
        match self.outcome {
            GameOutcome::Checkmate { winner } => format!(
                "Checkmate: {} wins after {} half-moves.",
                color_name(winner),
                self.plies_played
            ),
            GameOutcome::Stalemate => {
                format!("Stalemate after {} half-moves.", self.plies_played)
            }
            GameOutcome::MoveLimitReached => format!(
                "Move limit reached after {} half-moves; game unfinished.",
                self.plies_played
            ),
            GameOutcome::Stalled { side } => format!(
                "{} failed to produce a legal move after {} half-moves.",
                color_name(side),
                self.plies_played
            ),
        }
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

/// Runs one game between two agents
pub struct GameOrchestrator {
    white: Box<dyn MoveProposer>,
    black: Box<dyn MoveProposer>,
    proposal_cap: usize,
}

impl GameOrchestrator {
    pub fn new(white: Box<dyn MoveProposer>, black: Box<dyn MoveProposer>) -> Self {
        Self {
            white,
            black,
            proposal_cap: DEFAULT_PROPOSAL_CAP,
        }
    }

    pub fn with_proposal_cap(mut self, proposal_cap: usize) -> Self {
        self.proposal_cap = proposal_cap;
        self
    }

    /// Play until a terminal position, the session's half-move limit, or a
    /// stalled agent.
    pub fn run(&mut self, session: &mut GameSession) -> GameReport {
        let proposal_cap = self.proposal_cap;
        let mut transcript = Vec::new();

        for ply in 0..session.config().max_half_moves {
            if session.status().is_terminal() {
                break;
            }
            let side = session.side_to_move();
            let proposer = match side {
                Color::White => self.white.as_mut(),
                Color::Black => self.black.as_mut(),
            };

            let mut feedback: Option<String> = None;
            let mut moved = false;
            for _ in 0..proposal_cap {
                let legal_moves = session.list_legal_moves();
                let ctx = ProposalContext {
                    legal_moves: &legal_moves,
                    last_feedback: feedback.as_deref(),
                    ply,
                };
                let proposed = match proposer.propose(&ctx) {
                    Ok(mv) => mv,
                    Err(err) => {
                        tracing::warn!(agent = proposer.name(), error = %err, "proposal failed");
                        break;
                    }
                };

                let message = session.execute(&proposed);
                transcript.push(format!("{}: {}", proposer.name(), message));

                if session.should_yield() {
                    tracing::info!(
                        agent = proposer.name(),
                        mv = %proposed,
                        ply = ply + 1,
                        "move accepted, handing over"
                    );
                    moved = true;
                    break;
                }
                tracing::warn!(agent = proposer.name(), mv = %proposed, "move rejected");
                feedback = Some(message);
            }

            if !moved {
                return finish(session, GameOutcome::Stalled { side }, transcript);
            }
        }

        let outcome = match session.status() {
            GameStatus::Checkmate => GameOutcome::Checkmate {
                // The winner is whoever delivered the last move.
                winner: !session.side_to_move(),
            },
            GameStatus::Stalemate => GameOutcome::Stalemate,
            GameStatus::Ongoing | GameStatus::Check => GameOutcome::MoveLimitReached,
        };
        finish(session, outcome, transcript)
    }
}

fn finish(session: &GameSession, outcome: GameOutcome, transcript: Vec<String>) -> GameReport {
    let report = GameReport {
        outcome,
        plies_played: session.ply(),
        final_fen: session.board().fen(),
        transcript,
    };
    tracing::info!(
        session = %session.id(),
        outcome = ?report.outcome,
        plies = report.plies_played,
        "game over"
    );
    report
}
