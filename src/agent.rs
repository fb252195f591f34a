//! Agent boundary
//!
//! An agent is a black box with one capability: propose a UCI move string
//! for the current position. How it decides (model, script, human) is not
//! this crate's business; whatever it returns goes through the session's
//! soft-failing execute, and a rejected proposal just comes back as
//! feedback on the next prompt.

mod random;
mod scripted;

pub use random::RandomProposer;
pub use scripted::ScriptedProposer;

use thiserror::Error;

/// Everything an agent gets to see when asked for a move
#[derive(Debug, Clone, Copy)]
pub struct ProposalContext<'a> {
    /// Current legal moves, `", "`-joined UCI; empty on terminal positions
    pub legal_moves: &'a str,
    /// Result line of this agent's previous attempt this turn, if any
    pub last_feedback: Option<&'a str>,
    /// Zero-based half-move index
    pub ply: u32,
}

/// A move-proposing agent
pub trait MoveProposer {
    /// Display name used in transcripts and logs
    fn name(&self) -> &str;

    /// Propose one UCI move string. Invoked synchronously; any latency
    /// (network, model inference) lives behind this call.
    fn propose(&mut self, ctx: &ProposalContext<'_>) -> Result<String, ProposeError>;
}

/// Agent-side failures. These stall the game; they are never retried by
/// the core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProposeError {
    #[error("move script exhausted after {0} moves")]
    ScriptExhausted(usize),

    #[error("no legal moves to choose from")]
    NoLegalMoves,
}
