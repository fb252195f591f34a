//! chess-arena: two autonomous agents playing chess over one shared session
//!
//! The interesting part is the turn-taking protocol: a shared mutable board,
//! a soft-failing move validator/executor, and a one-shot-then-yield gate
//! ([`TurnArbiter`]) that hands control to the other side after exactly one
//! accepted move. Agents are black boxes behind [`MoveProposer`]; the
//! [`GameOrchestrator`] alternates them until checkmate, stalemate, the
//! half-move limit, or a stalled agent.
//!
//! Rendering, persistence, and any model wiring live outside this crate;
//! the history is a list of serializable [`BoardArtifact`]s for someone
//! else to draw.

pub mod agent;
pub mod arbiter;
pub mod artifact;
pub mod board;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod session;

pub use agent::{MoveProposer, ProposalContext, ProposeError, RandomProposer, ScriptedProposer};
pub use arbiter::{ArbiterState, TurnArbiter};
pub use artifact::BoardArtifact;
pub use board::{BoardState, GameStatus, MoveReport};
pub use config::GameConfig;
pub use error::MoveError;
pub use orchestrator::{GameOrchestrator, GameOutcome, GameReport};
pub use session::GameSession;
