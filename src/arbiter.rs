//! One-shot turn handoff gate
//!
//! The arbiter decides when the orchestrator stops prompting the current
//! agent and hands control to the other side. It is a two-state machine:
//! a successful move execution arms it, and exactly one termination check
//! consumes that signal. Failed move attempts never touch it, so an agent
//! that keeps proposing illegal moves keeps the turn (bounded only by the
//! orchestrator's proposal cap).

/// Gate state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArbiterState {
    /// No move has been made since the last handoff
    #[default]
    Waiting,
    /// A move was just applied; the next poll hands off
    Yielded,
}

/// The turn gate itself
#[derive(Debug, Default)]
pub struct TurnArbiter {
    state: ArbiterState,
}

impl TurnArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ArbiterState {
        self.state
    }

    /// Arm the gate. Called only on successful move execution.
    pub fn record_move(&mut self) {
        self.state = ArbiterState::Yielded;
    }

    /// Termination check: true exactly once per recorded move.
    ///
    /// Consumes a pending handoff, so two polls after one move report
    /// stop-then-continue. Multiple moves per orchestrator turn are
    /// impossible because the first poll already yields.
    pub fn poll(&mut self) -> bool {
        match self.state {
            ArbiterState::Yielded => {
                self.state = ArbiterState::Waiting;
                true
            }
            ArbiterState::Waiting => false,
        }
    }

    pub fn reset(&mut self) {
        self.state = ArbiterState::Waiting;
    }
}
