//! Uniformly random legal play

use super::{MoveProposer, ProposalContext, ProposeError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Picks uniformly from the offered legal moves. The zero-intelligence
/// baseline opponent for demos and tests.
pub struct RandomProposer {
    name: String,
    rng: StdRng,
}

impl RandomProposer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic variant for reproducible games
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveProposer for RandomProposer {
    fn name(&self) -> &str {
        &self.name
    }

    fn propose(&mut self, ctx: &ProposalContext<'_>) -> Result<String, ProposeError> {
        let choices: Vec<&str> = ctx
            .legal_moves
            .split(", ")
            .filter(|s| !s.is_empty())
            .collect();
        choices
            .choose(&mut self.rng)
            .map(|mv| (*mv).to_string())
            .ok_or(ProposeError::NoLegalMoves)
    }
}
