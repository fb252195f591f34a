//! Scripted replay of a fixed move list

use super::{MoveProposer, ProposalContext, ProposeError};

/// Replays a predetermined sequence of move strings, one per prompt.
///
/// The script is taken at face value: entries are proposed verbatim, so a
/// bad entry surfaces as ordinary rejection feedback and the next prompt
/// still advances the cursor. Used for opening books in demos and for
/// driving known sequences in tests.
pub struct ScriptedProposer {
    name: String,
    moves: Vec<String>,
    cursor: usize,
}

impl ScriptedProposer {
    pub fn new<I, S>(name: impl Into<String>, moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            moves: moves.into_iter().map(Into::into).collect(),
            cursor: 0,
        }
    }

    /// How many scripted moves remain
    pub fn remaining(&self) -> usize {
        self.moves.len().saturating_sub(self.cursor)
    }
}

impl MoveProposer for ScriptedProposer {
    fn name(&self) -> &str {
        &self.name
    }

    fn propose(&mut self, _ctx: &ProposalContext<'_>) -> Result<String, ProposeError> {
        let mv = self
            .moves
            .get(self.cursor)
            .cloned()
            .ok_or(ProposeError::ScriptExhausted(self.moves.len()))?;
        self.cursor += 1;
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ProposalContext<'static> {
        ProposalContext {
            legal_moves: "e2e4, d2d4",
            last_feedback: None,
            ply: 0,
        }
    }

    #[test]
    fn test_replays_in_order_then_exhausts() {
        let mut agent = ScriptedProposer::new("script", ["e2e4", "g1f3"]);
        assert_eq!(agent.remaining(), 2);
        assert_eq!(agent.propose(&ctx()), Ok("e2e4".to_string()));
        assert_eq!(agent.propose(&ctx()), Ok("g1f3".to_string()));
        assert_eq!(agent.remaining(), 0);
        assert_eq!(agent.propose(&ctx()), Err(ProposeError::ScriptExhausted(2)));
    }
}
