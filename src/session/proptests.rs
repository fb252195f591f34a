//! Property-based tests for the session invariants
//!
//! Three properties hold across all inputs: the board stays a legal
//! position under any sequence of legal moves, rejected input mutates
//! nothing, and every successful execute yields exactly one handoff.

use super::*;
use chess::Board;
use proptest::prelude::*;
use std::str::FromStr;

fn fresh_session() -> GameSession {
    GameSession::new(GameConfig::default())
}

/// Strings that can never parse as a coordinate move
fn arb_garbage() -> impl Strategy<Value = String> {
    "[x-z]{2}[0-9]{2}"
}

/// Arbitrary short agent babble; may or may not happen to be a move
fn arb_babble() -> impl Strategy<Value = String> {
    "[a-h1-8qz]{0,6}"
}

/// Index walk through the legal move list, one index per ply
fn arb_walk() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..60)
}

proptest! {
    /// Legal-move walks keep the board a position the rules engine accepts.
    #[test]
    fn board_stays_legal_under_legal_walks(walk in arb_walk()) {
        let mut session = fresh_session();
        let mut executed = 0;
        for idx in walk {
            let moves = session.board().legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[idx as usize % moves.len()].to_string();
            let report = session.try_execute(&mv);
            executed += 1;
            prop_assert!(report.is_ok(), "listed move rejected: {}", mv);
            prop_assert!(Board::from_str(&session.board().fen()).is_ok());
            // One artifact per executed move, one handoff per execute.
            prop_assert_eq!(session.history().len(), executed);
            prop_assert!(session.should_yield());
            prop_assert!(!session.should_yield());
        }
    }

    /// Garbage never parses, never mutates, and errors identically twice.
    #[test]
    fn garbage_is_rejected_without_mutation(input in arb_garbage()) {
        let mut session = fresh_session();
        let fen_before = session.board().fen();
        let first = session.try_execute(&input);
        let second = session.try_execute(&input);
        prop_assert_eq!(first.clone(), Err(MoveError::invalid_syntax(input.clone())));
        prop_assert_eq!(first, second);
        prop_assert_eq!(session.board().fen(), fen_before);
        prop_assert!(session.history().is_empty());
        prop_assert!(!session.should_yield());
    }

    /// Whatever an agent sends, execute either advances the game by exactly
    /// one ply and one handoff, or leaves the session untouched.
    #[test]
    fn execute_is_all_or_nothing(input in arb_babble()) {
        let mut session = fresh_session();
        let fen_before = session.board().fen();
        match session.try_execute(&input) {
            Ok(_) => {
                prop_assert_ne!(session.board().fen(), fen_before);
                prop_assert_eq!(session.history().len(), 1);
                prop_assert!(session.should_yield());
                prop_assert!(!session.should_yield());
            }
            Err(_) => {
                prop_assert_eq!(session.board().fen(), fen_before);
                prop_assert!(session.history().is_empty());
                prop_assert!(!session.should_yield());
            }
        }
    }
}
