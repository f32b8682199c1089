//! Genesis invariant: the history starts from an empty board.

use super::Invariant;
use crate::{Board, GameHistory};

/// Invariant: snapshot 0 exists and is the empty board.
pub struct GenesisEmptyInvariant;

impl Invariant<GameHistory> for GenesisEmptyInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.snapshots.first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts from the empty board"
    }
}
