//! View position invariant: the view always names a recorded snapshot.

use super::Invariant;
use crate::GameHistory;

/// Invariant: `0 <= view < len`.
pub struct ViewInBoundsInvariant;

impl Invariant<GameHistory> for ViewInBoundsInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.view < game.snapshots.len()
    }

    fn description() -> &'static str {
        "View position selects a recorded snapshot"
    }
}
