//! Snapshot chain invariant: each move fills exactly one empty square.

use super::Invariant;
use crate::{GameHistory, Player, Square};

/// Invariant: snapshot `i` differs from snapshot `i - 1` in exactly one
/// square, which went from empty to the mark of move `i`.
///
/// Move `i` (1-based) is X's when `i` is odd and O's when `i` is even.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameHistory> for SingleCellDeltaInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.snapshots
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let changed = pair[0].diff(&pair[1]);
                let [pos] = changed.as_slice() else {
                    return false;
                };
                pair[0].get(*pos) == Square::Empty
                    && pair[1].get(*pos) == Square::Occupied(Player::for_step(i))
            })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one empty square with the mover's mark"
    }
}
