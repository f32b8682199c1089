//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in evaluation order.
///
/// Rows top to bottom, then columns left to right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Result of evaluating a board for a winning line.
///
/// A full board without a line is `Undecided`, same as a board in play.
/// Use [`super::is_draw`] to tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player holds three in a row.
    Won(Player),
    /// No line is complete.
    Undecided,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            Outcome::Undecided => None,
        }
    }

    /// True when a player has won.
    pub fn is_decided(self) -> bool {
        matches!(self, Outcome::Won(_))
    }
}

/// Finds the first complete line and its owner.
fn first_line(board: &Board) -> Option<([Position; 3], Player)> {
    LINES.into_iter().find_map(|[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some(([a, b, c], player))
            }
            _ => None,
        }
    })
}

/// Evaluates the board for a winner.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    match first_line(board) {
        Some((_, player)) => Outcome::Won(player),
        None => Outcome::Undecided,
    }
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).winner()
}

/// Returns the first winning line on the board, if any.
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    first_line(board).map(|(line, _)| line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(line: [Position; 3], player: Player) -> Board {
        let mut board = Board::new();
        for pos in line {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(evaluate(&board), Outcome::Undecided);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_both_players() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let board = filled(line, player);
                assert_eq!(evaluate(&board), Outcome::Won(player), "{line:?}");
                assert_eq!(winning_line(&board), Some(line));
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::O));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_is_reported() {
        // X owns the top row and the left column; the row comes first.
        let mut board = filled(LINES[0], Player::X);
        board.set(Position::MiddleLeft, Square::Occupied(Player::X));
        board.set(Position::BottomLeft, Square::Occupied(Player::X));
        assert_eq!(winning_line(&board), Some(LINES[0]));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }
}
