//! Read model handed to presentation layers.
//!
//! A [`GameView`] is everything a renderer needs to paint one frame: the
//! viewed board, the status line, and the "go to move" list. It is plain
//! data so it can be serialized for non-interactive output.

use crate::history::{GameHistory, GameStatus};
use crate::{Move, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One row of the move list, labeled for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Index into the history.
    pub step: usize,
    /// "Go to game start" or "Go to move #n".
    pub label: String,
    /// Move that produced this step.
    pub mov: Option<Move>,
    /// Whether this step is being viewed.
    pub current: bool,
}

/// Snapshot of the game as a renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Viewed board, row-major, `None` for empty squares.
    pub board: [Option<Player>; 9],
    /// Status of the viewed board.
    pub status: GameStatus,
    /// Human-readable status line.
    pub status_line: String,
    /// Player whose mark the next accepted move places.
    pub to_move: Player,
    /// Viewed step.
    pub view: usize,
    /// Winning line on the viewed board.
    pub winning_line: Option<[Position; 3]>,
    /// Move list, one item per snapshot.
    pub history: Vec<HistoryItem>,
}

impl GameView {
    /// Builds a view, choosing whether full boards report a draw.
    #[instrument(skip(game), fields(view = game.view(), len = game.len()))]
    pub fn new(game: &GameHistory, report_draws: bool) -> Self {
        let status = game.status_with(report_draws);
        let squares = *game.current().squares();
        Self {
            board: squares.map(|sq| sq.player()),
            status,
            status_line: status.to_string(),
            to_move: game.to_move(),
            view: game.view(),
            winning_line: game.winning_line(),
            history: game
                .entries()
                .map(|entry| HistoryItem {
                    step: entry.step,
                    label: entry.label(),
                    mov: entry.mov,
                    current: entry.current,
                })
                .collect(),
        }
    }
}

impl From<&GameHistory> for GameView {
    fn from(game: &GameHistory) -> Self {
        Self::new(game, true)
    }
}
