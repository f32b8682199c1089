//! Game history store with time travel.
//!
//! The store keeps every board the game has passed through and a view
//! position selecting one of them. Whose turn it is follows from the view
//! position alone, so jumping around can never leave a stale turn behind.

use crate::action::{JumpError, Move, MoveError};
use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::rules::{Outcome, evaluate, is_full, winning_line};
use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Status of the viewed board, as shown to the players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted; `next` places the next mark.
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// The player completed a line.
    Won(Player),
    /// Board full, nobody won.
    Draw,
}

impl GameStatus {
    /// True once the viewed board is won or drawn.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won(player) => write!(f, "Winner: {}", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// One row of the "go to move" list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Index into the history.
    pub step: usize,
    /// Move that produced this snapshot (`None` for the game start).
    pub mov: Option<Move>,
    /// Whether this step is the one being viewed.
    pub current: bool,
}

impl HistoryEntry {
    /// Label for the jump control of this entry.
    pub fn label(&self) -> String {
        if self.step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.step)
        }
    }
}

/// Ordered board snapshots plus the viewed step.
///
/// Index 0 is always the empty board. Every later snapshot differs from its
/// predecessor in exactly one square. Deserialization checks the full
/// invariant set and refuses histories that break it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistoryRecord")]
pub struct GameHistory {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) view: usize,
}

/// Unchecked serialized form of a [`GameHistory`].
#[derive(Deserialize)]
struct HistoryRecord {
    snapshots: Vec<Board>,
    view: usize,
}

/// A recorded history that breaks the snapshot model.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Inconsistent history: {}", details)]
pub struct HistoryError {
    /// Descriptions of the violated invariants.
    pub details: String,
}

impl TryFrom<HistoryRecord> for GameHistory {
    type Error = HistoryError;

    fn try_from(record: HistoryRecord) -> Result<Self, Self::Error> {
        let game = Self {
            snapshots: record.snapshots,
            view: record.view,
        };
        HistoryInvariants::check_all(&game).map_err(|violations| {
            let details = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            debug!(%details, "Rejected recorded history");
            HistoryError { details }
        })?;
        Ok(game)
    }
}

impl GameHistory {
    /// Creates a fresh game: one empty board, viewed.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            view: 0,
        }
    }

    /// Replays `positions` from the start of a fresh game.
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument(skip(positions))]
    pub fn replay(
        positions: impl IntoIterator<Item = Position>,
    ) -> Result<Self, MoveError> {
        let mut history = Self::new();
        for pos in positions {
            history.apply_move(pos)?;
        }
        Ok(history)
    }

    /// Places the current player's mark at `pos` on the viewed board.
    ///
    /// On success every snapshot after the view is discarded, the new board
    /// is appended, and the view moves to it. On rejection nothing changes,
    /// not even the future snapshots.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the viewed board already has a winner.
    /// - [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(view = self.view, len = self.snapshots.len()))]
    pub fn apply_move(&mut self, pos: Position) -> Result<(), MoveError> {
        let current = *self.current();

        if let Outcome::Won(winner) = evaluate(&current) {
            debug!(%winner, "Move rejected, game already won");
            return Err(MoveError::GameOver(winner));
        }
        if !current.is_empty(pos) {
            debug!("Move rejected, square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move();
        let discarded = self.snapshots.len() - (self.view + 1);
        self.snapshots.truncate(self.view + 1);
        self.snapshots.push(current.with(pos, player));
        self.view = self.snapshots.len() - 1;

        debug!(%player, discarded, view = self.view, "Move applied");
        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "history invariants violated after move"
        );
        Ok(())
    }

    /// Raw-index entry point for presentation layers.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for indices past 8, otherwise as
    /// [`GameHistory::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> Result<(), MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.apply_move(pos)
    }

    /// Views the snapshot at `step`. History is left alone.
    ///
    /// # Errors
    ///
    /// [`JumpError::OutOfRange`] if `step` is not a recorded snapshot.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        if step >= self.snapshots.len() {
            debug!("Jump rejected");
            return Err(JumpError::OutOfRange {
                step,
                len: self.snapshots.len(),
            });
        }
        self.view = step;
        debug!(view = self.view, to_move = %self.to_move(), "Jumped");
        Ok(())
    }

    /// Views the previous snapshot.
    pub fn step_back(&mut self) -> Result<(), JumpError> {
        match self.view.checked_sub(1) {
            Some(step) => self.jump_to(step),
            None => Err(JumpError::OutOfRange {
                step: 0,
                len: self.snapshots.len(),
            }),
        }
    }

    /// Views the next snapshot, if one was kept.
    pub fn step_forward(&mut self) -> Result<(), JumpError> {
        self.jump_to(self.view + 1)
    }

    /// Throws the whole history away and starts over.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!(len = self.snapshots.len(), "Restarting");
        *self = Self::new();
    }

    /// The viewed board.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.view]
    }

    /// The viewed step.
    pub fn view(&self) -> usize {
        self.view
    }

    /// Number of recorded snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the game start is never discarded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// True when the view is on the newest snapshot.
    pub fn at_latest(&self) -> bool {
        self.view + 1 == self.snapshots.len()
    }

    /// All recorded snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Snapshot at `step`, if recorded.
    pub fn snapshot(&self, step: usize) -> Option<&Board> {
        self.snapshots.get(step)
    }

    /// Player whose mark the next accepted move places.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.view)
    }

    /// Winner evaluation of the viewed board.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.current())
    }

    /// Winning line on the viewed board.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        winning_line(self.current())
    }

    /// Status of the viewed board, reporting draws.
    pub fn status(&self) -> GameStatus {
        self.status_with(true)
    }

    /// Status of the viewed board.
    ///
    /// With `report_draws` off a full board without a winner stays
    /// `InProgress`, naming the player who would move next.
    pub fn status_with(&self, report_draws: bool) -> GameStatus {
        match self.outcome() {
            Outcome::Won(player) => GameStatus::Won(player),
            Outcome::Undecided if report_draws && is_full(self.current()) => GameStatus::Draw,
            Outcome::Undecided => GameStatus::InProgress {
                next: self.to_move(),
            },
        }
    }

    /// The move that produced snapshot `step`.
    ///
    /// `None` for step 0 and for steps not recorded.
    pub fn move_at(&self, step: usize) -> Option<Move> {
        let before = self.snapshots.get(step.checked_sub(1)?)?;
        let after = self.snapshots.get(step)?;
        let position = *before.diff(after).first()?;
        let player = after.get(position).player()?;
        Some(Move::new(player, position))
    }

    /// One entry per snapshot, for the "go to move" list.
    pub fn entries(&self) -> impl Iterator<Item = HistoryEntry> + '_ {
        (0..self.snapshots.len()).map(move |step| HistoryEntry {
            step,
            mov: self.move_at(step),
            current: step == self.view,
        })
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
