//! Strictly Rewind - tic-tac-toe with move history and time travel
//!
//! The game is a history of board snapshots plus a view position. Moves are
//! made against the viewed board; making one from the past discards the
//! snapshots that came after it. Jumping only moves the view.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw evaluation over a single [`Board`]
//! - **History**: [`GameHistory`], the snapshot store and its two operations
//! - **Invariants**: checks of the snapshot chain, asserted in debug builds
//! - **View**: [`GameView`], the serializable read model for renderers
//!
//! # Example
//!
//! ```
//! use strictly_rewind::{GameHistory, GameStatus, Player, Position};
//!
//! let mut game = GameHistory::new();
//! game.apply_move(Position::Center).unwrap();
//! game.apply_move(Position::TopLeft).unwrap();
//! assert_eq!(game.len(), 3);
//!
//! game.jump_to(1).unwrap();
//! assert_eq!(game.to_move(), Player::O);
//! assert_eq!(game.status(), GameStatus::InProgress { next: Player::O });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{JumpError, Move, MoveError};
pub use history::{GameHistory, GameStatus, HistoryEntry, HistoryError};
pub use position::Position;
pub use rules::Outcome;
pub use types::{Board, Player, Square};
pub use view::{GameView, HistoryItem};
