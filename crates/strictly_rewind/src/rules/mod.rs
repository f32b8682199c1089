//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. They know nothing about
//! history or turns, so the history store can evaluate any recorded step.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Outcome, check_winner, evaluate, winning_line};
