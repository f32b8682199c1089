//! Key handling: cursor movement and key-to-action mapping.

use crossterm::event::KeyCode;
use strictly_rewind::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the focused cursor.
    Navigate(KeyCode),
    /// Place at the board cursor, or jump to the selected history entry.
    Select,
    /// Place directly at a position (keys 1-9).
    Place(Position),
    /// Switch focus between board and history list.
    ToggleFocus,
    /// View the previous step.
    StepBack,
    /// View the next step.
    StepForward,
    /// Start a new game.
    Restart,
    /// Leave the app.
    Quit,
}

/// Maps a key to an action, `None` for unbound keys.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::Navigate(key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::Place),
        KeyCode::Tab => Some(Action::ToggleFocus),
        KeyCode::Char('[') => Some(Action::StepBack),
        KeyCode::Char(']') => Some(Action::StepForward),
        KeyCode::Char('n') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves the board cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Moves a list selection up or down within `len` entries.
pub fn move_selection(selected: usize, len: usize, key: KeyCode) -> usize {
    match key {
        KeyCode::Up => selected.saturating_sub(1),
        KeyCode::Down => (selected + 1).min(len.saturating_sub(1)),
        _ => selected,
    }
}
