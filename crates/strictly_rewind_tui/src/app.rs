//! Application state and logic.

use crate::input::{Action, move_cursor, move_selection};
use crossterm::event::KeyCode;
use strictly_rewind::{GameHistory, GameStatus, GameView, Position};
use tracing::{debug, info, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the history selection.
    History,
}

impl Focus {
    /// Toggles between the two panels.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
///
/// Owns the one game history. Every key press is handled to completion
/// before the next frame is drawn.
#[derive(Debug)]
pub struct App {
    game: GameHistory,
    cursor: Position,
    focus: Focus,
    selected: usize,
    report_draws: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(report_draws: bool) -> Self {
        Self {
            game: GameHistory::new(),
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            report_draws,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected history entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Status of the viewed board, honoring the draw setting.
    pub fn status(&self) -> GameStatus {
        self.game.status_with(self.report_draws)
    }

    /// Read model for the renderer.
    pub fn view(&self) -> GameView {
        GameView::new(&self.game, self.report_draws)
    }

    /// Handles a key press. Returns `false` when the app should exit.
    #[instrument(skip(self), fields(view = self.game.view(), focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        let Some(action) = crate::input::action_for(key) else {
            return true;
        };
        debug!(?action, "Handling action");

        match action {
            Action::Quit => {
                info!("User quit");
                return false;
            }
            Action::Navigate(key) => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::History => {
                    self.selected = move_selection(self.selected, self.game.len(), key)
                }
            },
            Action::Select => match self.focus {
                Focus::Board => self.place(self.cursor),
                Focus::History => self.jump(self.selected),
            },
            Action::Place(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Action::ToggleFocus => {
                self.focus = self.focus.toggle();
                self.selected = self.game.view();
            }
            Action::StepBack => self.jump(self.game.view().saturating_sub(1)),
            Action::StepForward => self.jump(self.game.view() + 1),
            Action::Restart => {
                self.game.restart();
                self.selected = 0;
                info!("Game restarted");
            }
        }
        true
    }

    /// Places at `pos`. Rejected moves leave everything as it was.
    fn place(&mut self, pos: Position) {
        match self.game.apply_move(pos) {
            Ok(()) => {
                info!(position = %pos, status = %self.status(), "Move applied");
                self.selected = self.game.view();
            }
            Err(e) => debug!(error = %e, "Move ignored"),
        }
    }

    /// Views `step`. Out-of-range steps are ignored.
    fn jump(&mut self, step: usize) {
        match self.game.jump_to(step) {
            Ok(()) => self.selected = step,
            Err(e) => debug!(error = %e, "Jump ignored"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_rewind::Player;

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            assert!(app.handle_key(*key));
        }
    }

    #[test]
    fn test_digits_play_moves() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('1')]);
        assert_eq!(app.game().len(), 3);
        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.status(), GameStatus::InProgress { next: Player::X });
    }

    #[test]
    fn test_cursor_and_enter_place() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert!(!app.game().current().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_history_panel_jumps() {
        let mut app = App::new(true);
        press(
            &mut app,
            &[KeyCode::Char('1'), KeyCode::Char('2'), KeyCode::Char('3')],
        );
        press(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.game().view(), 1);
        assert_eq!(app.game().len(), 4);
        assert_eq!(app.game().to_move(), Player::O);
    }

    #[test]
    fn test_brackets_step_through_history() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('1')]);
        press(&mut app, &[KeyCode::Char('['), KeyCode::Char('[')]);
        assert_eq!(app.game().view(), 0);
        press(&mut app, &[KeyCode::Char('['), KeyCode::Char(']')]);
        assert_eq!(app.game().view(), 1);
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_occupied_square_is_silently_ignored() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('5')]);
        assert_eq!(app.game().len(), 2);
        assert_eq!(app.status(), GameStatus::InProgress { next: Player::O });
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('n')]);
        assert_eq!(app.game().len(), 1);
        assert!(!app.handle_key(KeyCode::Char('q')));
    }
}
