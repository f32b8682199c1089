//! "Go to move" list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use strictly_rewind::GameView;

/// Renders one entry per snapshot; the viewed step is bold and the
/// selection is highlighted while the list has focus.
pub fn render_history(f: &mut Frame, area: Rect, view: &GameView, selected: Option<usize>) {
    let items: Vec<ListItem> = view
        .history
        .iter()
        .map(|item| {
            let style = if item.current {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let mut spans = vec![Span::styled(item.label.clone(), style)];
            if let Some(mov) = item.mov {
                spans.push(Span::styled(
                    format!("  ({mov})"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = if selected.is_some() { "History [focused]" } else { "History" };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, area, &mut state);
}
