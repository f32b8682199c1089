//! Non-interactive replay: apply a move list and print the result.

use anyhow::Result;
use std::io::Write;
use strictly_rewind::{GameHistory, GameView, Position};
use tracing::{info, instrument, warn};

/// Applies `cells` to a fresh game, optionally jumps, and writes the view.
///
/// Each cell is an index (0-8) or a position label such as `center`.
/// Unknown cells, rejected moves and rejected jumps are skipped with a
/// warning, the same way the interactive UI ignores them.
#[instrument(skip(out))]
pub fn run_replay(
    cells: &[String],
    jump: Option<usize>,
    json: bool,
    report_draws: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mut game = GameHistory::new();
    for cell in cells {
        let Some(pos) = Position::from_label_or_number(cell) else {
            warn!(%cell, "Skipping unknown cell");
            continue;
        };
        if let Err(e) = game.apply_move(pos) {
            warn!(%cell, error = %e, "Skipping rejected move");
        }
    }
    if let Some(step) = jump {
        if let Err(e) = game.jump_to(step) {
            warn!(error = %e, "Skipping rejected jump");
        }
    }
    info!(len = game.len(), view = game.view(), "Replay finished");

    let view = GameView::new(&game, report_draws);
    if json {
        serde_json::to_writer_pretty(&mut *out, &view)?;
        writeln!(out)?;
    } else {
        write_text(&game, &view, out)?;
    }
    Ok(())
}

fn write_text(game: &GameHistory, view: &GameView, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", game.current().display())?;
    writeln!(out)?;
    writeln!(out, "{}", view.status_line)?;
    writeln!(out)?;
    for item in &view.history {
        let marker = if item.current { '>' } else { ' ' };
        match item.mov {
            Some(mov) => writeln!(out, "{} {} ({})", marker, item.label, mov)?,
            None => writeln!(out, "{} {}", marker, item.label)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(cells: &[&str], jump: Option<usize>, json: bool) -> String {
        let cells: Vec<String> = cells.iter().map(|c| c.to_string()).collect();
        let mut out = Vec::new();
        run_replay(&cells, jump, json, true, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_output() {
        let out = replay(&["0", "1", "4", "2", "8"], None, false);
        assert!(out.starts_with("X|O|O\n-+-+-\n4|X|6\n-+-+-\n7|8|X\n"));
        assert!(out.contains("Winner: X"));
        assert!(out.contains("  Go to game start\n"));
        assert!(out.contains("> Go to move #5 (X -> Bottom-right)\n"));
    }

    #[test]
    fn test_rejected_moves_are_skipped() {
        // 4 twice, then 12 out of bounds, then an unknown label.
        let out = replay(&["4", "4", "12", "corner", "0"], None, false);
        assert!(out.contains("> Go to move #2 (O -> Top-left)"));
        assert!(!out.contains("Go to move #3"));
    }

    #[test]
    fn test_json_output_after_jump() {
        let out = replay(&["4", "0", "8"], Some(1), true);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["view"], 1);
        assert_eq!(value["status_line"], "Next player: O");
        assert_eq!(value["history"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn test_labels_and_indices_mix() {
        let by_label = replay(&["center", "Top-left", "bottom-right"], None, false);
        let by_index = replay(&["4", "0", "8"], None, false);
        assert_eq!(by_label, by_index);
        assert!(by_label.contains("  Go to move #1 (X -> Center)\n"));
    }
}
