use pairmatch_core::{BoardView, GameStatus, ViewCell};
use std::fmt::Write;

/// Text shown on a card that is face down.
const HIDDEN: &str = "*";

/// Renders the counters line and the grid with row/column labels.
pub fn render_board(view: &BoardView) -> String {
    let width = view
        .cells
        .iter()
        .filter_map(|cell| cell.card())
        .chain([view.size.saturating_sub(1).into()])
        .map(|value| value.to_string().len())
        .max()
        .unwrap_or(1)
        .max(HIDDEN.len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Moves: {}/{}  Time: {}s",
        view.move_count, view.max_moves, view.elapsed_secs
    );

    let _ = write!(out, "{:width$}", "");
    for col in 0..view.size {
        let _ = write!(out, " {col:>width$}");
    }
    out.push('\n');

    for (row, cells) in view.rows().enumerate() {
        let _ = write!(out, "{row:>width$}");
        for cell in cells {
            let text = match cell {
                ViewCell::Hidden => HIDDEN.to_string(),
                ViewCell::FaceUp(card) | ViewCell::Matched(card) => card.to_string(),
            };
            let _ = write!(out, " {text:>width$}");
        }
        out.push('\n');
    }
    out
}

/// Message for a finished game, `None` while it is still being played.
pub fn game_over_message(view: &BoardView) -> Option<String> {
    match view.status {
        GameStatus::InProgress => None,
        GameStatus::Won => Some(format!(
            "Congratulations! You won in {} moves and {} seconds!",
            view.move_count, view.elapsed_secs
        )),
        GameStatus::Lost => Some("You exceeded the maximum moves. Try again!".to_string()),
    }
}
