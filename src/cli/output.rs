//! Output formatting for the terminal renderer

use std::io::{self, Write};

use crate::{board::Board, session::Session};

/// Render the board with each occupied cell tagged by its owner's initial
/// and, when non-zero, its age.
pub fn render_board(board: &Board) -> String {
    let cells: Vec<String> = board
        .cells()
        .iter()
        .map(|cell| match cell.placement() {
            Some(p) => {
                let initial = p.owner.initial();
                if p.age > 0 {
                    format!("{}{}{}", p.piece.value, initial, p.age)
                } else {
                    format!("{}{}", p.piece.value, initial)
                }
            }
            None => ".".to_string(),
        })
        .collect();

    let width = cells
        .iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(1);

    cells
        .chunks(board.cols())
        .map(|row| {
            row.iter()
                .map(|c| format!("{c:<width$}"))
                .collect::<Vec<_>>()
                .join(" ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write a section header
pub fn print_section(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n{title}")?;
    writeln!(out, "{}", "-".repeat(40))
}

/// Write everything a renderer shows for the session
pub fn print_session(out: &mut impl Write, session: &Session) -> io::Result<()> {
    print_section(&mut *out, &format!("Step {}", session.history().step()))?;
    writeln!(out, "{}", render_board(session.current_board()))?;
    writeln!(out)?;
    writeln!(out, "{}", session.status())?;

    let pieces: Vec<String> = session
        .config()
        .pieces
        .iter()
        .enumerate()
        .map(|(i, piece)| {
            let marker = if i == session.selected_piece_index() {
                "*"
            } else {
                " "
            };
            format!("{marker}p {i}: {} ({})", piece.value, piece.name)
        })
        .collect();
    writeln!(out, "{}", pieces.join("  "))?;

    if let Some(labels) = session.move_labels() {
        for label in labels {
            let marker = if label.step == session.history().step() {
                ">"
            } else {
                " "
            };
            writeln!(out, "{marker} j {}: {label}", label.step)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board::Position, config::GameConfig};

    #[test]
    fn test_render_tags_owner_and_age() {
        let mut session = Session::new(GameConfig::tree_planting()).unwrap();
        session.on_cell_selected(Position::new(0, 0)).unwrap();
        session.on_cell_selected(Position::new(1, 1)).unwrap();

        let rendered = render_board(session.current_board());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("⋀s1"));
        assert!(lines[1].contains("⋀w"));
        // Columns are padded to the widest cell
        assert_eq!(lines[2], ".   .   .");
    }

    #[test]
    fn test_print_session_lists_moves() {
        let mut session = Session::new(GameConfig::classic()).unwrap();
        session.on_cell_selected(Position::new(0, 0)).unwrap();

        let mut out = Vec::new();
        print_session(&mut out, &session).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Step 1"));
        assert!(text.contains("Current player: O"));
        assert!(text.contains("  j 0: Go to game start"));
        assert!(text.contains("> j 1: Go to move #1"));
    }

    #[test]
    fn test_render_empty_board() {
        let rendered = render_board(&crate::board::Board::classic());
        assert_eq!(rendered, ". . .\n. . .\n. . .");
    }
}
