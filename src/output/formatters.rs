//! Formatting utilities for terminal output

use crate::core::Tag;
use crate::game::{Cell, Grid};
use colored::{ColoredString, Colorize};

/// Render a cell as a 3-character colored tile, e.g. `" A "` on green
#[must_use]
pub fn colored_cell(cell: &Cell) -> ColoredString {
    let text = format!(" {} ", cell.display_char());
    match cell.tag {
        Tag::Correct => text.black().on_green().bold(),
        Tag::Misplaced => text.black().on_yellow().bold(),
        Tag::Wrong => text.white().on_bright_black(),
        Tag::Unset => text.bright_white().bold(),
    }
}

/// Emoji rows for every scored row of the grid
#[must_use]
pub fn emoji_grid(grid: &Grid) -> String {
    grid.rows()
        .filter(|row| row.iter().all(|cell| cell.tag != Tag::Unset))
        .map(|row| row.iter().map(|cell| cell.tag.emoji()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::Session;

    fn play(target: &str, guesses: &[&str]) -> Session {
        let mut session = Session::new(Word::new(target).unwrap());
        for guess in guesses {
            for ch in guess.chars() {
                session.on_character(ch);
            }
            session.on_submit();
        }
        session
    }

    #[test]
    fn emoji_grid_empty_session() {
        let session = play("crane", &[]);
        assert_eq!(emoji_grid(session.grid()), "");
    }

    #[test]
    fn emoji_grid_scored_rows_only() {
        let mut session = play("crane", &["trace", "crane"]);
        session.on_character('x');
        assert_eq!(emoji_grid(session.grid()), "⬜🟩🟩🟨🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn colored_cell_keeps_letter() {
        colored::control::set_override(false);
        let cell = Cell {
            letter: Some(b'A'),
            tag: Tag::Correct,
        };
        assert_eq!(colored_cell(&cell).to_string(), " A ");
    }
}
