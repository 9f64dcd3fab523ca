//! Display functions for the line-based frontends

use super::formatters::{colored_cell, emoji_grid};
use crate::commands::CheckResult;
use crate::game::{Cell, Grid, RenderSink, Session, SessionState};
use colored::Colorize;

/// Print the grid, one row per line
pub fn print_grid(grid: &Grid) {
    println!();
    for row in grid.rows() {
        let tiles: Vec<String> = row.iter().map(|cell| colored_cell(cell).to_string()).collect();
        println!("  {}", tiles.join(" "));
    }
    println!();
}

/// Print the result of the `check` command
pub fn print_check_result(result: &CheckResult) {
    println!(
        "{} vs {}",
        result.guess.text().bright_white().bold(),
        result.target.text().bright_yellow().bold()
    );
    println!("{}", result.feedback.to_emoji());
    for (letter, tag) in result.guess.text().chars().zip(result.feedback.tags()) {
        println!("  {letter}: {tag}");
    }
}

/// Print the end-of-game banner
pub fn print_summary(session: &Session) {
    println!("\n{}", "═".repeat(40).bright_cyan());
    match session.state() {
        SessionState::Won => println!(
            "{}",
            format!("🎉 Solved in {}/6!", session.guesses_used())
                .bright_green()
                .bold()
        ),
        SessionState::Lost => println!("{}", "❌ Out of guesses".red().bold()),
        SessionState::AwaitingInput => {}
    }
    println!("{}", emoji_grid(session.grid()));
    println!("{}", "═".repeat(40).bright_cyan());
}

/// Render sink for the line-based mode
///
/// Cells are not drawn one at a time; the caller reprints the grid after each
/// submitted row. Only messages are echoed here.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl RenderSink for ConsoleSink {
    fn render_cell(&mut self, _row: usize, _col: usize, _cell: &Cell) {}

    fn render_message(&mut self, message: &str) {
        println!("{}", message.bright_yellow().bold());
    }
}
