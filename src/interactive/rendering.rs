//! TUI rendering with ratatui

use super::app::{App, InputMode, LoginField, MessageStyle};
use crate::core::Tag;
use crate::game::{Cell, Cursor, MAX_COLS, Session};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match app.input_mode {
        InputMode::Login => render_login(f, app, chunks[1]),
        InputMode::Playing | InputMode::GameOver => {
            let main_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(chunks[1]);

            render_grid(f, app, main_chunks[0]);
            render_messages(f, app, main_chunks[1]);
        }
    }

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDGRID")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_login(f: &mut Frame, app: &App, area: Rect) {
    let field_style = |field: LoginField| {
        if app.login.focus == field {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Username: ", field_style(LoginField::Username)),
            Span::raw(app.login.username.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Password: ", field_style(LoginField::Password)),
            Span::raw("*".repeat(app.login.password.chars().count())),
        ]),
        Line::from(""),
    ];

    if let Some(error) = &app.login.error {
        lines.push(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )));
    }

    let form = Paragraph::new(lines).block(
        Block::default()
            .title(" Log in ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double),
    );
    f.render_widget(form, area);
}

fn tile_style(tag: Tag) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match tag {
        Tag::Correct => base.fg(Color::Black).bg(Color::Green),
        Tag::Misplaced => base.fg(Color::Black).bg(Color::Yellow),
        Tag::Wrong => base.fg(Color::White).bg(Color::DarkGray),
        Tag::Unset => base.fg(Color::White),
    }
}

fn grid_line(session: &Session, row: usize) -> Line<'static> {
    let Cursor {
        row: active_row,
        col: active_col,
    } = session.cursor();

    let mut spans = Vec::with_capacity(MAX_COLS * 2);
    for (col, cell) in session.grid().row(row).iter().enumerate() {
        let is_cursor = !session.is_over() && row == active_row && col == active_col;
        spans.push(tile_span(cell, is_cursor));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn tile_span(cell: &Cell, is_cursor: bool) -> Span<'static> {
    let text = match cell.letter {
        Some(_) => format!(" {} ", cell.display_char()),
        None if is_cursor => " _ ".to_string(),
        None => " · ".to_string(),
    };
    Span::styled(text, tile_style(cell.tag))
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let content: Vec<Line> = match &app.session {
        Some(session) => (0..crate::game::MAX_ROWS)
            .flat_map(|row| [grid_line(session, row), Line::from("")])
            .collect(),
        None => vec![Line::from("No game in progress")],
    };

    let grid = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Grid ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(grid, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let guess_text = app.session.as_ref().map_or_else(String::new, |s| {
        format!("Guesses: {}/{}", s.guesses_used(), crate::game::MAX_ROWS)
    });
    f.render_widget(
        Paragraph::new(guess_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::Login => "Tab: Switch field | Enter: Log in | Esc: Quit",
        InputMode::Playing => "Enter: Submit | Backspace: Delete | Esc: Quit",
        InputMode::GameOver => "n: New Game | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::sources::FixedWord;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_typed_letters() {
        let source = FixedWord::new(Word::new("crane").unwrap());
        let mut app = App::new(Box::new(source), None);
        app.new_game().unwrap();
        for ch in "qz".chars() {
            app.play(crate::game::Event::Character(ch));
        }

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains(" Q "));
        assert!(text.contains(" Z "));
        assert!(text.contains("Guesses: 0/6"));
    }

    #[test]
    fn renders_login_form_with_masked_password() {
        use crate::sources::OpenAuthenticator;

        let source = FixedWord::new(Word::new("crane").unwrap());
        let mut app = App::new(Box::new(source), Some(Box::new(OpenAuthenticator)));
        app.login.username = "ada".to_string();
        app.login.password = "secret".to_string();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Username: ada"));
        assert!(text.contains("******"));
        assert!(!text.contains("secret"));
    }
}
