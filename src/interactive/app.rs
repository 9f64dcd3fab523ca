//! TUI application state and logic

use crate::error::WordSourceError;
use crate::game::{Cell, Event as GameEvent, RenderSink, Session, SessionState, Transition};
use crate::sources::{Authenticator, SessionToken, WordSource};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{info, warn};

/// Application state
pub struct App {
    pub session: Option<Session>,
    pub input_mode: InputMode,
    pub login: LoginForm,
    pub messages: MessageLog,
    pub stats: Statistics,
    pub should_quit: bool,
    source: Box<dyn WordSource>,
    authenticator: Option<Box<dyn Authenticator>>,
    token: Option<SessionToken>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Login,
    Playing,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    pub error: Option<String>,
}

impl LoginForm {
    fn active_field(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Recent status messages, newest last
#[derive(Debug, Default)]
pub struct MessageLog {
    entries: Vec<Message>,
}

impl MessageLog {
    const CAPACITY: usize = 5;

    pub fn push(&mut self, text: &str, style: MessageStyle) {
        self.entries.push(Message {
            text: text.to_string(),
            style,
        });

        if self.entries.len() > Self::CAPACITY {
            self.entries.remove(0);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Message> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Message> {
        self.entries.iter()
    }
}

impl MessageStyle {
    /// Style for messages emitted by a session transition
    const fn for_transition(transition: &Transition) -> Self {
        match transition {
            Transition::Won { .. } => Self::Success,
            _ => Self::Error,
        }
    }
}

/// Messages from one dispatch, held until the transition is known
///
/// The grid is redrawn from session state every frame, so cells are dropped.
#[derive(Debug, Default)]
struct PendingMessages(Vec<String>);

impl RenderSink for PendingMessages {
    fn render_cell(&mut self, _row: usize, _col: usize, _cell: &Cell) {}

    fn render_message(&mut self, message: &str) {
        self.0.push(message.to_string());
    }
}

/// Results for the current run of the program
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    /// Create the app; with an authenticator the player must log in first
    #[must_use]
    pub fn new(source: Box<dyn WordSource>, authenticator: Option<Box<dyn Authenticator>>) -> Self {
        let input_mode = if authenticator.is_some() {
            InputMode::Login
        } else {
            InputMode::Playing
        };

        Self {
            session: None,
            input_mode,
            login: LoginForm::default(),
            messages: MessageLog::default(),
            stats: Statistics::default(),
            should_quit: false,
            source,
            authenticator,
            token: None,
        }
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Fetch a word and start a fresh session
    ///
    /// # Errors
    /// Returns the word source's error; the previous session is kept.
    pub fn new_game(&mut self) -> Result<(), WordSourceError> {
        let session = Session::start(self.source.as_mut())?;
        self.session = Some(session);
        self.input_mode = InputMode::Playing;
        self.messages.clear();
        self.messages.push(
            "Guess the 5-letter word. Type letters, Enter to submit.",
            MessageStyle::Info,
        );
        Ok(())
    }

    /// Check the login form against the authenticator
    ///
    /// Returns `true` once the player is logged in.
    pub fn submit_login(&mut self) -> bool {
        let Some(authenticator) = &self.authenticator else {
            return true;
        };

        match authenticator.authenticate(&self.login.username, &self.login.password) {
            Ok(token) => {
                info!(user = %self.login.username, "logged in");
                self.token = Some(token);
                self.login.error = None;
                self.login.password.clear();
                true
            }
            Err(e) => {
                warn!(error = %e, "login failed");
                self.login.error = Some(e.to_string());
                self.login.password.clear();
                self.login.focus = LoginField::Password;
                false
            }
        }
    }

    /// Apply a game event to the current session
    pub fn play(&mut self, event: GameEvent) -> Transition {
        let Some(session) = self.session.as_mut() else {
            return Transition::Ignored;
        };

        let mut pending = PendingMessages::default();
        let transition = session.dispatch(event, &mut pending);

        let style = MessageStyle::for_transition(&transition);
        for text in &pending.0 {
            self.messages.push(text, style);
        }

        match transition {
            Transition::Won { row, .. } => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.stats.guess_distribution[row + 1] += 1;
                self.game_over();
            }
            Transition::Lost { .. } => {
                self.stats.total_games += 1;
                self.game_over();
            }
            _ => {}
        }

        transition
    }

    fn game_over(&mut self) {
        self.input_mode = InputMode::GameOver;
        self.messages
            .push("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Handle one key press
    ///
    /// # Errors
    /// Returns an error if a new game is requested and no word can be fetched.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), WordSourceError> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.input_mode {
            InputMode::Login => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab | KeyCode::Down | KeyCode::Up => self.login.toggle_focus(),
                KeyCode::Char(c) => self.login.active_field().push(c),
                KeyCode::Backspace => {
                    self.login.active_field().pop();
                }
                KeyCode::Enter => {
                    if self.login.focus == LoginField::Username {
                        self.login.focus = LoginField::Password;
                    } else if self.submit_login() {
                        self.new_game()?;
                    }
                }
                _ => {}
            },
            InputMode::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                code => {
                    if let Some(event) = key_to_event(code) {
                        self.play(event);
                    }
                }
            },
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game()?,
                _ => {}
            },
        }

        Ok(())
    }

    #[must_use]
    pub fn session_state(&self) -> Option<SessionState> {
        self.session.as_ref().map(Session::state)
    }
}

/// Map a key to a game event; other keys have no meaning in play
#[must_use]
pub const fn key_to_event(code: KeyCode) -> Option<GameEvent> {
    match code {
        KeyCode::Char(c) => Some(GameEvent::Character(c)),
        KeyCode::Backspace => Some(GameEvent::Backspace),
        KeyCode::Enter => Some(GameEvent::Submit),
        _ => None,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if no target word can be fetched.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    if app.input_mode == InputMode::Playing {
        app.new_game()?;
    }

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::sources::{AccountAuthenticator, FixedWord};
    use rustc_hash::FxHashMap;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code)).unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    fn app_without_login() -> App {
        let source = FixedWord::new(Word::new("crane").unwrap());
        let mut app = App::new(Box::new(source), None);
        app.new_game().unwrap();
        app
    }

    fn app_with_login() -> App {
        let mut accounts = FxHashMap::default();
        accounts.insert("ada".to_string(), "pw".to_string());
        let source = FixedWord::new(Word::new("crane").unwrap());
        App::new(
            Box::new(source),
            Some(Box::new(AccountAuthenticator::new(accounts))),
        )
    }

    struct FailingSource;

    impl WordSource for FailingSource {
        fn fetch_target_word(&mut self) -> Result<Word, WordSourceError> {
            Err(WordSourceError::Empty)
        }
    }

    #[test]
    fn typing_and_winning() {
        let mut app = app_without_login();
        type_str(&mut app, "trace");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session_state(), Some(SessionState::AwaitingInput));

        type_str(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session_state(), Some(SessionState::Won));
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == crate::game::WIN_MESSAGE && m.style == MessageStyle::Success)
        );
    }

    #[test]
    fn loss_message_is_styled_as_error() {
        let mut app = app_without_login();
        for _ in 0..crate::game::MAX_ROWS {
            type_str(&mut app, "pious");
            press(&mut app, KeyCode::Enter);
        }

        assert_eq!(app.session_state(), Some(SessionState::Lost));
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        let loss = app
            .messages
            .iter()
            .find(|m| m.text.contains("CRANE"))
            .unwrap();
        assert_eq!(loss.text, "Game over! The word was: CRANE");
        assert_eq!(loss.style, MessageStyle::Error);
    }

    #[test]
    fn letters_after_game_over_do_not_reach_grid() {
        let mut app = app_without_login();
        type_str(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        let grid = app.session.as_ref().unwrap().grid().clone();

        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.as_ref().unwrap().grid(), &grid);
    }

    #[test]
    fn new_game_after_game_over() {
        let mut app = app_without_login();
        type_str(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.input_mode, InputMode::Playing);
        assert_eq!(app.session_state(), Some(SessionState::AwaitingInput));
        assert_eq!(app.session.as_ref().unwrap().cursor().row, 0);
    }

    #[test]
    fn incomplete_submit_shows_message() {
        let mut app = app_without_login();
        type_str(&mut app, "cr");
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.messages.latest().map(|m| m.text.as_str()),
            Some(crate::game::INCOMPLETE_MESSAGE)
        );
        assert_eq!(
            app.messages.latest().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = app_without_login();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = app_without_login();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(app.should_quit);
        assert_eq!(app.session.as_ref().unwrap().cursor().col, 0);
    }

    #[test]
    fn login_success_starts_game() {
        let mut app = app_with_login();
        assert_eq!(app.input_mode, InputMode::Login);
        assert!(app.session.is_none());

        type_str(&mut app, "ada");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.login.focus, LoginField::Password);
        type_str(&mut app, "pw");
        press(&mut app, KeyCode::Enter);

        assert!(app.is_logged_in());
        assert_eq!(app.input_mode, InputMode::Playing);
        assert!(app.session.is_some());
    }

    #[test]
    fn login_failure_shows_message() {
        let mut app = app_with_login();
        type_str(&mut app, "ada");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "wrong");
        press(&mut app, KeyCode::Enter);

        assert!(!app.is_logged_in());
        assert_eq!(app.input_mode, InputMode::Login);
        assert_eq!(app.login.error.as_deref(), Some("Login failed."));
        assert!(app.login.password.is_empty());
    }

    #[test]
    fn word_source_failure_is_surfaced() {
        let mut app = App::new(Box::new(FailingSource), None);
        assert!(matches!(app.new_game(), Err(WordSourceError::Empty)));
        assert!(app.session.is_none());
    }

    #[test]
    fn key_mapping() {
        assert_eq!(
            key_to_event(KeyCode::Char('a')),
            Some(GameEvent::Character('a'))
        );
        assert_eq!(key_to_event(KeyCode::Enter), Some(GameEvent::Submit));
        assert_eq!(key_to_event(KeyCode::Backspace), Some(GameEvent::Backspace));
        assert_eq!(key_to_event(KeyCode::Left), None);
    }

    #[test]
    fn win_rate() {
        let stats = Statistics {
            total_games: 4,
            games_won: 3,
            guess_distribution: [0; 7],
        };
        assert!((stats.win_rate() - 75.0).abs() < f64::EPSILON);
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }
}
