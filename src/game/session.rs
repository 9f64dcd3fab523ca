//! Session state machine
//!
//! Input is processed one event at a time. Each event either leaves the
//! session untouched (`Ignored`, `Incomplete`) or performs exactly one
//! mutation, described by the returned [`Transition`].

use super::grid::{Cursor, Grid, MAX_COLS, MAX_ROWS};
use super::render::RenderSink;
use crate::core::{Feedback, Word, evaluate};
use crate::error::WordSourceError;
use crate::sources::WordSource;
use tracing::{debug, info, instrument, warn};

/// Message shown when the player guesses the word
pub const WIN_MESSAGE: &str = "Congratulations! You guessed the word.";

/// Message shown when submit is pressed on a partial row
pub const INCOMPLETE_MESSAGE: &str = "Please complete the word.";

/// Message shown when the last row is used up
#[must_use]
pub fn loss_message(target: &Word) -> String {
    format!("Game over! The word was: {target}")
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    Won,
    Lost,
}

/// Discrete input, independent of how it was delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Character(char),
    Backspace,
    Submit,
}

/// What a single event did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed
    Ignored,
    LetterPlaced { row: usize, col: usize },
    LetterRemoved { row: usize, col: usize },
    /// Submit on a partial row; nothing changed
    Incomplete,
    /// Row scored, play continues on the next row
    RowScored { row: usize, feedback: Feedback },
    Won { row: usize, feedback: Feedback },
    Lost { row: usize, feedback: Feedback },
}

impl Transition {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Won { .. } | Self::Lost { .. })
    }
}

/// One play-through from word assignment to win or loss
#[derive(Debug, Clone)]
pub struct Session {
    target: Word,
    grid: Grid,
    cursor: Cursor,
    state: SessionState,
}

impl Session {
    /// Start a session with a known target word
    #[must_use]
    pub fn new(target: Word) -> Self {
        debug!(word = %target, "session created");
        Self {
            target,
            grid: Grid::new(),
            cursor: Cursor::default(),
            state: SessionState::AwaitingInput,
        }
    }

    /// Fetch a target word and start a session with it
    ///
    /// # Errors
    /// Returns the source's `WordSourceError` unchanged; no session is
    /// created without a real target word.
    pub fn start(source: &mut dyn WordSource) -> Result<Self, WordSourceError> {
        let target = source.fetch_target_word().inspect_err(|e| {
            warn!(error = %e, "could not fetch target word");
        })?;
        info!("new session started");
        Ok(Self::new(target))
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != SessionState::AwaitingInput
    }

    /// Number of rows that have been scored
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        match self.state {
            SessionState::Won => self.cursor.row + 1,
            _ => self.cursor.row,
        }
    }

    /// Final message once the session is over
    #[must_use]
    pub fn terminal_message(&self) -> Option<String> {
        match self.state {
            SessionState::AwaitingInput => None,
            SessionState::Won => Some(WIN_MESSAGE.to_string()),
            SessionState::Lost => Some(loss_message(&self.target)),
        }
    }

    /// Route an event to the matching operation
    pub fn handle_event(&mut self, event: Event) -> Transition {
        match event {
            Event::Character(ch) => self.on_character(ch),
            Event::Backspace => self.on_backspace(),
            Event::Submit => self.on_submit(),
        }
    }

    /// Handle an event and push the resulting changes to `sink`
    pub fn dispatch(&mut self, event: Event, sink: &mut impl RenderSink) -> Transition {
        let transition = self.handle_event(event);

        match transition {
            Transition::Ignored => {}
            Transition::LetterPlaced { row, col } | Transition::LetterRemoved { row, col } => {
                sink.render_cell(row, col, self.grid.cell(row, col));
            }
            Transition::Incomplete => sink.render_message(INCOMPLETE_MESSAGE),
            Transition::RowScored { row, .. }
            | Transition::Won { row, .. }
            | Transition::Lost { row, .. } => {
                for (col, cell) in self.grid.row(row).iter().enumerate() {
                    sink.render_cell(row, col, cell);
                }
                if let Some(message) = self.terminal_message() {
                    sink.render_message(&message);
                }
            }
        }

        transition
    }

    /// Type a letter into the active row
    ///
    /// Anything other than a single ASCII letter is ignored, as is input
    /// after the session ends or once the row is full.
    pub fn on_character(&mut self, ch: char) -> Transition {
        if self.is_over() || self.cursor.col == MAX_COLS || !ch.is_ascii_alphabetic() {
            return Transition::Ignored;
        }

        let Cursor { row, col } = self.cursor;
        // ASCII checked above
        self.grid.set_letter(row, col, ch.to_ascii_uppercase() as u8);
        self.cursor.col += 1;

        Transition::LetterPlaced { row, col }
    }

    /// Remove the last letter of the active row
    pub fn on_backspace(&mut self) -> Transition {
        if self.is_over() || self.cursor.col == 0 {
            return Transition::Ignored;
        }

        self.cursor.col -= 1;
        let Cursor { row, col } = self.cursor;
        self.grid.clear(row, col);

        Transition::LetterRemoved { row, col }
    }

    /// Score the active row if it is full
    #[instrument(level = "debug", skip(self), fields(row = self.cursor.row))]
    pub fn on_submit(&mut self) -> Transition {
        if self.is_over() {
            return Transition::Ignored;
        }
        if self.cursor.col != MAX_COLS {
            debug!(col = self.cursor.col, "submit on incomplete row");
            return Transition::Incomplete;
        }

        let row = self.cursor.row;
        let Some(guess) = self
            .grid
            .row_letters(row)
            .and_then(|letters| Word::from_letters(letters).ok())
        else {
            return Transition::Incomplete;
        };

        let feedback = evaluate(&guess, &self.target);
        self.grid.apply_feedback(row, &feedback);
        debug!(guess = %guess, feedback = %feedback.to_emoji(), "row scored");

        if feedback.is_perfect() {
            self.state = SessionState::Won;
            info!(guesses = row + 1, "session won");
            return Transition::Won { row, feedback };
        }

        self.cursor.row += 1;
        self.cursor.col = 0;

        if self.cursor.row == MAX_ROWS {
            self.state = SessionState::Lost;
            info!(guesses = MAX_ROWS, "session lost");
            return Transition::Lost { row, feedback };
        }

        Transition::RowScored { row, feedback }
    }
}
