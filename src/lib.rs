//! Wordgrid
//!
//! A single-player word-guessing game played in a 6×5 grid of letter cells.
//!
//! # Quick Start
//!
//! ```rust
//! use wordgrid::core::Word;
//! use wordgrid::game::{Event, Session, SessionState};
//!
//! let mut session = Session::new(Word::new("crane").unwrap());
//! for ch in "crane".chars() {
//!     session.handle_event(Event::Character(ch));
//! }
//! session.handle_event(Event::Submit);
//! assert_eq!(session.state(), SessionState::Won);
//! ```

// Core domain types
pub mod core;

// Turn controller
pub mod game;

// Word sources and login
pub mod sources;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub mod config;
pub mod error;
pub mod logging;
