//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{
    App, InputMode, LoginField, LoginForm, Message, MessageLog, MessageStyle, Statistics,
    key_to_event, run_tui,
};
