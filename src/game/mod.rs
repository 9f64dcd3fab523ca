//! Turn controller for one play-through
//!
//! A [`Session`] owns the grid, the cursor and the target word, and advances
//! one discrete [`Event`] at a time. Frontends feed it events and mirror the
//! returned [`Transition`] through a [`RenderSink`].

mod grid;
mod render;
mod session;

pub use grid::{Cell, Cursor, Grid, MAX_COLS, MAX_ROWS};
pub use render::RenderSink;
pub use session::{
    Event, INCOMPLETE_MESSAGE, Session, SessionState, Transition, WIN_MESSAGE, loss_message,
};
