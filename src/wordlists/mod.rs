//! Word lists for target selection
//!
//! Provides the embedded answer list compiled into the binary, plus loading
//! from plain-text files.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};
