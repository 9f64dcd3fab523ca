//! Terminal output formatting
//!
//! Display utilities for the line-based frontends.

pub mod display;
pub mod formatters;

pub use display::{ConsoleSink, print_check_result, print_grid, print_summary};
