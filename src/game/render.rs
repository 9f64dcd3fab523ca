//! Rendering seam between the turn controller and a frontend

use super::grid::Cell;

/// Sink the session pushes state into after each mutation
///
/// Presentation is entirely up to the implementor.
pub trait RenderSink {
    /// Draw (or redraw) a single cell
    fn render_cell(&mut self, row: usize, col: usize, cell: &Cell);

    /// Show a status or terminal message
    fn render_message(&mut self, message: &str);
}

/// Discards everything; used when a frontend redraws from the grid directly
impl RenderSink for () {
    fn render_cell(&mut self, _row: usize, _col: usize, _cell: &Cell) {}

    fn render_message(&mut self, _message: &str) {}
}
