//! Letter grid and cursor

use crate::core::{Feedback, Tag, WORD_LEN};

/// Number of guesses per session
pub const MAX_ROWS: usize = 6;

/// Letters per guess
pub const MAX_COLS: usize = WORD_LEN;

/// One grid cell: an optional letter and its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<u8>,
    pub tag: Tag,
}

impl Cell {
    /// Letter as a displayable char, or `' '` when empty
    #[must_use]
    pub fn display_char(&self) -> char {
        self.letter.map_or(' ', char::from)
    }
}

/// Active (row, column) position
///
/// `row` reaches `MAX_ROWS` only once the last row has been scored, and `col`
/// reaches `MAX_COLS` when the active row is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// Fixed `MAX_ROWS` x `MAX_COLS` matrix of cells
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: [[Cell; MAX_COLS]; MAX_ROWS],
}

impl Grid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    /// Panics if `row >= MAX_ROWS` or `col >= MAX_COLS`
    #[inline]
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row][col]
    }

    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell; MAX_COLS] {
        &self.cells[row]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; MAX_COLS]> {
        self.cells.iter()
    }

    pub(crate) fn set_letter(&mut self, row: usize, col: usize, letter: u8) {
        self.cells[row][col].letter = Some(letter);
    }

    pub(crate) fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Cell::default();
    }

    /// Letters of a row, or `None` if any cell is still empty
    #[must_use]
    pub fn row_letters(&self, row: usize) -> Option<[u8; MAX_COLS]> {
        let mut letters = [0u8; MAX_COLS];
        for (slot, cell) in letters.iter_mut().zip(&self.cells[row]) {
            *slot = cell.letter?;
        }
        Some(letters)
    }

    pub(crate) fn apply_feedback(&mut self, row: usize, feedback: &Feedback) {
        for (cell, &tag) in self.cells[row].iter_mut().zip(feedback.tags()) {
            cell.tag = tag;
        }
    }
}
