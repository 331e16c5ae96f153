//! The colour grid
//!
//! A grid is parsed once from text and never mutated. Rows are listed top to
//! bottom; the last row is where walks start.

use log::{debug, warn};

use crate::domain::{Position, Symbol};
use crate::error::{MazeError, Result};

/// Immutable 2-D array of symbols, row 0 at the top
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Symbol>>,
}

impl Grid {
    /// Parse grid text: one row per line, one symbol per whitespace-separated token.
    ///
    /// Blank lines before the first row and after the last are ignored. A blank
    /// line between rows, or text with no tokens at all, is a parse error.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<(usize, &str)> = text.lines().enumerate().collect();
        let first = lines.iter().position(|(_, l)| !l.trim().is_empty());
        let last = lines.iter().rposition(|(_, l)| !l.trim().is_empty());

        let (first, last) = match (first, last) {
            (Some(f), Some(l)) => (f, l),
            _ => return Err(MazeError::Parse("grid is empty".to_string())),
        };

        let mut rows = Vec::with_capacity(last - first + 1);
        for &(lineno, line) in &lines[first..=last] {
            let row: Vec<Symbol> = line.split_whitespace().map(Symbol::from).collect();
            if row.is_empty() {
                return Err(MazeError::Parse(format!("blank row at line {}", lineno + 1)));
            }
            rows.push(row);
        }

        let grid = Self { rows };
        if !grid.is_rectangular() {
            warn!("Grid rows have differing lengths; short rows end early");
        }
        debug!("Parsed grid with {} rows", grid.rows());
        Ok(grid)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Length of the given row, 0 if the row does not exist
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// Whether every row has the same length
    pub fn is_rectangular(&self) -> bool {
        self.rows.windows(2).all(|w| w[0].len() == w[1].len())
    }

    /// Rows top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Symbol]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// The symbol at `pos`, or `None` when out of bounds
    pub fn symbol_at(&self, pos: Position) -> Option<&Symbol> {
        self.rows.get(pos.row)?.get(pos.col)
    }

    /// Whether the cell at `pos` exists and holds `target`
    pub fn is_match(&self, pos: Position, target: &Symbol) -> bool {
        self.symbol_at(pos) == Some(target)
    }

    /// In-bounds orthogonal neighbours holding a non-empty symbol.
    ///
    /// Order is fixed: down, right, up, left. The walker's tie-break depends on it.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        pos.orthogonal()
            .filter(|&p| self.symbol_at(p).is_some_and(|s| !s.is_empty()))
            .collect()
    }

    /// Cells on the bottom row holding `symbol`, left to right
    pub fn starting_positions(&self, symbol: &Symbol) -> Vec<Position> {
        let Some(last) = self.rows.len().checked_sub(1) else {
            return Vec::new();
        };
        self.rows[last]
            .iter()
            .enumerate()
            .filter(|(_, s)| *s == symbol)
            .map(|(col, _)| Position::new(last, col))
            .collect()
    }
}
