//! Cyclic symbol sequence
//!
//! The sequence a walk follows repeats forever: once every symbol of a cycle
//! has been handed out, the next call starts the cycle again from the front.
//! State is an immutable copy of the symbols plus a cursor; there is no queue
//! to refill.

use crate::domain::Symbol;
use crate::error::{MazeError, Result};

/// Infinite, restartable cycle over a fixed, non-empty list of symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclicSequence {
    symbols: Vec<Symbol>,
    cursor: usize,
}

impl CyclicSequence {
    /// Build a sequence from an ordered list of symbols.
    ///
    /// Fails with `InvalidArgument` when `symbols` is empty.
    pub fn new(symbols: Vec<Symbol>) -> Result<Self> {
        if symbols.is_empty() {
            return Err(MazeError::InvalidArgument(
                "zero length sequences are disallowed".to_string(),
            ));
        }
        Ok(Self { symbols, cursor: 0 })
    }

    /// Build a sequence with one symbol per non-whitespace character of `raw`
    pub fn parse(raw: &str) -> Result<Self> {
        Self::new(raw.chars().filter(|c| !c.is_whitespace()).map(Symbol::from).collect())
    }

    /// Start the cycle over, discarding any partial progress
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Hand out the next symbol, wrapping to the front after the last one
    pub fn next_symbol(&mut self) -> Symbol {
        let symbol = self.symbols[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.symbols.len();
        symbol
    }

    /// Symbols not yet handed out in the current cycle, in order
    ///
    /// Immediately after a full cycle (or a reset) this is the whole sequence.
    pub fn remaining(&self) -> &[Symbol] {
        &self.symbols[self.cursor..]
    }

    /// Number of symbols in one cycle
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; construction rejects empty sequences
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl Iterator for CyclicSequence {
    type Item = Symbol;

    fn next(&mut self) -> Option<Symbol> {
        Some(self.next_symbol())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
