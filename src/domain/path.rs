//! Walk paths

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Position;

/// Ordered cells visited by a walk, starting cell first
///
/// Revisits are allowed, so the same position may appear more than once.
/// The set of distinct cells is kept alongside the order for O(1) lookups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Position>", into = "Vec<Position>")]
pub struct Path {
    cells: Vec<Position>,
    visited: HashSet<Position>,
}

impl Path {
    /// Start a path at the given cell
    pub fn new(start: Position) -> Self {
        Self::from(vec![start])
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell the walk currently stands on
    pub fn last(&self) -> Option<Position> {
        self.cells.last().copied()
    }

    pub fn first(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    pub fn push(&mut self, pos: Position) {
        self.cells.push(pos);
        self.visited.insert(pos);
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.visited.contains(pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter()
    }

    /// Distinct cells on the path
    pub fn cells(&self) -> &HashSet<Position> {
        &self.visited
    }

    /// Whether the walk ended on the top row
    pub fn reached_top(&self) -> bool {
        self.last().is_some_and(|p| p.is_top())
    }

    /// The path as plain `(row, col)` pairs
    pub fn to_pairs(&self) -> Vec<(usize, usize)> {
        self.cells.iter().map(|&p| p.into()).collect()
    }
}

// The visited set is derived from the order, so equality only looks at the order.
impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Path {}

impl From<Vec<Position>> for Path {
    fn from(cells: Vec<Position>) -> Self {
        let visited = cells.iter().copied().collect();
        Self { cells, visited }
    }
}

impl From<Path> for Vec<Position> {
    fn from(path: Path) -> Self {
        path.cells
    }
}

impl From<Vec<(usize, usize)>> for Path {
    fn from(pairs: Vec<(usize, usize)>) -> Self {
        Self::from(pairs.into_iter().map(Position::from).collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
