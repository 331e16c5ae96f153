//! Grid coordinates

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell coordinate, row 0 is the top row
///
/// Serialized as a `[row, col]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this cell sits on the top row
    pub fn is_top(&self) -> bool {
        self.row == 0
    }

    /// Orthogonal neighbour coordinates in walk priority order: down, right, up, left.
    ///
    /// Coordinates that would go negative are dropped here; the upper bounds
    /// are the grid's business.
    pub fn orthogonal(&self) -> impl Iterator<Item = Position> {
        let Position { row, col } = *self;
        [
            Some(Position::new(row + 1, col)),
            Some(Position::new(row, col + 1)),
            row.checked_sub(1).map(|r| Position::new(r, col)),
            col.checked_sub(1).map(|c| Position::new(row, c)),
        ]
        .into_iter()
        .flatten()
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orthogonal_order_interior() {
        let got: Vec<_> = Position::new(2, 2).orthogonal().collect();
        assert_eq!(
            got,
            vec![
                Position::new(3, 2),
                Position::new(2, 3),
                Position::new(1, 2),
                Position::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_orthogonal_drops_negative_coordinates() {
        let got: Vec<_> = Position::new(0, 0).orthogonal().collect();
        assert_eq!(got, vec![Position::new(1, 0), Position::new(0, 1)]);
    }

    #[test]
    fn test_is_top() {
        assert!(Position::new(0, 4).is_top());
        assert!(!Position::new(1, 0).is_top());
    }

    #[test]
    fn test_position_serializes_as_pair() {
        let json = serde_json::to_string(&Position::new(4, 1)).unwrap();
        assert_eq!(json, "[4,1]");
        let back: Position = serde_json::from_str("[0,3]").unwrap();
        assert_eq!(back, Position::new(0, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 1).to_string(), "(3, 1)");
    }
}
