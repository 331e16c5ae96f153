//! The stepping algorithm.
//!
//! One step looks at the orthogonal neighbours of the current cell (down,
//! right, up, left) and extends the path with a cell holding the target
//! symbol. Unvisited cells win; when every match has been visited already the
//! fallback phase applies.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::domain::{Path, Position, Symbol};
use crate::grid::Grid;

/// What the fallback phase does when no unvisited neighbour matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackPolicy {
    /// Append every matching neighbour, in priority order
    #[default]
    AppendAll,
    /// Append only the first matching neighbour
    FirstOnly,
}

/// Configuration for the Walker.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    pub fallback: FallbackPolicy,
}

/// Result of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// An unvisited matching neighbour was appended
    Advanced(Position),
    /// Only visited neighbours matched; this many cells were appended
    Fallback(usize),
    /// No neighbour holds the target symbol, the path is unchanged
    Stalled,
}

impl Step {
    /// Whether the path grew
    pub fn progressed(&self) -> bool {
        !matches!(self, Step::Stalled)
    }
}

/// Greedy, non-backtracking stepper over a grid.
#[derive(Debug, Clone, Default)]
pub struct Walker {
    config: WalkerConfig,
}

impl Walker {
    /// Create a new Walker with the default (append-all) fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new Walker with custom configuration.
    pub fn with_config(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn fallback(&self) -> FallbackPolicy {
        self.config.fallback
    }

    /// Extend `path` from `position` toward a cell holding `target`.
    ///
    /// Phase 1 takes the first unvisited matching neighbour and stops there.
    /// Phase 2 runs only if phase 1 found nothing and appends the visited
    /// matches according to the fallback policy.
    pub fn step(&self, grid: &Grid, position: Position, target: &Symbol, path: &mut Path) -> Step {
        let neighbors = grid.neighbors(position);

        if let Some(&next) = neighbors
            .iter()
            .find(|&&p| grid.is_match(p, target) && !path.contains(&p))
        {
            trace!("{} -> {} on {}", position, next, target);
            path.push(next);
            return Step::Advanced(next);
        }

        let matches = neighbors.into_iter().filter(|&p| grid.is_match(p, target));
        let appended = match self.config.fallback {
            FallbackPolicy::AppendAll => matches.fold(0, |n, p| {
                path.push(p);
                n + 1
            }),
            FallbackPolicy::FirstOnly => matches.take(1).fold(0, |n, p| {
                path.push(p);
                n + 1
            }),
        };

        if appended == 0 {
            trace!("{} stalled on {}", position, target);
            Step::Stalled
        } else {
            trace!("{} fell back to {} visited cell(s) on {}", position, appended, target);
            Step::Fallback(appended)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::CyclicSequence;

    const MAZE: &str = "B O R O Y\nO R B G R\nB O G O Y\nY G B Y G\nR O R B R";

    #[test]
    fn test_step_takes_unvisited_match() {
        let grid = Grid::parse(MAZE).unwrap();
        let walker = Walker::new();
        let mut seq = CyclicSequence::parse("OG").unwrap();
        seq.reset();
        seq.next_symbol();

        let mut path = Path::from(vec![(4, 1)]);
        let step = walker.step(&grid, Position::new(4, 1), &seq.next_symbol(), &mut path);
        assert_eq!(step, Step::Advanced(Position::new(3, 1)));
        assert_eq!(path, Path::from(vec![(4, 1), (3, 1)]));

        let step = walker.step(&grid, Position::new(3, 1), &seq.next_symbol(), &mut path);
        assert_eq!(step, Step::Advanced(Position::new(2, 1)));
        assert_eq!(path, Path::from(vec![(4, 1), (3, 1), (2, 1)]));
    }

    #[test]
    fn test_step_prefers_unvisited_over_priority() {
        // Down (1, 0) is visited, right (0, 1) is not; both hold G.
        let grid = Grid::parse("O G\nG R").unwrap();
        let mut path = Path::from(vec![(1, 0), (0, 0)]);
        let step = Walker::new().step(&grid, Position::new(0, 0), &Symbol::from('G'), &mut path);
        assert_eq!(step, Step::Advanced(Position::new(0, 1)));
    }

    #[test]
    fn test_step_stalls_without_match() {
        let grid = Grid::parse(MAZE).unwrap();
        let mut path = Path::from(vec![(4, 1)]);
        let step = Walker::new().step(&grid, Position::new(4, 1), &Symbol::from('Y'), &mut path);
        assert_eq!(step, Step::Stalled);
        assert!(!step.progressed());
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_fallback_appends_every_visited_match() {
        // From (1, 1) both down (2, 1) and up (0, 1) hold G and both are visited.
        let grid = Grid::parse("R G R\nR O R\nR G R").unwrap();
        let mut path = Path::from(vec![(2, 1), (1, 1), (0, 1), (1, 1)]);
        let step = Walker::new().step(&grid, Position::new(1, 1), &Symbol::from('G'), &mut path);
        assert_eq!(step, Step::Fallback(2));
        assert_eq!(
            path,
            Path::from(vec![(2, 1), (1, 1), (0, 1), (1, 1), (2, 1), (0, 1)])
        );
    }

    #[test]
    fn test_fallback_first_only() {
        let grid = Grid::parse("R G R\nR O R\nR G R").unwrap();
        let walker = Walker::with_config(WalkerConfig {
            fallback: FallbackPolicy::FirstOnly,
        });
        assert_eq!(walker.fallback(), FallbackPolicy::FirstOnly);
        let mut path = Path::from(vec![(2, 1), (1, 1), (0, 1), (1, 1)]);
        let step = walker.step(&grid, Position::new(1, 1), &Symbol::from('G'), &mut path);
        assert_eq!(step, Step::Fallback(1));
        assert_eq!(path.last(), Some(Position::new(2, 1)));
    }

    #[test]
    fn test_fallback_policy_serde() {
        let policy: FallbackPolicy = serde_yaml::from_str("first-only").unwrap();
        assert_eq!(policy, FallbackPolicy::FirstOnly);
        assert_eq!(FallbackPolicy::default(), FallbackPolicy::AppendAll);
    }
}
