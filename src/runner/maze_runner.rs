//! Maze runner implementation - walks each starting cell toward the top row.
//!
//! The first symbol of the sequence picks the starting cells on the bottom
//! row. From each of them the runner pulls symbols from the cycle and asks
//! the walker for a step until the path reaches row 0 or the walk has to
//! restart.

use log::{debug, info};

use crate::domain::{Path, Position, WalkOutcome};
use crate::error::Result;
use crate::grid::Grid;
use crate::sequence::CyclicSequence;
use crate::walker::{Walker, WalkerConfig};

/// Configuration for the MazeRunner.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Maximum symbols pulled per starting cell before giving up
    pub max_steps: usize,
    /// Walker behaviour
    pub walker: WalkerConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            max_steps: 10_000,
            walker: WalkerConfig::default(),
        }
    }
}

/// The walk from one starting cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    pub start: Position,
    pub path: Path,
    pub outcome: WalkOutcome,
    /// Symbols pulled from the sequence during this walk
    pub steps: usize,
}

/// MazeRunner drives the walker from every starting cell.
///
/// Each starting cell goes through:
/// 1. WALKING: pull a symbol, take a step
/// 2. DONE when the last cell of the path is on row 0
/// 3. RESTARTING when a full cycle passes without the path growing, or the
///    step ceiling is hit: the sequence is reset and one symbol discarded
///
/// The sequence cursor is shared by all starting cells of a run; a walk that
/// reaches the top hands the cursor on as-is.
#[derive(Debug, Clone, Default)]
pub struct MazeRunner {
    walker: Walker,
    config: RunnerConfig,
}

impl MazeRunner {
    /// Create a new MazeRunner with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MazeRunner with custom configuration.
    pub fn with_config(config: RunnerConfig) -> Self {
        Self {
            walker: Walker::with_config(config.walker.clone()),
            config,
        }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Parse the inputs and return the path of the last starting cell walked.
    ///
    /// Earlier starting cells are walked (they advance the shared sequence)
    /// but their paths are dropped. No starting cell yields an empty path.
    /// Use [`MazeRunner::walks`] to keep every path.
    pub fn run(&self, raw_grid: &str, raw_sequence: &str) -> Result<Path> {
        let walks = self.walks(raw_grid, raw_sequence)?;
        Ok(walks.into_iter().last().map(|w| w.path).unwrap_or_default())
    }

    /// Parse the inputs and walk every starting cell, in ascending column order.
    pub fn walks(&self, raw_grid: &str, raw_sequence: &str) -> Result<Vec<Walk>> {
        let grid = Grid::parse(raw_grid)?;
        let mut sequence = CyclicSequence::parse(raw_sequence)?;
        Ok(self.walk_grid(&grid, &mut sequence))
    }

    /// Walk every starting cell of an already parsed grid.
    pub fn walk_grid(&self, grid: &Grid, sequence: &mut CyclicSequence) -> Vec<Walk> {
        let starts = Self::starting_positions(grid, sequence);
        info!("Walking from {} starting cell(s)", starts.len());
        starts
            .into_iter()
            .map(|start| self.walk_from(grid, start, sequence))
            .collect()
    }

    /// Reset `sequence`, consume its first symbol and find the bottom-row cells holding it.
    pub fn starting_positions(grid: &Grid, sequence: &mut CyclicSequence) -> Vec<Position> {
        sequence.reset();
        let first = sequence.next_symbol();
        let starts = grid.starting_positions(&first);
        debug!("Starting symbol {} matches {} cell(s)", first, starts.len());
        starts
    }

    /// Walk from one starting cell until it reaches the top or restarts.
    fn walk_from(&self, grid: &Grid, start: Position, sequence: &mut CyclicSequence) -> Walk {
        let mut path = Path::new(start);
        let mut steps = 0;
        let mut idle = 0;
        debug!("Walking from {}", start);

        let outcome = loop {
            let current = match path.last() {
                Some(pos) => pos,
                None => break WalkOutcome::Stalled,
            };
            let target = sequence.next_symbol();
            let step = self.walker.step(grid, current, &target, &mut path);
            steps += 1;

            if path.reached_top() {
                break WalkOutcome::Reached;
            }

            idle = if step.progressed() { 0 } else { idle + 1 };
            // A whole cycle without growth returns to the same state forever.
            if idle >= sequence.len() {
                break WalkOutcome::Stalled;
            }
            if steps >= self.config.max_steps {
                break WalkOutcome::StepLimit;
            }
        };

        if outcome.restarted() {
            debug!("Restarting sequence after {:?} at {}", outcome, start);
            sequence.reset();
            sequence.next_symbol();
        }
        info!(
            "Walk from {} ended {:?} after {} step(s), path length {}",
            start,
            outcome,
            steps,
            path.len()
        );

        Walk {
            start,
            path,
            outcome,
            steps,
        }
    }
}

/// Walk the maze with the default configuration and return the last path.
pub fn run(raw_grid: &str, raw_sequence: &str) -> Result<Path> {
    MazeRunner::new().run(raw_grid, raw_sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MazeError;
    use crate::walker::FallbackPolicy;

    const MAZE: &str = "B O R O Y\nO R B G R\nB O G O Y\nY G B Y G\nR O R B R";

    #[test]
    fn test_run_end_to_end() {
        let path = run(MAZE, "OG").unwrap();
        assert_eq!(
            path.to_pairs(),
            vec![(4, 1), (3, 1), (2, 1), (2, 2), (2, 3), (1, 3), (0, 3)]
        );
    }

    #[test]
    fn test_walks_reports_outcome() {
        let walks = MazeRunner::new().walks(MAZE, "OG").unwrap();
        assert_eq!(walks.len(), 1);
        assert_eq!(walks[0].start, Position::new(4, 1));
        assert_eq!(walks[0].outcome, WalkOutcome::Reached);
        assert_eq!(walks[0].steps, 6);
    }

    #[test]
    fn test_no_starting_cell_gives_empty_path() {
        let path = run(MAZE, "GO").unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_empty_sequence_is_fatal() {
        assert!(matches!(run(MAZE, ""), Err(MazeError::InvalidArgument(_))));
    }

    #[test]
    fn test_empty_grid_is_fatal() {
        assert!(matches!(run("", "OG"), Err(MazeError::Parse(_))));
    }

    #[test]
    fn test_stalled_walk_restarts_sequence() {
        // The lone O on the bottom row has no G neighbour anywhere.
        let grid = Grid::parse("G B\nB B\nO B").unwrap();
        let mut seq = CyclicSequence::parse("OG").unwrap();
        let walks = MazeRunner::new().walk_grid(&grid, &mut seq);
        assert_eq!(walks.len(), 1);
        assert_eq!(walks[0].outcome, WalkOutcome::Stalled);
        assert_eq!(walks[0].path.to_pairs(), vec![(2, 0)]);
        // reset then one symbol consumed
        assert_eq!(seq.remaining(), &[crate::domain::Symbol::from('G')]);
    }

    #[test]
    fn test_short_stall_keeps_walking() {
        // No X anywhere: the X step stalls, but G and O still lead to the top.
        let grid = Grid::parse("O B\nG B\nO B").unwrap();
        let mut seq = CyclicSequence::parse("OXG").unwrap();
        let walks = MazeRunner::new().walk_grid(&grid, &mut seq);
        assert_eq!(walks.len(), 1);
        assert_eq!(walks[0].outcome, WalkOutcome::Reached);
        assert_eq!(walks[0].steps, 3);
        assert_eq!(walks[0].path.to_pairs(), vec![(2, 0), (1, 0), (0, 0)]);
    }

    #[test]
    fn test_sequence_whitespace_is_not_a_step() {
        // Spaces are dropped, so "O G" walks exactly like "OG".
        let spaced = MazeRunner::new().walks(MAZE, "O G").unwrap();
        let plain = MazeRunner::new().walks(MAZE, "OG").unwrap();
        assert_eq!(spaced, plain);
        assert_eq!(spaced[0].steps, 6);
        assert_eq!(spaced[0].outcome, WalkOutcome::Reached);
    }

    #[test]
    fn test_step_limit_bounds_oscillation() {
        // Two O cells bounce back and forth forever via the fallback phase.
        let runner = MazeRunner::with_config(RunnerConfig {
            max_steps: 25,
            ..RunnerConfig::default()
        });
        let walks = runner.walks("B B\nO B\nO B", "O").unwrap();
        assert_eq!(walks.len(), 1);
        assert_eq!(walks[0].outcome, WalkOutcome::StepLimit);
        assert_eq!(walks[0].steps, 25);
        assert_eq!(walks[0].path.len(), 26);
    }

    #[test]
    fn test_run_returns_last_starting_cell() {
        // Both bottom R cells reach the top; the rightmost one is returned.
        let maze = "R B R\nR B R\nR B R";
        let walks = MazeRunner::new().walks(maze, "R").unwrap();
        assert_eq!(walks.len(), 2);
        assert!(walks.iter().all(|w| w.outcome == WalkOutcome::Reached));
        let path = run(maze, "R").unwrap();
        assert_eq!(path.to_pairs(), vec![(2, 2), (1, 2), (0, 2)]);
    }

    #[test]
    fn test_first_only_fallback_agrees_on_clean_walk() {
        let maze = "R G R\nR O R\nR G R";
        let literal = MazeRunner::new();
        let first_only = MazeRunner::with_config(RunnerConfig {
            max_steps: 4,
            walker: WalkerConfig {
                fallback: FallbackPolicy::FirstOnly,
            },
        });
        let a = literal.walks(maze, "GO").unwrap();
        let b = first_only.walks(maze, "GO").unwrap();
        // G(2,1) -> O(1,1) -> G(0,1) reaches the top either way
        assert_eq!(a[0].path.to_pairs(), vec![(2, 1), (1, 1), (0, 1)]);
        assert_eq!(a[0].path, b[0].path);
    }
}
