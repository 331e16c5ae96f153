//! colour-maze - walk a colour maze by following a repeating sequence
//!
//! A maze is a grid of colour tokens. Starting on the bottom row, a walker
//! steps to orthogonal neighbours whose colour matches the next symbol of a
//! cyclic sequence until it reaches the top row. The walk is greedy and never
//! backtracks.

pub mod domain;
pub mod error;
pub mod grid;
pub mod render;
pub mod runner;
pub mod sequence;
pub mod walker;

pub use domain::{Path, Position, Symbol, WalkOutcome};
pub use error::{MazeError, Result};
pub use grid::Grid;
pub use runner::{MazeRunner, RunnerConfig, Walk, run};
pub use sequence::CyclicSequence;
pub use walker::{FallbackPolicy, Step, Walker, WalkerConfig};
