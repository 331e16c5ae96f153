//! Runner module - walks a maze from every starting cell.
//!
//! This module provides the orchestration around the walker, including:
//! - MazeRunner for parsing input and walking each starting cell
//! - Walk for the per-start result (path plus outcome)
//! - RunnerConfig for the step ceiling and fallback policy

mod maze_runner;

pub use maze_runner::{MazeRunner, RunnerConfig, Walk, run};
