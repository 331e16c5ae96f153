//! Domain types for colour-maze
//!
//! This module contains the values the walk operates on:
//! - Symbol: a single colour token, either a grid cell or a sequence element
//! - Position: a `(row, col)` cell coordinate, row 0 at the top
//! - Path: the ordered cells visited by one walk
//! - WalkOutcome: how a walk from one starting cell ended

pub mod outcome;
pub mod path;
pub mod position;
pub mod symbol;

pub use outcome::WalkOutcome;
pub use path::Path;
pub use position::Position;
pub use symbol::Symbol;
