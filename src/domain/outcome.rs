//! Walk outcome types.
//!
//! This module defines how a walk from one starting cell ended.

use serde::{Deserialize, Serialize};

/// Outcome of walking from a single starting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkOutcome {
    /// The path reached the top row
    Reached,
    /// A full cycle of the sequence went by without the path growing
    Stalled,
    /// The step ceiling was hit before the top row
    StepLimit,
}

impl WalkOutcome {
    /// Whether this outcome took the restart transition
    pub fn restarted(&self) -> bool {
        !matches!(self, WalkOutcome::Reached)
    }
}
