//! Display adapter for walked mazes
//!
//! Cells off the path are masked with a placeholder glyph; path cells keep
//! their symbol and can be highlighted for terminals.

use colored::Colorize;
use serde::Serialize;

use crate::domain::{Path, Position, WalkOutcome};
use crate::error::Result;
use crate::grid::Grid;
use crate::runner::Walk;

/// Glyph used for cells that are not on the path
pub const DEFAULT_PLACEHOLDER: &str = "\\";

/// Options for rendering a grid with a path
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub placeholder: String,
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            color: false,
        }
    }
}

/// Render `grid` with every cell off `path` replaced by the placeholder.
///
/// Rows are space-joined and newline-separated, no trailing newline.
pub fn render(grid: &Grid, path: &Path, opts: &RenderOptions) -> String {
    let cells = path.cells();
    grid.iter_rows()
        .enumerate()
        .map(|(row, symbols)| {
            symbols
                .iter()
                .enumerate()
                .map(|(col, sym)| {
                    if !cells.contains(&Position::new(row, col)) {
                        opts.placeholder.clone()
                    } else if opts.color {
                        sym.as_str().green().bold().to_string()
                    } else {
                        sym.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Path as a JSON array of `[row, col]` pairs
pub fn path_json(path: &Path) -> Result<String> {
    Ok(serde_json::to_string(path)?)
}

#[derive(Serialize)]
struct WalkRecord<'a> {
    start: Position,
    outcome: WalkOutcome,
    steps: usize,
    path: &'a Path,
}

/// Every walk of a run as a pretty-printed JSON array
pub fn walks_json(walks: &[Walk]) -> Result<String> {
    let records: Vec<WalkRecord<'_>> = walks
        .iter()
        .map(|w| WalkRecord {
            start: w.start,
            outcome: w.outcome,
            steps: w.steps,
            path: &w.path,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Path as one `row,col` pair per line
pub fn path_text(path: &Path) -> String {
    path.iter()
        .map(|p| format!("{},{}", p.row, p.col))
        .collect::<Vec<_>>()
        .join("\n")
}
