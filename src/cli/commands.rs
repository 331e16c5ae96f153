//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - solve: print the maze with the walked path highlighted
//! - path: print the walked path as text or JSON
//! - starts: list the bottom-row starting cells

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// colour-maze - walk a colour maze following a repeating sequence
#[derive(Parser, Debug)]
#[command(name = "colour-maze")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Maze input shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct MazeInput {
    /// Maze file, or `-` to read stdin
    pub maze: PathBuf,

    /// Colour sequence to follow, one symbol per character (e.g. OG)
    #[arg(short, long)]
    pub sequence: String,
}

impl MazeInput {
    /// Whether the maze should be read from stdin
    pub fn is_stdin(&self) -> bool {
        self.maze.as_os_str() == "-"
    }
}

/// Output format for the path subcommand
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `row,col` pair per line
    #[default]
    Text,
    /// JSON array of `[row, col]` pairs
    Json,
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the maze with everything off the path masked
    Solve {
        #[command(flatten)]
        input: MazeInput,

        /// Render every starting cell's walk, not just the last one
        #[arg(short, long)]
        all: bool,

        /// Disable colour highlighting of the path
        #[arg(long)]
        no_color: bool,
    },

    /// Print the walked path
    Path {
        #[command(flatten)]
        input: MazeInput,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Print every starting cell's walk, not just the last one
        #[arg(short, long)]
        all: bool,
    },

    /// List the bottom-row cells matching the first symbol
    Starts {
        #[command(flatten)]
        input: MazeInput,
    },
}
