//! CLI module for colour-maze - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for solving a maze,
//! printing the walked path, and listing starting cells.

pub mod commands;

pub use commands::Cli;
