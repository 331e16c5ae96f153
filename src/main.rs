use clap::Parser;
use colored::*;
use colour_maze::render::{self, RenderOptions};
use colour_maze::{CyclicSequence, Grid, MazeRunner, Walk, WalkOutcome};
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

mod cli;
mod config;

use cli::Cli;
use cli::commands::{Commands, MazeInput, OutputFormat};
use config::Config;

fn setup_logging(config: &Config, verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("colour-maze")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("colour-maze.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let level = if verbose {
        "debug"
    } else {
        config.log_level.as_deref().unwrap_or("info")
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn read_maze(input: &MazeInput) -> Result<String> {
    if input.is_stdin() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read maze from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(&input.maze).context(format!("Failed to read maze from {}", input.maze.display()))
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    let runner = MazeRunner::with_config(config.walk.runner_config());

    match &cli.command {
        Commands::Solve { input, all, no_color } => {
            handle_solve_command(input, *all, config.render.options(*no_color), &runner)
        }
        Commands::Path { input, format, all } => handle_path_command(input, *format, *all, &runner),
        Commands::Starts { input } => handle_starts_command(input),
    }
}

fn outcome_label(outcome: WalkOutcome) -> ColoredString {
    match outcome {
        WalkOutcome::Reached => "reached top".green(),
        WalkOutcome::Stalled => "stalled".yellow(),
        WalkOutcome::StepLimit => "step limit".red(),
    }
}

fn print_walk_header(walk: &Walk) {
    println!(
        "{} {} ({}, {} step(s))",
        "Start:".cyan(),
        walk.start,
        outcome_label(walk.outcome),
        walk.steps
    );
}

fn handle_solve_command(input: &MazeInput, all: bool, opts: RenderOptions, runner: &MazeRunner) -> Result<()> {
    info!("Solving maze {} with sequence {}", input.maze.display(), input.sequence);
    let text = read_maze(input)?;
    let grid = Grid::parse(&text).context("Failed to parse maze")?;
    let mut sequence = CyclicSequence::parse(&input.sequence).context("Invalid sequence")?;

    let walks = runner.walk_grid(&grid, &mut sequence);
    if walks.is_empty() {
        println!("{}", "No starting cells match the first symbol".yellow());
        return Ok(());
    }

    if !all {
        // Only the last starting cell's walk is reported by default
        if let Some(walk) = walks.last() {
            println!("{}", render::render(&grid, &walk.path, &opts));
        }
        return Ok(());
    }

    for (i, walk) in walks.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_walk_header(walk);
        println!("{}", render::render(&grid, &walk.path, &opts));
    }
    Ok(())
}

fn handle_path_command(input: &MazeInput, format: OutputFormat, all: bool, runner: &MazeRunner) -> Result<()> {
    info!("Printing path for {} ({:?}, all: {})", input.maze.display(), format, all);
    let text = read_maze(input)?;

    if all {
        let walks = runner.walks(&text, &input.sequence).context("Failed to walk maze")?;
        match format {
            OutputFormat::Json => println!("{}", render::walks_json(&walks)?),
            OutputFormat::Text => {
                for walk in &walks {
                    print_walk_header(walk);
                    println!("{}", render::path_text(&walk.path));
                }
            }
        }
        return Ok(());
    }

    let path = runner.run(&text, &input.sequence).context("Failed to walk maze")?;
    match format {
        OutputFormat::Json => println!("{}", render::path_json(&path)?),
        OutputFormat::Text => println!("{}", render::path_text(&path)),
    }
    Ok(())
}

fn handle_starts_command(input: &MazeInput) -> Result<()> {
    info!("Listing starting cells for {}", input.maze.display());
    let text = read_maze(input)?;
    let grid = Grid::parse(&text).context("Failed to parse maze")?;
    let mut sequence = CyclicSequence::parse(&input.sequence).context("Invalid sequence")?;

    let starts = MazeRunner::starting_positions(&grid, &mut sequence);
    if starts.is_empty() {
        println!("{}", "No starting cells match the first symbol".yellow());
    }
    for pos in starts {
        println!("{}", pos);
    }
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging once the configured level is known
    setup_logging(&config, cli.is_verbose()).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
