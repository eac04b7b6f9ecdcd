//! Command implementations and argument parsing for the warren CLI.

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{info, instrument};

use warren_maze::{GridMaze, KruskalCarver, MazeError, Room, Wall, solve};

const DEFAULT_ROWS: usize = 10;
const DEFAULT_COLS: usize = 10;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "warren", about = "Generate and solve grid mazes.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Carve a maze and render it to stdout.
    Carve(CarveCommand),
}

/// Options accepted by the `carve` command.
#[derive(Debug, Args, Clone)]
pub struct CarveCommand {
    /// Number of room rows.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of room columns.
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Fixed seed for a reproducible maze; defaults to entropy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Overlay the route from the top-left to the bottom-right room.
    #[arg(long)]
    pub solve: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Maze construction, carving, or routing failed.
    #[error(transparent)]
    Maze(#[from] MazeError),
}

/// The outcome of a carve, ready for rendering.
#[derive(Debug, Clone)]
pub struct CarveSummary {
    /// The maze that was carved.
    pub maze: GridMaze,
    /// Walls removed by the carver.
    pub removed: Vec<Wall>,
    /// Route from the top-left to the bottom-right room, when requested.
    pub route: Option<Vec<Room>>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when maze generation, carving, or routing fails.
pub fn run_cli(cli: Cli) -> Result<CarveSummary, CliError> {
    match cli.command {
        Command::Carve(command) => run_carve(command),
    }
}

#[instrument(
    name = "cli.carve",
    skip(command),
    fields(rows = command.rows, cols = command.cols, seeded = command.seed.is_some()),
    err
)]
fn run_carve(command: CarveCommand) -> Result<CarveSummary, CliError> {
    let maze = GridMaze::new(command.rows, command.cols)?;
    let carver = command
        .seed
        .map_or_else(KruskalCarver::new, KruskalCarver::with_seed);
    let removed = carver.walls_to_remove(&maze)?;

    let route = if command.solve {
        let entrance = Room::new(0, 0);
        let exit = Room::new(maze.rows() - 1, maze.cols() - 1);
        Some(solve(&maze, &removed, entrance, exit)?)
    } else {
        None
    };

    info!(
        rooms = maze.room_count(),
        passages = removed.len(),
        solved = route.is_some(),
        "maze carved"
    );
    Ok(CarveSummary {
        maze,
        removed,
        route,
    })
}
