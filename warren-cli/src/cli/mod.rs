//! Command-line interface orchestration for the warren maze generator.
//!
//! The CLI offers a `carve` command that generates a grid maze, carves it
//! with randomized-weight Kruskal, optionally solves it, and renders the
//! result as ASCII art.

mod commands;
mod render;

pub use commands::{CarveCommand, CarveSummary, Cli, CliError, Command, run_cli};
pub use render::render_summary;

#[cfg(test)]
mod tests;
