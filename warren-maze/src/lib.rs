//! Grid mazes carved with randomized-weight spanning trees.
//!
//! A [`GridMaze`] starts with every wall standing. The [`KruskalCarver`]
//! assigns each wall a transient random weight, asks `warren-core` for a
//! minimum spanning tree over the rooms, and returns the walls whose removal
//! leaves every room reachable exactly once — a perfect maze. [`solve`]
//! routes between two rooms of a carved maze.

mod carver;
mod errors;
mod maze;
mod route;

pub use carver::KruskalCarver;
pub use errors::MazeError;
pub use maze::{GridMaze, Room, Wall};
pub use route::solve;
