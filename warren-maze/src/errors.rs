use thiserror::Error;

use warren_core::GraphError;

/// Errors surfaced while building, carving, or solving a maze.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum MazeError {
    /// Maze dimensions must both be at least one room.
    #[error("maze dimensions {rows}x{cols} contain no rooms")]
    EmptyMaze {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// A referenced room lies outside the maze grid.
    #[error("room ({row}, {col}) is outside the maze")]
    UnknownRoom {
        /// Row of the offending room.
        row: usize,
        /// Column of the offending room.
        col: usize,
    },
    /// A wall was passed that does not belong to the maze being queried.
    #[error("wall {id} does not belong to this maze")]
    ForeignWall {
        /// Identifier of the offending wall.
        id: usize,
    },
    /// The underlying graph query failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
