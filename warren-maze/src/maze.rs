//! The grid-maze entity model: rooms and the walls between them.

use crate::errors::MazeError;

/// A room addressed by its grid position.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Room {
    row: usize,
    col: usize,
}

impl Room {
    /// Creates a room at the given grid position.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the room's row.
    #[must_use]
    #[rustfmt::skip]
    pub fn row(self) -> usize { self.row }

    /// Returns the room's column.
    #[must_use]
    #[rustfmt::skip]
    pub fn col(self) -> usize { self.col }
}

/// A wall standing between two orthogonally adjacent rooms.
///
/// Walls carry a stable identifier so a carve result can be related back to
/// the maze it came from. They carry no weight: carving weights are
/// transient and never written into the maze.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Wall {
    pub(crate) id: usize,
    pub(crate) rooms: (Room, Room),
}

impl Wall {
    /// Returns the wall's identifier, its position in [`GridMaze::walls`].
    #[must_use]
    #[rustfmt::skip]
    pub fn id(self) -> usize { self.id }

    /// Returns the two rooms the wall separates.
    #[must_use]
    #[rustfmt::skip]
    pub fn rooms(self) -> (Room, Room) { self.rooms }
}

/// A rectangular grid of rooms with every wall standing.
///
/// # Examples
/// ```
/// use warren_maze::GridMaze;
///
/// let maze = GridMaze::new(2, 3)?;
/// assert_eq!(maze.room_count(), 6);
/// // 2 rows of 2 interior east walls, plus 3 south walls between the rows
/// assert_eq!(maze.walls().len(), 7);
/// # Ok::<(), warren_maze::MazeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GridMaze {
    rows: usize,
    cols: usize,
    walls: Vec<Wall>,
}

impl GridMaze {
    /// Builds a maze with `rows` x `cols` rooms and all walls standing.
    ///
    /// # Errors
    /// Returns [`MazeError::EmptyMaze`] when either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::EmptyMaze { rows, cols });
        }

        let mut walls = Vec::with_capacity(rows * (cols - 1) + (rows - 1) * cols);
        for row in 0..rows {
            for col in 0..cols {
                let room = Room::new(row, col);
                if col + 1 < cols {
                    walls.push(Wall {
                        id: walls.len(),
                        rooms: (room, Room::new(row, col + 1)),
                    });
                }
                if row + 1 < rows {
                    walls.push(Wall {
                        id: walls.len(),
                        rooms: (room, Room::new(row + 1, col)),
                    });
                }
            }
        }

        Ok(Self { rows, cols, walls })
    }

    /// Returns the number of room rows.
    #[must_use]
    #[rustfmt::skip]
    pub fn rows(&self) -> usize { self.rows }

    /// Returns the number of room columns.
    #[must_use]
    #[rustfmt::skip]
    pub fn cols(&self) -> usize { self.cols }

    /// Returns the number of rooms.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns every room in row-major order.
    pub fn rooms(&self) -> impl Iterator<Item = Room> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Room::new(row, col)))
    }

    /// Returns every wall, indexed by its id.
    #[must_use]
    #[rustfmt::skip]
    pub fn walls(&self) -> &[Wall] { &self.walls }

    /// Returns whether `room` lies within the grid.
    #[must_use]
    pub fn contains(&self, room: Room) -> bool {
        room.row < self.rows && room.col < self.cols
    }

    /// Returns whether `wall` is one of this maze's walls.
    #[must_use]
    pub fn owns(&self, wall: Wall) -> bool {
        self.walls.get(wall.id) == Some(&wall)
    }
}
