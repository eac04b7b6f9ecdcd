//! Routing through a carved maze.

use std::cmp::Ordering;

use warren_core::{Edge, Graph};

use crate::{
    errors::MazeError,
    maze::{GridMaze, Room, Wall},
};

/// An opened passage: a removed wall traversed at unit cost.
#[derive(Clone, Debug, PartialEq)]
struct Passage {
    wall: Wall,
}

impl Edge for Passage {
    type Vertex = Room;

    fn vertex1(&self) -> &Room {
        &self.wall.rooms.0
    }

    fn vertex2(&self) -> &Room {
        &self.wall.rooms.1
    }

    fn weight(&self) -> f64 {
        1.0
    }
}

impl Eq for Passage {}

impl Ord for Passage {
    fn cmp(&self, other: &Self) -> Ordering {
        self.wall.id.cmp(&other.wall.id)
    }
}

impl PartialOrd for Passage {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Returns the rooms visited on the shortest route from `from` to `to`
/// through the passages opened by `removed`, endpoints included.
///
/// In a perfect maze the route is unique; the shortest-path query also
/// answers imperfect mazes (extra walls removed) correctly.
///
/// # Errors
/// Returns [`MazeError::UnknownRoom`] when an endpoint lies outside the
/// grid, [`MazeError::ForeignWall`] when a removed wall does not belong to
/// `maze`, and [`MazeError::Graph`] when no route exists.
pub fn solve(
    maze: &GridMaze,
    removed: &[Wall],
    from: Room,
    to: Room,
) -> Result<Vec<Room>, MazeError> {
    for room in [from, to] {
        if !maze.contains(room) {
            return Err(MazeError::UnknownRoom {
                row: room.row(),
                col: room.col(),
            });
        }
    }
    for &wall in removed {
        if !maze.owns(wall) {
            return Err(MazeError::ForeignWall { id: wall.id });
        }
    }

    let passages = removed.iter().map(|&wall| Passage { wall });
    let graph = Graph::new(maze.rooms(), passages.collect::<Vec<_>>())?;
    let path = graph.shortest_path_between(&from, &to)?;

    let mut rooms = Vec::with_capacity(path.len() + 1);
    rooms.push(from);
    let mut at = from;
    for passage in &path {
        let (first, second) = passage.wall.rooms;
        at = if first == at { second } else { first };
        rooms.push(at);
    }
    Ok(rooms)
}
