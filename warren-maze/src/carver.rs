//! Kruskal maze carving over randomized wall weights.

use std::cmp::Ordering;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use warren_core::{Edge, Graph};

use crate::{
    errors::MazeError,
    maze::{GridMaze, Room, Wall},
};

/// A wall paired with the transient weight it carries for one carve.
///
/// Weights live only on these wrappers; the maze's own walls are never
/// touched, so the input is observably unchanged by a carve.
#[derive(Clone, Debug, PartialEq)]
struct WeightedWall {
    wall: Wall,
    weight: f64,
}

impl Edge for WeightedWall {
    type Vertex = Room;

    fn vertex1(&self) -> &Room {
        &self.wall.rooms.0
    }

    fn vertex2(&self) -> &Room {
        &self.wall.rooms.1
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}

impl Eq for WeightedWall {}

impl Ord for WeightedWall {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.wall.id.cmp(&other.wall.id))
    }
}

impl PartialOrd for WeightedWall {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Carves perfect mazes by spanning the room grid with randomized weights.
///
/// Every wall is assigned a uniform random weight and the minimum spanning
/// tree over the rooms picks the walls to knock through. A seeded carver
/// reproduces the same maze on every call.
///
/// # Examples
/// ```
/// use warren_maze::{GridMaze, KruskalCarver};
///
/// let maze = GridMaze::new(4, 4)?;
/// let removed = KruskalCarver::with_seed(7).walls_to_remove(&maze)?;
/// // a perfect maze opens exactly rooms - 1 passages
/// assert_eq!(removed.len(), maze.room_count() - 1);
/// # Ok::<(), warren_maze::MazeError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct KruskalCarver {
    seed: Option<u64>,
}

impl KruskalCarver {
    /// Creates a carver drawing weights from entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a carver whose weight sequence is fixed by `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Returns the walls to remove so every room becomes reachable and no
    /// passage loop exists.
    ///
    /// # Errors
    /// Returns [`MazeError::Graph`] when the spanning-tree query fails; a
    /// grid maze is connected by construction, so this indicates a logic
    /// error rather than a caller mistake.
    #[instrument(
        name = "maze.carve",
        skip(self, maze),
        fields(rooms = maze.room_count(), walls = maze.walls().len()),
        err
    )]
    pub fn walls_to_remove(&self, maze: &GridMaze) -> Result<Vec<Wall>, MazeError> {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let weighted = maze.walls().iter().map(|&wall| WeightedWall {
            wall,
            weight: rng.r#gen(),
        });
        let graph = Graph::new(maze.rooms(), weighted.collect::<Vec<_>>())?;

        let tree = graph.minimum_spanning_tree()?;
        debug!(removed = tree.len(), "carve complete");
        Ok(tree.into_iter().map(|weighted| weighted.wall).collect())
    }
}
