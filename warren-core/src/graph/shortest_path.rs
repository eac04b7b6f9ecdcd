//! Shortest-path query (Dijkstra's algorithm with predecessor edges).

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;

use tracing::{debug, instrument};

use crate::{
    edge::Edge,
    error::{GraphError, Result},
};

use super::{Graph, opposite_endpoint};

/// Frontier entry ordered by tentative distance, ties broken by discovery
/// order so repeated runs settle vertices in the same sequence.
struct FrontierEntry<'g, V> {
    distance: f64,
    discovery: u64,
    vertex: &'g V,
}

impl<V> PartialEq for FrontierEntry<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V> Eq for FrontierEntry<'_, V> {}

impl<V> Ord for FrontierEntry<'_, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.discovery.cmp(&other.discovery))
    }
}

impl<V> PartialOrd for FrontierEntry<'_, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, E> Graph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<Vertex = V> + Clone,
{
    /// Returns the edges of a shortest path from `start` to `end`.
    ///
    /// The first edge leaves `start` and the last arrives at `end`; when
    /// `start == end` the path is empty. Dijkstra's algorithm over the
    /// non-negative edge weights: a tentative-distance map (absent entries
    /// stand for infinity) and a priority frontier keyed by distance, with
    /// ties broken by discovery order. Each relaxation records the edge it
    /// travelled as the vertex's best predecessor; the path is reconstructed
    /// by walking those edges backward from `end` and reversing. The query
    /// exits as soon as `end` is settled.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when either endpoint is not a
    /// vertex of this graph, and [`GraphError::NoPathExists`] when the
    /// frontier drains before `end` is reached.
    ///
    /// # Examples
    /// ```
    /// use warren_core::{Edge, Graph, GraphError};
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Link(char, char, f64);
    ///
    /// impl Edge for Link {
    ///     type Vertex = char;
    ///
    ///     fn vertex1(&self) -> &char { &self.0 }
    ///     fn vertex2(&self) -> &char { &self.1 }
    ///     fn weight(&self) -> f64 { self.2 }
    /// }
    ///
    /// let graph = Graph::new(
    ///     ['a', 'b', 'c'],
    ///     [Link('a', 'b', 1.0), Link('b', 'c', 1.0), Link('a', 'c', 5.0)],
    /// )?;
    /// let path = graph.shortest_path_between(&'a', &'c')?;
    /// assert_eq!(path, vec![Link('a', 'b', 1.0), Link('b', 'c', 1.0)]);
    /// assert!(graph.shortest_path_between(&'a', &'a')?.is_empty());
    /// # Ok::<(), GraphError>(())
    /// ```
    #[instrument(
        name = "graph.shortest_path_between",
        skip(self, start, end),
        fields(vertices = self.num_vertices(), edges = self.num_edges()),
        err
    )]
    pub fn shortest_path_between(&self, start: &V, end: &V) -> Result<Vec<E>> {
        // Resolve both endpoints to graph-owned references so every map in
        // the search borrows from `self` alone.
        let start = self.vertices.get(start).ok_or(GraphError::UnknownVertex)?;
        let end = self.vertices.get(end).ok_or(GraphError::UnknownVertex)?;
        if start == end {
            return Ok(Vec::new());
        }

        let mut distances: HashMap<&V, f64> = HashMap::new();
        let mut predecessor: HashMap<&V, usize> = HashMap::new();
        let mut settled: HashSet<&V> = HashSet::new();
        let mut frontier = BinaryHeap::new();
        let mut discoveries = 0u64;

        distances.insert(start, 0.0);
        frontier.push(Reverse(FrontierEntry {
            distance: 0.0,
            discovery: discoveries,
            vertex: start,
        }));

        while let Some(Reverse(entry)) = frontier.pop() {
            let vertex = entry.vertex;
            if !settled.insert(vertex) {
                // stale frontier entry for an already-settled vertex
                continue;
            }
            if vertex == end {
                break;
            }

            let Some(edge_indices) = self.incident.get(vertex) else {
                continue;
            };
            for &edge_index in edge_indices {
                let edge = &self.edges[edge_index];
                let neighbor = opposite_endpoint(edge, vertex);
                if settled.contains(neighbor) {
                    continue;
                }
                let candidate = entry.distance + edge.weight();
                let best = distances.get(neighbor).copied().unwrap_or(f64::INFINITY);
                if candidate < best {
                    distances.insert(neighbor, candidate);
                    predecessor.insert(neighbor, edge_index);
                    discoveries += 1;
                    frontier.push(Reverse(FrontierEntry {
                        distance: candidate,
                        discovery: discoveries,
                        vertex: neighbor,
                    }));
                }
            }
        }

        if !settled.contains(end) {
            return Err(GraphError::NoPathExists);
        }

        let mut path = Vec::new();
        let mut cursor = end;
        while cursor != start {
            let edge_index = *predecessor.get(cursor).ok_or(GraphError::InvariantViolation {
                invariant: "every settled vertex besides the start records a predecessor edge",
            })?;
            let edge = &self.edges[edge_index];
            cursor = opposite_endpoint(edge, cursor);
            path.push(edge.clone());
        }
        path.reverse();

        debug!(hops = path.len(), "shortest path reconstructed");
        Ok(path)
    }
}
