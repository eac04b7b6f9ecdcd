//! Static weighted undirected graph with spanning-tree and shortest-path
//! queries.
//!
//! A [`Graph`] is built once from vertex and edge collections, validated up
//! front, and immutable thereafter. Self-loops and parallel edges are
//! admitted, matching the entity models this engine is consumed with: a
//! self-loop can never join two components and never shortens a path, and
//! parallel edges simply compete by weight.

mod mst;
mod shortest_path;

#[cfg(test)]
mod property;

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::{
    edge::Edge,
    error::{GraphError, Result},
};

/// An undirected, weighted, immutable graph.
///
/// `V` is the caller's vertex identity type; `E` is the caller's edge type,
/// bound by [`Edge`] for access and by `Ord` where a query needs to order
/// edges by weight.
///
/// # Examples
/// ```
/// use warren_core::{Edge, Graph};
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
/// let graph = Graph::new(['a', 'b', 'c'], [Link('a', 'b', 1.0), Link('b', 'c', 2.0)])?;
/// assert_eq!(graph.num_vertices(), 3);
/// assert_eq!(graph.num_edges(), 2);
/// assert!(graph.neighbors(&'b').is_some_and(|adjacent| adjacent.contains(&'a')));
/// # Ok::<(), warren_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph<V, E> {
    vertices: HashSet<V>,
    edges: Vec<E>,
    adjacency: HashMap<V, HashSet<V>>,
    incident: HashMap<V, Vec<usize>>,
}

impl<V, E> Graph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<Vertex = V>,
{
    /// Builds a graph from vertex and edge collections.
    ///
    /// Edges keep their input order, which later queries use as the
    /// deterministic tie-break among equal weights. The adjacency mapping is
    /// the symmetric closure of the edge sequence; isolated vertices map to
    /// an empty neighbour set.
    ///
    /// # Errors
    /// Returns [`GraphError::NegativeWeight`], [`GraphError::NonFiniteWeight`],
    /// or [`GraphError::MissingEndpoint`] when an edge violates the
    /// construction contract. Construction is all-or-nothing.
    pub fn new(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = E>,
    ) -> Result<Self> {
        let vertices: HashSet<V> = vertices.into_iter().collect();
        let edges: Vec<E> = edges.into_iter().collect();

        let mut adjacency: HashMap<V, HashSet<V>> = vertices
            .iter()
            .map(|vertex| (vertex.clone(), HashSet::new()))
            .collect();
        let mut incident: HashMap<V, Vec<usize>> = vertices
            .iter()
            .map(|vertex| (vertex.clone(), Vec::new()))
            .collect();

        for (index, edge) in edges.iter().enumerate() {
            validate_edge(index, edge, &vertices)?;

            let first = edge.vertex1();
            let second = edge.vertex2();
            if let Some(adjacent) = adjacency.get_mut(first) {
                adjacent.insert(second.clone());
            }
            if let Some(adjacent) = adjacency.get_mut(second) {
                adjacent.insert(first.clone());
            }
            if let Some(indices) = incident.get_mut(first) {
                indices.push(index);
            }
            if second != first
                && let Some(indices) = incident.get_mut(second)
            {
                indices.push(index);
            }
        }

        Ok(Self {
            vertices,
            edges,
            adjacency,
            incident,
        })
    }

    /// Returns the number of vertices contained within this graph.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges contained within this graph.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns the vertex set.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &HashSet<V> { &self.vertices }

    /// Returns the edges in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[E] { &self.edges }

    /// Returns the neighbours of `vertex`, or `None` when the vertex is not
    /// part of the graph.
    #[must_use]
    pub fn neighbors(&self, vertex: &V) -> Option<&HashSet<V>> {
        self.adjacency.get(vertex)
    }
}

impl<V, E> Graph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<Vertex = V> + Eq + Hash,
{
    /// Builds a graph from vertex and edge sets.
    ///
    /// A convenience conversion for callers that hold their entities as sets;
    /// shares the construction contract of [`Graph::new`].
    ///
    /// # Errors
    /// As [`Graph::new`].
    pub fn from_sets(vertices: HashSet<V>, edges: HashSet<E>) -> Result<Self> {
        Self::new(vertices, edges)
    }
}

fn validate_edge<V, E>(index: usize, edge: &E, vertices: &HashSet<V>) -> Result<()>
where
    V: Eq + Hash,
    E: Edge<Vertex = V>,
{
    let weight = edge.weight();
    if !weight.is_finite() {
        return Err(GraphError::NonFiniteWeight { index });
    }
    if weight < 0.0 {
        return Err(GraphError::NegativeWeight { index, weight });
    }
    if !vertices.contains(edge.vertex1()) || !vertices.contains(edge.vertex2()) {
        return Err(GraphError::MissingEndpoint { index });
    }
    Ok(())
}

/// Returns the endpoint of `edge` opposite to `from`.
///
/// For a self-loop both endpoints coincide and either answer is correct.
fn opposite_endpoint<'e, V, E>(edge: &'e E, from: &V) -> &'e V
where
    V: Eq,
    E: Edge<Vertex = V>,
{
    if edge.vertex1() == from {
        edge.vertex2()
    } else {
        edge.vertex1()
    }
}
