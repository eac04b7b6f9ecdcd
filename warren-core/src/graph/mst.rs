//! Minimum-spanning-tree query (Kruskal's algorithm).

use std::hash::Hash;

use tracing::{debug, instrument, warn};

use crate::{
    disjoint_set::DisjointSet,
    edge::Edge,
    error::{GraphError, Result},
    sort::top_k_sort,
};

use super::Graph;

impl<V, E> Graph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<Vertex = V> + Ord + Clone,
{
    /// Returns the edges of a minimum spanning tree of this graph.
    ///
    /// Kruskal's algorithm: every edge is ordered ascending by weight (ties
    /// by input order), a fresh disjoint set tracks one component per vertex,
    /// and each edge joining two components is accepted. The result has
    /// `num_vertices() - 1` edges, in acceptance order, with no edge repeated.
    /// When several minimum spanning trees exist any one of them is returned,
    /// the same one on every call over the same input. A graph without
    /// vertices yields an empty tree.
    ///
    /// # Errors
    /// Returns [`GraphError::Disconnected`] when the graph has more than one
    /// component, rather than silently returning a spanning forest.
    ///
    /// # Examples
    /// ```
    /// use std::cmp::Ordering;
    ///
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
    /// impl Eq for Link {}
    ///
    /// impl Ord for Link {
    ///     fn cmp(&self, other: &Self) -> Ordering {
    ///         self.2.total_cmp(&other.2)
    ///     }
    /// }
    ///
    /// impl PartialOrd for Link {
    ///     fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    ///         Some(self.cmp(other))
    ///     }
    /// }
    ///
    /// let graph = Graph::new(
    ///     ['a', 'b', 'c'],
    ///     [Link('a', 'b', 1.0), Link('b', 'c', 2.0), Link('a', 'c', 4.0)],
    /// )?;
    /// let tree = graph.minimum_spanning_tree()?;
    /// assert_eq!(tree, vec![Link('a', 'b', 1.0), Link('b', 'c', 2.0)]);
    /// # Ok::<(), warren_core::GraphError>(())
    /// ```
    #[instrument(
        name = "graph.minimum_spanning_tree",
        skip(self),
        fields(vertices = self.num_vertices(), edges = self.num_edges()),
        err
    )]
    pub fn minimum_spanning_tree(&self) -> Result<Vec<E>> {
        if self.vertices.is_empty() {
            return Ok(Vec::new());
        }

        let ordered = top_k_sort(self.edges.len(), self.edges.iter());

        let mut partition = DisjointSet::new();
        for vertex in &self.vertices {
            partition
                .make_set(vertex)
                .map_err(|_| invariant("the vertex set holds no duplicates"))?;
        }

        let spanning_target = self.num_vertices() - 1;
        let mut accepted: Vec<E> = Vec::with_capacity(spanning_target);
        for edge in ordered {
            let first = partition
                .find_set(&edge.vertex1())
                .map_err(|_| invariant("every endpoint was registered before the scan"))?;
            let second = partition
                .find_set(&edge.vertex2())
                .map_err(|_| invariant("every endpoint was registered before the scan"))?;
            if first != second {
                partition
                    .union(&edge.vertex1(), &edge.vertex2())
                    .map_err(|_| invariant("accepted edges join distinct components"))?;
                accepted.push(edge.clone());
                if accepted.len() == spanning_target {
                    break;
                }
            }
        }

        let components = partition.components();
        if components > 1 {
            warn!(components, "graph is not connected, refusing a spanning forest");
            return Err(GraphError::Disconnected { components });
        }

        debug!(accepted = accepted.len(), "spanning tree complete");
        Ok(accepted)
    }
}

fn invariant(invariant: &'static str) -> GraphError {
    GraphError::InvariantViolation { invariant }
}
