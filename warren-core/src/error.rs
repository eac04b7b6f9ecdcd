//! Error types for the warren core engine.
//!
//! Every condition here is caller-fault and fails fast: nothing is retried,
//! logged-and-swallowed, or downgraded to a default value. Each enum exposes
//! a stable machine-readable code for logging and metrics surfaces.

use thiserror::Error;

/// Errors returned by [`crate::DisjointSet`] operations.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum DisjointSetError {
    /// `make_set` was called with an element the partition already tracks.
    #[error("element is already tracked by this partition")]
    DuplicateElement,
    /// The element was never registered via `make_set`.
    #[error("element was never registered with make_set")]
    UnknownElement,
    /// `union` was called with two elements of the same component.
    #[error("both elements already belong to component {root}")]
    AlreadyUnioned {
        /// Canonical handle of the component both elements belong to.
        root: usize,
    },
}

impl DisjointSetError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> DisjointSetErrorCode {
        match self {
            Self::DuplicateElement => DisjointSetErrorCode::DuplicateElement,
            Self::UnknownElement => DisjointSetErrorCode::UnknownElement,
            Self::AlreadyUnioned { .. } => DisjointSetErrorCode::AlreadyUnioned,
        }
    }
}

/// Machine-readable error codes for [`DisjointSetError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DisjointSetErrorCode {
    /// `make_set` was called with an element that is already tracked.
    DuplicateElement,
    /// An operation referenced an element that was never registered.
    UnknownElement,
    /// `union` was called with two elements of the same component.
    AlreadyUnioned,
}

impl DisjointSetErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DuplicateElement => "DUPLICATE_ELEMENT",
            Self::UnknownElement => "UNKNOWN_ELEMENT",
            Self::AlreadyUnioned => "ALREADY_UNIONED",
        }
    }
}

/// Errors returned while constructing or querying a [`crate::Graph`].
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum GraphError {
    /// An edge carried a negative weight.
    #[error("edge at position {index} has negative weight {weight}")]
    NegativeWeight {
        /// Position of the edge in the input sequence.
        index: usize,
        /// The offending weight.
        weight: f64,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge at position {index} has a non-finite weight")]
    NonFiniteWeight {
        /// Position of the edge in the input sequence.
        index: usize,
    },
    /// An edge endpoint is absent from the vertex collection.
    #[error("edge at position {index} connects to a vertex absent from the graph")]
    MissingEndpoint {
        /// Position of the edge in the input sequence.
        index: usize,
    },
    /// A spanning tree was requested for a graph with unconnected components.
    #[error("graph has {components} unconnected components, spanning tree requires exactly 1")]
    Disconnected {
        /// Number of components left after scanning every edge.
        components: usize,
    },
    /// A query referenced a vertex that is not part of the graph.
    #[error("vertex is not part of this graph")]
    UnknownVertex,
    /// No path exists between the requested vertices.
    #[error("no path exists between the requested vertices")]
    NoPathExists,
    /// An internal invariant was violated, indicating a logic error.
    #[error("graph invariant violated: {invariant}")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
    },
}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    ///
    /// The three construction failures all report [`GraphErrorCode::InvalidEdge`]:
    /// callers distinguish an invalid edge from the other conditions by code and
    /// read the specific cause from the variant itself.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::NegativeWeight { .. } | Self::NonFiniteWeight { .. } | Self::MissingEndpoint { .. } => {
                GraphErrorCode::InvalidEdge
            }
            Self::Disconnected { .. } => GraphErrorCode::Disconnected,
            Self::UnknownVertex => GraphErrorCode::UnknownVertex,
            Self::NoPathExists => GraphErrorCode::NoPathExists,
            Self::InvariantViolation { .. } => GraphErrorCode::InvariantViolation,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphErrorCode {
    /// Construction was given a negative-weight, non-finite, or dangling edge.
    InvalidEdge,
    /// A spanning tree was requested for a graph with unconnected components.
    Disconnected,
    /// A query referenced a vertex that is not part of the graph.
    UnknownVertex,
    /// No path exists between the requested vertices.
    NoPathExists,
    /// An internal invariant was violated.
    InvariantViolation,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidEdge => "INVALID_EDGE",
            Self::Disconnected => "DISCONNECTED",
            Self::UnknownVertex => "UNKNOWN_VERTEX",
            Self::NoPathExists => "NO_PATH_EXISTS",
            Self::InvariantViolation => "INVARIANT_VIOLATION",
        }
    }
}

/// Convenient alias for results returned by graph queries.
pub type Result<T> = core::result::Result<T, GraphError>;
