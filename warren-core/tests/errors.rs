use rstest::rstest;

use warren_core::{DisjointSetError, DisjointSetErrorCode, GraphError, GraphErrorCode};

#[rstest]
#[case(DisjointSetError::DuplicateElement, DisjointSetErrorCode::DuplicateElement)]
#[case(DisjointSetError::UnknownElement, DisjointSetErrorCode::UnknownElement)]
#[case(
    DisjointSetError::AlreadyUnioned { root: 3 },
    DisjointSetErrorCode::AlreadyUnioned,
)]
fn returns_expected_disjoint_set_code(
    #[case] error: DisjointSetError,
    #[case] expected: DisjointSetErrorCode,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
}

#[rstest]
#[case(
    GraphError::NegativeWeight { index: 0, weight: -1.5 },
    GraphErrorCode::InvalidEdge,
)]
#[case(GraphError::NonFiniteWeight { index: 2 }, GraphErrorCode::InvalidEdge)]
#[case(GraphError::MissingEndpoint { index: 1 }, GraphErrorCode::InvalidEdge)]
#[case(GraphError::Disconnected { components: 4 }, GraphErrorCode::Disconnected)]
#[case(GraphError::UnknownVertex, GraphErrorCode::UnknownVertex)]
#[case(GraphError::NoPathExists, GraphErrorCode::NoPathExists)]
#[case(
    GraphError::InvariantViolation { invariant: "test" },
    GraphErrorCode::InvariantViolation,
)]
fn returns_expected_graph_code(#[case] error: GraphError, #[case] expected: GraphErrorCode) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
}

#[test]
fn graph_errors_render_their_context() {
    let rendered = GraphError::NegativeWeight {
        index: 3,
        weight: -0.5,
    }
    .to_string();
    assert_eq!(rendered, "edge at position 3 has negative weight -0.5");

    let rendered = GraphError::Disconnected { components: 2 }.to_string();
    assert_eq!(
        rendered,
        "graph has 2 unconnected components, spanning tree requires exactly 1"
    );
}
